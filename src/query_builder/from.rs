use crate::query_builder::{
    args::{Fragment, FragmentList},
    Builder,
};

impl Builder {
    /// FROM <таблицы>. Голый подзапрос здесь запрещён: ему нужен алиас,
    /// передайте его шаблоном — `bind("(?) t", sub)`.
    pub fn from<L>(mut self, tables: L) -> Self
    where
        L: FragmentList,
    {
        let args = tables.into_vec();

        for arg in &args {
            if let Fragment::Subquery(qb) = arg {
                let sub_sql = match qb.to_sql() {
                    Ok((sql, _)) => sql,
                    Err(_) => "<unrenderable subquery>".to_string(),
                };
                self.push_builder_error(format!(
                    "from(): you need to name your subquery: {sub_sql}"
                ));
                return self;
            }
        }

        Self::extend_clause(&mut self.from, args);
        self
    }
}
