use crate::query_builder::{args::FragmentList, Builder};

impl Builder {
    /// DELETE FROM <таблица>; переключает билдер в delete-семейство.
    pub fn delete<L>(mut self, targets: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.delete, targets.into_vec());
        self
    }

    /// USING <таблицы> (multi-table delete).
    pub fn using<L>(mut self, tables: L) -> Self
    where
        L: FragmentList,
    {
        Self::extend_clause(&mut self.using, tables.into_vec());
        self
    }
}
