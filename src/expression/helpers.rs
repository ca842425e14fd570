use crate::query_builder::args::{BindList, Fragment, TemplatedTuple};

/// Сырой SQL-текст. Как фрагмент клаузы попадает в текст как есть;
/// как ячейка `values()` — печатается вместо плейсхолдера, без бинда.
#[derive(Debug, Clone)]
pub struct RawSql(pub(crate) String);

/// `raw("NOW()")` — метка «не биндить».
#[inline]
pub fn raw<S>(sql: S) -> RawSql
where
    S: Into<String>,
{
    RawSql(sql.into())
}

/// Шаблон с позиционными значениями:
///
/// `bind("t.id < ?", 5)`, `bind("a ? b ?", (1, 2))`,
/// `bind("wow in ?", vec![1, 2, 3])`, `bind("(?) t", sub_builder)`.
///
/// На каждое значение в шаблоне должен быть ровно один `?`
/// (список и подзапрос тоже занимают один `?`).
#[inline]
pub fn bind<S, B>(template: S, values: B) -> Fragment
where
    S: Into<String>,
    B: BindList,
{
    Fragment::Tuple(TemplatedTuple {
        template: template.into(),
        values: values.into_values(),
    })
}
