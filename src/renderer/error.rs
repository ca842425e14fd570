use crate::query_builder::BuilderErrorList;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("You must specify update and set clauses.")]
    MissingUpdateSet,

    /// Структурные ошибки сбора, дошедшие до рендера: так всплывают
    /// ошибки вложенных билдеров, у которых своего `to_sql()` не было
    #[error("Builder errors:\n{0}")]
    InvalidBuilder(BuilderErrorList),

    #[error("You must specify a delete clause.")]
    MissingDeleteTarget,

    #[error("You must specify a values or select clause.")]
    MissingInsertSource,

    /// В ошибку попадает уже собранный SQL — для диагностики
    #[error("You must have a group by clause to use a having clause: {sql}")]
    HavingWithoutGroupBy { sql: String },

    #[error("Template has {markers} placeholder(s) for {values} value(s): {template}")]
    PlaceholderMismatch {
        template: String,
        values: usize,
        markers: usize,
    },

    #[error("Unknown dialect: {name}")]
    UnknownDialect { name: String },
}
