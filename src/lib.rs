pub mod expression;
pub mod param;
pub mod query_builder;
pub mod renderer;

pub use expression::helpers::{bind, raw, RawSql};
pub use expression::logic::{and, nand, nor, or, xor};
pub use expression::Cond;
pub use param::Param;
pub use query_builder::{row, Builder, Error, Result, ValuesRow};
pub use renderer::{default_dialect, set_default_dialect, Dialect};

/// Пустой билдер с диалектом по умолчанию.
#[inline]
pub fn builder() -> Builder {
    Builder::new()
}
