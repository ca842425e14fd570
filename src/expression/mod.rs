pub mod helpers;
pub mod logic;

use core::fmt;

use crate::param::Param;
use crate::query_builder::args::Fragment;
use crate::query_builder::Result;
use crate::renderer::compose;

pub use helpers::{bind, raw, RawSql};
pub use logic::{and, nand, nor, or, xor};

/// Сгруппированная конъюнкция: результат `and()/or()/nand()/nor()/xor()`.
///
/// Рендерится в скобках; годится и как самостоятельное выражение
/// (`sql()` / `sql_and_binds()`), и как фрагмент внутри другой клаузы —
/// тогда её бинды вклиниваются в аккумулятор родителя на своём месте.
#[derive(Debug, Clone)]
pub struct Cond {
    pub(crate) joiner: &'static str,
    pub(crate) negated: bool,
    pub(crate) fragments: Vec<Fragment>,
}

impl Cond {
    /// Текст выражения; бинды при этом считаются и отбрасываются.
    pub fn sql(&self) -> Result<String> {
        self.sql_and_binds().map(|(sql, _)| sql)
    }

    /// Текст вместе с биндами — ничего не теряется даже у `not`-форм.
    pub fn sql_and_binds(&self) -> Result<(String, Vec<Param>)> {
        let mut binds = Vec::new();
        let sql = compose::render_cond(self, &mut binds)?;
        Ok((sql, binds))
    }
}

impl fmt::Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.sql() {
            Ok(sql) => f.write_str(&sql),
            Err(e) => write!(f, "<normsql error: {e}>"),
        }
    }
}
