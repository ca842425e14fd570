use std::borrow::Cow;

use smallvec::SmallVec;

use crate::query_builder::args::Fragment;
use crate::query_builder::insert::ValuesNode;
use crate::renderer::{default_dialect, Dialect};

mod __tests__;
pub mod args;
mod delete;
mod distinct;
mod error;
mod from;
mod group_by;
mod having;
mod insert;
mod limit;
mod order_by;
mod select;
mod sql;
mod update;
mod where_clause;

pub use error::{BuilderErrorList, Error, Result};
pub use insert::{row, CellList, IntoValueCell, IntoValuesRow, ValueCell, ValuesList, ValuesRow};
pub use limit::Limit;

/// Билдер SQL-операторов из фрагментов.
///
/// Семейство оператора (select/update/delete/insert) нигде не хранится —
/// оно выводится при рендере из того, какие клаузы заполнены.
#[derive(Debug, Clone)]
pub struct Builder {
    pub(crate) select: Option<Vec<Fragment>>,
    pub(crate) from: Option<Vec<Fragment>>,
    pub(crate) where_clause: Option<Vec<Fragment>>,
    pub(crate) group_by: Option<Vec<Fragment>>,
    pub(crate) having: Option<Vec<Fragment>>,
    pub(crate) order_by: Option<Vec<Fragment>>,
    pub(crate) limit: Option<Limit>,
    pub(crate) distinct: bool,

    pub(crate) update: Option<Vec<Fragment>>,
    pub(crate) set: Option<Vec<Fragment>>,

    pub(crate) delete: Option<Vec<Fragment>>,
    pub(crate) using: Option<Vec<Fragment>>,

    pub(crate) insert_target: Option<String>,
    pub(crate) values: Option<ValuesNode>,

    /// Диалект фиксируется в момент создания билдера.
    pub(crate) dialect: Dialect,

    // ошибки сбора: всплывут при рендере
    pub(crate) builder_errors: SmallVec<[Cow<'static, str>; 2]>,
}

impl Builder {
    /// Пустой билдер; диалект берётся из текущего process-wide default.
    pub fn new() -> Self {
        Self::with_dialect(default_dialect())
    }

    /// Пустой билдер с явным диалектом.
    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            select: None,
            from: None,
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            limit: None,
            distinct: false,
            update: None,
            set: None,
            delete: None,
            using: None,
            insert_target: None,
            values: None,
            dialect,
            builder_errors: SmallVec::new(),
        }
    }

    #[inline]
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    #[inline]
    pub(crate) fn push_builder_error(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.builder_errors.push(msg.into());
    }

    /// Общий путь всех клауз-сеттеров: дописать фрагменты в конец списка.
    #[inline]
    pub(crate) fn extend_clause(slot: &mut Option<Vec<Fragment>>, args: Vec<Fragment>) {
        if args.is_empty() {
            return;
        }
        slot.get_or_insert_with(Vec::new).extend(args);
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}
