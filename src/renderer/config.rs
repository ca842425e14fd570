use std::fmt::Display;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

use crate::renderer::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    SQLite,
    MySQL,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderStyle {
    /// $1, $2, $3... (Postgres)
    Numbered,
    /// ? (SQLite/MySQL)
    Question,
}

impl Dialect {
    #[inline]
    pub fn placeholder_style(self) -> PlaceholderStyle {
        match self {
            Dialect::Postgres => PlaceholderStyle::Numbered,
            Dialect::MySQL | Dialect::SQLite => PlaceholderStyle::Question,
        }
    }
}

impl Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Postgres => write!(f, "postgres"),
            Dialect::SQLite => write!(f, "sqlite"),
            Dialect::MySQL => write!(f, "mysql"),
        }
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mysql" => Ok(Dialect::MySQL),
            "postgres" | "postgresql" => Ok(Dialect::Postgres),
            "sqlite" => Ok(Dialect::SQLite),
            other => Err(Error::UnknownDialect {
                name: other.to_string(),
            }),
        }
    }
}

// Process-wide default: билдер снимает его в момент создания,
// уже существующие билдеры смена не трогает.
static DEFAULT_DIALECT: RwLock<Dialect> = RwLock::new(Dialect::MySQL);

/// Текущий диалект по умолчанию для новых билдеров.
pub fn default_dialect() -> Dialect {
    *DEFAULT_DIALECT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Сменить диалект по умолчанию для создаваемых после этого билдеров.
pub fn set_default_dialect(dialect: Dialect) {
    *DEFAULT_DIALECT
        .write()
        .unwrap_or_else(PoisonError::into_inner) = dialect;
}
