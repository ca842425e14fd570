use core::fmt;

use crate::param::Param;
use crate::query_builder::{Builder, BuilderErrorList, Error, Result};
use crate::renderer;

impl Builder {
    /// Рендер оператора: `(sql, binds)`.
    ///
    /// Read-only и идемпотентно: бинды каждый раз считаются заново,
    /// между вызовами ничего не протекает.
    pub fn to_sql(&self) -> Result<(String, Vec<Param>)> {
        if !self.builder_errors.is_empty() {
            return Err(Error::BuilderErrors(BuilderErrorList::from(
                &self.builder_errors,
            )));
        }
        Ok(renderer::render_builder(self)?)
    }

    /// Только текст.
    pub fn sql(&self) -> Result<String> {
        self.to_sql().map(|(sql, _)| sql)
    }

    /// Только бинды, в порядке плейсхолдеров слева направо.
    pub fn binds(&self) -> Result<Vec<Param>> {
        self.to_sql().map(|(_, binds)| binds)
    }

    /// Вернуть билдер к пустому состоянию на месте.
    /// Диалект при этом перечитывается из текущего default.
    pub fn reset(&mut self) {
        *self = Builder::new();
    }
}

impl fmt::Display for Builder {
    /// Строковое представление — это `sql()`; Display не умеет падать,
    /// поэтому при ошибке рендера печатаем её текст.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_sql() {
            Ok((sql, _)) => f.write_str(&sql),
            Err(e) => write!(f, "<normsql error: {e}>"),
        }
    }
}
