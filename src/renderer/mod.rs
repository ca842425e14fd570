mod __tests__;
pub(crate) mod compose;
mod config;
mod delete;
mod error;
mod insert;
mod select;
mod update;
pub(crate) mod writer;

pub use config::{default_dialect, set_default_dialect, Dialect, PlaceholderStyle};
pub use error::{Error, Result};

use crate::param::Param;
use crate::query_builder::{Builder, BuilderErrorList};
use crate::renderer::writer::number_placeholders;

/// Сборка оператора целиком: текст + бинды + финальный диалектный прогон.
pub fn render_builder(b: &Builder) -> Result<(String, Vec<Param>)> {
    // бинды считаются заново при каждом рендере
    let mut binds = Vec::new();
    let sql = render_statement(b, &mut binds)?;

    let sql = match b.dialect().placeholder_style() {
        PlaceholderStyle::Numbered => number_placeholders(&sql, binds.len()),
        PlaceholderStyle::Question => sql,
    };

    Ok((sql, binds))
}

/// Рендер без диалектного прогона — общий путь и для верхнего уровня,
/// и для вложенных билдеров (у вложенных нумерацию делает родитель).
///
/// Семейство выводится из заполненных клауз: update/set → update,
/// delete → delete, insert → insert, иначе select.
pub(crate) fn render_statement(b: &Builder, binds: &mut Vec<Param>) -> Result<String> {
    // вложенные билдеры идут этим путём в обход to_sql(),
    // их накопленные ошибки проверяются здесь
    if !b.builder_errors.is_empty() {
        return Err(Error::InvalidBuilder(BuilderErrorList::from(
            &b.builder_errors,
        )));
    }

    let sql = if b.update.is_some() || b.set.is_some() {
        update::render_update(b, binds)?
    } else if b.delete.is_some() {
        delete::render_delete(b, binds)?
    } else if b.insert_target.is_some() {
        insert::render_insert(b, binds)?
    } else {
        select::render_select(b, binds)?
    };

    if b.having.is_some() && b.group_by.is_none() {
        return Err(Error::HavingWithoutGroupBy { sql });
    }

    Ok(sql)
}
