use crate::param::Param;
use crate::query_builder::{Builder, ValueCell};
use crate::renderer::select::render_select;
use crate::renderer::writer::SqlWriter;
use crate::renderer::{Error, Result};

/// Две формы: матрица значений
/// `insert into <target> [(cols)] values (<row>),(<row>),…`
/// и insert-select — select-конвейер, подклеенный после insert-клаузы.
pub(crate) fn render_insert(b: &Builder, binds: &mut Vec<Param>) -> Result<String> {
    let Some(target) = &b.insert_target else {
        return Err(Error::MissingInsertSource);
    };

    if let Some(values) = &b.values {
        let mut w = SqlWriter::new(32 + values.rows.len() * 16);
        w.push("insert into ");
        w.push(target);
        w.push_char(' ');

        if let Some(columns) = &values.columns {
            w.push_char('(');
            for (i, col) in columns.iter().enumerate() {
                w.push_sep(i, ",");
                w.push(col);
            }
            w.push(") ");
        }

        w.push("values");
        for (i, row) in values.rows.iter().enumerate() {
            w.push(if i == 0 { " (" } else { ",(" });
            for (j, cell) in row.iter().enumerate() {
                w.push_sep(j, ",");
                match cell {
                    ValueCell::Bind(p) => {
                        w.push_char('?');
                        binds.push(p.clone());
                    }
                    // raw-ячейка уходит в текст дословно, без бинда
                    ValueCell::Raw(text) => w.push(text),
                }
            }
            w.push_char(')');
        }

        return Ok(w.finish());
    }

    if b.select.is_some() {
        let select_sql = render_select(b, binds)?;
        return Ok(format!("insert into {target} {select_sql}"));
    }

    Err(Error::MissingInsertSource)
}
