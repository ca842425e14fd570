use crate::expression::Cond;
use crate::param::Param;
use crate::query_builder::args::{Fragment, TupleValue};
use crate::renderer::writer::{strip_conjunction, SqlWriter};
use crate::renderer::{render_statement, Error, Result};

/// Свёртка списка фрагментов в текст клаузы.
///
/// Явная итерация слева направо: текст и бинды появляются строго в
/// порядке аргументов, независимо от вложенности. Каждый фрагмент
/// даёт ` <текст><conjunction>`, хвостовой разделитель срезается.
pub(crate) fn render_clause(
    base: &str,
    fragments: &[Fragment],
    conjunction: &str,
    binds: &mut Vec<Param>,
) -> Result<String> {
    let mut w = SqlWriter::new(base.len() + fragments.len() * 16);
    w.push(base);

    for fragment in fragments {
        w.push_char(' ');
        render_fragment(fragment, &mut w, binds)?;
        w.push(conjunction);
    }

    Ok(strip_conjunction(w.finish(), conjunction))
}

fn render_fragment(fragment: &Fragment, w: &mut SqlWriter, binds: &mut Vec<Param>) -> Result<()> {
    match fragment {
        Fragment::Literal(text) => w.push(text),

        Fragment::Raw(f) => {
            let text = f.call(binds);
            w.push(&text);
        }

        // подзапрос — в скобках, его бинды встают на текущую позицию
        Fragment::Subquery(qb) => {
            let sql = render_statement(qb, binds)?;
            w.push_char('(');
            w.push(&sql);
            w.push_char(')');
        }

        Fragment::Tuple(t) => {
            let sql = substitute_template(&t.template, &t.values, binds)?;
            w.push(&sql);
        }

        Fragment::Group(cond) => {
            let sql = render_cond(cond, binds)?;
            w.push(&sql);
        }
    }
    Ok(())
}

/// Подстановка шаблона: N-е вхождение `?` — N-му значению.
///
/// Один проход по шаблону; уже подставленные области не пересканируются,
/// так что `?` внутри значений маркером считаться не может.
pub(crate) fn substitute_template(
    template: &str,
    values: &[TupleValue],
    binds: &mut Vec<Param>,
) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 8);
    let mut vals = values.iter();
    let mut consumed = 0usize;
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '?' {
            out.push(ch);
            continue;
        }

        let Some(value) = vals.next() else {
            return Err(placeholder_mismatch(template, values.len()));
        };
        consumed += 1;

        match value {
            TupleValue::Scalar(p) => {
                out.push('?');
                binds.push(p.clone());
            }

            // список длины N → N плейсхолдеров через запятую
            TupleValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push('?');
                    binds.push(item.clone());
                }
            }

            TupleValue::Sub(qb) => {
                // `(?)` в шаблоне скобки уже несёт — не дублируем их
                let wrapped = out.ends_with('(') && chars.peek() == Some(&')');
                let sql = render_statement(qb, binds)?;
                if wrapped {
                    out.push_str(&sql);
                } else {
                    out.push('(');
                    out.push_str(&sql);
                    out.push(')');
                }
            }
        }
    }

    if consumed < values.len() {
        return Err(placeholder_mismatch(template, values.len()));
    }

    Ok(out)
}

fn placeholder_mismatch(template: &str, values: usize) -> Error {
    Error::PlaceholderMismatch {
        template: template.to_string(),
        values,
        markers: template.matches('?').count(),
    }
}

/// Рендер конъюнкции: тело через её joiner, в скобках,
/// у негированных форм с префиксом `not `.
pub(crate) fn render_cond(cond: &Cond, binds: &mut Vec<Param>) -> Result<String> {
    let body = render_clause("", &cond.fragments, cond.joiner, binds)?;
    let body = body.trim();

    Ok(if cond.negated {
        format!("not ({body})")
    } else {
        format!("({body})")
    })
}
