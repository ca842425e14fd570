use smallvec::SmallVec;

use crate::param::Param;
use crate::query_builder::{Builder, Limit};
use crate::renderer::compose::render_clause;
use crate::renderer::writer::{join_parts, SqlWriter};
use crate::renderer::Result;

/// select [distinct] <cols> from <tables> [where] [group by] [having]
/// [order by] [limit]. Дефолты: `select 1`, `from dual`.
pub(crate) fn render_select(b: &Builder, binds: &mut Vec<Param>) -> Result<String> {
    let mut parts: SmallVec<[String; 7]> = SmallVec::new();

    // DISTINCT — это замена ведущего токена, поэтому идемпотентен
    let select_base = if b.distinct { "select distinct" } else { "select" };
    parts.push(match &b.select {
        Some(frags) => render_clause(select_base, frags, ",", binds)?,
        None => format!("{select_base} 1"),
    });

    parts.push(match &b.from {
        Some(frags) => render_clause("from", frags, ",", binds)?,
        None => "from dual".to_string(),
    });

    if let Some(frags) = &b.where_clause {
        parts.push(render_clause("where", frags, " and", binds)?);
    }
    if let Some(frags) = &b.group_by {
        parts.push(render_clause("group by", frags, ",", binds)?);
    }
    if let Some(frags) = &b.having {
        parts.push(render_clause("having", frags, " and", binds)?);
    }
    if let Some(frags) = &b.order_by {
        parts.push(render_clause("order by", frags, ",", binds)?);
    }
    if let Some(limit) = &b.limit {
        parts.push(render_limit(limit));
    }

    Ok(join_parts(parts))
}

pub(crate) fn render_limit(limit: &Limit) -> String {
    let mut w = SqlWriter::new(16);
    w.push("limit ");
    match *limit {
        Limit::Single(n) => w.push_u64(n),
        Limit::Range(lower, upper) => {
            w.push_u64(lower);
            w.push(", ");
            w.push_u64(upper);
        }
    }
    w.finish()
}
