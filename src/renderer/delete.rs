use smallvec::SmallVec;

use crate::param::Param;
use crate::query_builder::Builder;
use crate::renderer::compose::render_clause;
use crate::renderer::select::render_limit;
use crate::renderer::writer::join_parts;
use crate::renderer::{Error, Result};

/// delete from <table> [using <tables>] [where] [order by] [limit]
pub(crate) fn render_delete(b: &Builder, binds: &mut Vec<Param>) -> Result<String> {
    let Some(delete) = &b.delete else {
        return Err(Error::MissingDeleteTarget);
    };

    let mut parts: SmallVec<[String; 5]> = SmallVec::new();
    parts.push(render_clause("delete from", delete, ",", binds)?);

    if let Some(frags) = &b.using {
        parts.push(render_clause("using", frags, ",", binds)?);
    }
    if let Some(frags) = &b.where_clause {
        parts.push(render_clause("where", frags, " and", binds)?);
    }
    if let Some(frags) = &b.order_by {
        parts.push(render_clause("order by", frags, ",", binds)?);
    }
    if let Some(limit) = &b.limit {
        parts.push(render_limit(limit));
    }

    Ok(join_parts(parts))
}
