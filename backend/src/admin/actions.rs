//! Bulk actions on selected rows.
//!
//! "Copy templates to a different course" does no copying itself. It checks the
//! selection and hands it to the copy workflow as `?ids=3,7,9`.

use crate::error::{AppError, AppResult};
use crate::store;
use rusqlite::Connection;

/// Builds the copy workflow URL for the given template ids, in the order given.
pub fn copy_redirect(copy_url: &str, ids: &[i64]) -> String {
    let joined = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
    let separator = if copy_url.contains('?') { '&' } else { '?' };
    format!("{}{}ids={}", copy_url, separator, joined)
}

/// Resolves the operator's selection and returns where to redirect.
///
/// Repeated ids keep their first position. Ids that name no template are dropped,
/// and a selection left empty is refused.
pub fn copy_templates(conn: &Connection, copy_url: &str, selected: &[i64]) -> AppResult<String> {
    let mut unique = Vec::with_capacity(selected.len());
    for &id in selected {
        if !unique.contains(&id) {
            unique.push(id);
        }
    }

    let ids = store::templates::existing_ids(conn, &unique)?;
    if ids.is_empty() {
        return Err(AppError::NoSelection);
    }
    log::info!("copy requested for templates {:?}", ids);
    Ok(copy_redirect(copy_url, &ids))
}
