//! Admin-side configuration and actions.
//!
//! - `registry`: which entities the admin exposes and how (columns, filters,
//!   inlines, actions). Built once in `main` and shared read-only.
//! - `links`: hrefs for the filtered lists behind each derived count.
//! - `actions`: bulk operations on a selection of rows.

pub mod actions;
pub mod links;
pub mod registry;
