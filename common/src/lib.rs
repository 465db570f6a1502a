//! Shared types for the course application admin service.
//!
//! - `model`: the stored entities (courses, templates, sections, questions, applications).
//! - `requests`: payloads the admin surface accepts for create/edit and bulk actions.
//! - `views`: list and detail shapes the admin surface returns, with derived counts.
//! - `validation`: the checks every draft passes before it reaches the database.

pub mod model;
pub mod requests;
pub mod validation;
pub mod views;
