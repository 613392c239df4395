//! perch — a terminal viewer for paginated REST record collections.
//!
//! Fetches a collection of comment records from a REST endpoint once per
//! launch and presents it as a searchable, sortable, paginated table, with
//! a read-only user profile screen alongside.

pub mod api;
pub mod app;
pub mod config;
pub mod theme;
pub mod ui;
pub mod util;
pub mod view;
