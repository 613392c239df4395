//! Record view pipeline.
//!
//! Pure, synchronous transformation of the fetched record collection into
//! the rows visible on screen: filter → sort → paginate, driven by a single
//! [`ViewState`] value with explicit transition functions.

mod pipeline;
mod state;

pub use pipeline::{pagination_window, total_pages, visible_page, PageView};
pub use state::{PageSize, SortKey, SortState, ViewState};
