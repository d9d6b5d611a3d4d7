//! Categories and UI selection state
//!
//! `CategoryStore` owns the category list and the (category, tool) selection;
//! `resolve_view` turns that selection into one of the three canvas views.

mod store;
mod view;

pub use store::{
    initial_categories, CategoryError, CategoryResult, CategoryStore, Selection,
    DEFAULT_CATEGORY_ICON,
};
pub use view::{resolve_view, CanvasView};
