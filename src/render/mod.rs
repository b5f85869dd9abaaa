//! Pure form-tree to layout-tree rendering
//!
//! Every function here is a side-effect-free projection of the form
//! model plus presentation flags into a [`Fragment`] tree. The
//! presentation layer decides how fragments look on screen.

mod document;
mod error;
mod field;
mod footer;
pub mod fragment;
mod layer;
mod options;

pub use document::render_document;
pub use error::RenderError;
pub use field::{render_field, render_field_set};
pub use footer::render_footer;
pub use fragment::{ErrorLine, Fragment, Intent, Widget};
pub use layer::{render_filter_pair, render_layer};
pub use options::render_document_options;
