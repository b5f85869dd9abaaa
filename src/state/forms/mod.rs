//! Form model: fields, sub-forms and the document form tree

mod document;
mod field;
mod layer;

pub use document::*;
pub use field::*;
pub use layer::*;
