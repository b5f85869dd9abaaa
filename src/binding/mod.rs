//! Form binding: construction, value application and validation

mod handler;
mod traits;

pub use handler::{FormBinder, REQUIRED_MESSAGE};
pub use traits::{FormBinding, SubmittedData};
