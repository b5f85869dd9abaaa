//! Renderer contract violations

use thiserror::Error;

/// Structural precondition failures in the input form tree. These are
/// programmer errors in the calling layer and are rejected eagerly,
/// before any partial output is produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error("populated document render requires an options sub-form")]
    MissingOptions,

    #[error("layer {layer}: colour selector must offer {expected} palette entries, got {got}")]
    ColourPalette {
        layer: usize,
        expected: usize,
        got: usize,
    },

    #[error("layer {layer}: colour option {value} is missing its swatch")]
    MissingSwatch { layer: usize, value: String },
}
