//! Document-options rendering, branched on the document type

use super::field::render_field;
use super::fragment::Fragment;
use crate::state::DocumentOptions;

/// Render the options sub-form. The chart and map branches are fully
/// independent code paths; nothing is factored out between them.
pub fn render_document_options(options: &DocumentOptions) -> Vec<Fragment> {
    match options {
        DocumentOptions::Chart(chart) => vec![
            render_field(&chart.title, true, true),
            render_field(&chart.free_text, true, true),
            render_field(&chart.x_axis, true, true),
            render_field(&chart.x_axis_label, true, true),
            render_field(&chart.is_date_column, true, true),
        ],
        DocumentOptions::Map(map) => vec![
            render_field(&map.title, true, true),
            render_field(&map.free_text, true, true),
            render_field(&map.tiles, true, true),
            render_field(&map.latitude, true, true),
            render_field(&map.longtitude, true, true),
        ],
    }
}
