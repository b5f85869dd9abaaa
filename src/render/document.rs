//! Top-level document assembly

use super::error::RenderError;
use super::field::render_field_set;
use super::fragment::{Fragment, Intent};
use super::layer::render_layer;
use super::options::render_document_options;
use crate::config::PALETTE_SIZE;
use crate::state::{DocumentForm, DocumentKind, LayerForm};

/// Advisory shown in the Basic Options panel for map documents
const MAP_ADVISORY: &str = "Latitude and longtitude columns must contain coordinate values.";

/// Render the whole document form.
///
/// With `is_empty` only the File Options panel exists; otherwise the
/// output is a two-column layout with file and basic options on the left
/// and one panel per layer plus the add-layer button on the right. The
/// emptiness flag and document kind are supplied by the calling layer,
/// never derived here, and the same inputs always produce the same tree.
pub fn render_document(
    form: &DocumentForm,
    kind: DocumentKind,
    is_empty: bool,
) -> Result<Fragment, RenderError> {
    if is_empty {
        return Ok(Fragment::Column(vec![render_file_panel(form, is_empty)]));
    }

    let options = form.options.as_ref().ok_or(RenderError::MissingOptions)?;
    for layer in form.layers.iter() {
        check_colour_contract(layer)?;
    }

    let mut basic_children = render_document_options(options);
    if kind == DocumentKind::Map {
        basic_children.push(Fragment::Caption(MAP_ADVISORY.to_string()));
    }
    basic_children.push(Fragment::Button {
        caption: form.submit_document.value_str().to_string(),
        intent: Intent::Neutral,
    });
    let basic_panel = Fragment::Panel {
        title: "Basic Options".to_string(),
        intent: Intent::Success,
        children: basic_children,
    };

    let left = Fragment::Column(vec![render_file_panel(form, is_empty), basic_panel]);

    let mut right_children: Vec<Fragment> = form
        .layers
        .iter()
        .enumerate()
        .map(|(index, layer)| Fragment::Panel {
            title: layer_heading(index, kind),
            intent: Intent::Neutral,
            children: render_layer(layer),
        })
        .collect();
    right_children.push(Fragment::Button {
        caption: form.add_layer.value_str().to_string(),
        intent: Intent::Neutral,
    });
    let right = Fragment::Column(right_children);

    Ok(Fragment::Row(vec![left, right]))
}

/// The File Options panel: filename (once known), the data-source field
/// set, and in the empty state the submit-file button
fn render_file_panel(form: &DocumentForm, is_empty: bool) -> Fragment {
    let mut children = Vec::new();
    if let Some(name) = &form.data_source.file_name {
        children.push(Fragment::Caption(format!("File: {name}")));
    }
    children.extend(render_field_set(form.data_source.fields()));
    if is_empty {
        children.push(Fragment::Button {
            caption: form.submit_file.value_str().to_string(),
            intent: Intent::Neutral,
        });
    }
    Fragment::Panel {
        title: "File Options".to_string(),
        intent: Intent::Success,
        children,
    }
}

fn layer_heading(index: usize, kind: DocumentKind) -> String {
    match kind {
        DocumentKind::Chart => format!("Layer {} (plotted against the X column)", index + 1),
        DocumentKind::Map => format!("Layer {}", index + 1),
    }
}

/// The colour selector must carry the full palette, in order, every
/// entry with its swatch
fn check_colour_contract(layer: &LayerForm) -> Result<(), RenderError> {
    let options = layer.colour.options();
    if options.len() != PALETTE_SIZE {
        return Err(RenderError::ColourPalette {
            layer: layer.id,
            expected: PALETTE_SIZE,
            got: options.len(),
        });
    }
    if let Some(option) = options.iter().find(|o| o.swatch.is_none()) {
        return Err(RenderError::MissingSwatch {
            layer: layer.id,
            value: option.value.clone(),
        });
    }
    Ok(())
}
