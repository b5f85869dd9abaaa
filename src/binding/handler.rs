//! Form construction and validation against the configured catalogs

use super::traits::{FormBinding, SubmittedData};
use crate::config::VisualiserConfig;
use crate::state::{
    ChartOptions, Control, DocumentForm, DocumentKind, DocumentOptions, Field, LayerForm,
    MapOptions, SelectOption,
};

/// Validation message for missing required input
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Builds document forms from the configured catalogs and the columns of
/// the currently uploaded file, and applies submitted data back onto them.
#[derive(Debug, Clone)]
pub struct FormBinder {
    config: VisualiserConfig,
    columns: Vec<String>,
}

impl FormBinder {
    pub fn new(config: VisualiserConfig, columns: Vec<String>) -> Self {
        Self { config, columns }
    }

    /// Replace the column catalog after a new file upload
    pub fn set_columns(&mut self, columns: Vec<String>) {
        self.columns = columns;
    }

    /// Append a fresh layer sub-form to the document form
    pub fn add_layer(&self, form: &mut DocumentForm, kind: DocumentKind) -> usize {
        let columns = self.column_options();
        let shapes = self.shape_options(kind);
        let palette = self.palette_options();
        let operators = self.operator_options();
        form.layers
            .add_with(|id| LayerForm::new(id, &columns, &shapes, &palette, &operators))
    }

    fn column_options(&self) -> Vec<SelectOption> {
        self.columns.iter().map(|c| SelectOption::plain(c)).collect()
    }

    fn separator_options(&self) -> Vec<SelectOption> {
        self.config
            .separators
            .iter()
            .map(|(value, label)| SelectOption::labelled(value, label))
            .collect()
    }

    fn shape_options(&self, kind: DocumentKind) -> Vec<SelectOption> {
        let shapes = match kind {
            DocumentKind::Chart => &self.config.chart_shapes,
            DocumentKind::Map => &self.config.map_shapes,
        };
        shapes.iter().map(|s| SelectOption::plain(s)).collect()
    }

    fn palette_options(&self) -> Vec<SelectOption> {
        self.config
            .colour_palette
            .iter()
            .map(|c| SelectOption::coloured(c))
            .collect()
    }

    fn operator_options(&self) -> Vec<SelectOption> {
        self.config
            .operators
            .iter()
            .map(|o| SelectOption::plain(o))
            .collect()
    }

    fn tile_options(&self) -> Vec<SelectOption> {
        self.config.tiles.iter().map(|t| SelectOption::plain(t)).collect()
    }
}

impl FormBinding for FormBinder {
    fn prepare_empty_form(&self) -> DocumentForm {
        DocumentForm::empty(&self.separator_options())
    }

    fn prepare_document_form(&self, kind: DocumentKind) -> DocumentForm {
        let mut form = self.prepare_empty_form();
        let columns = self.column_options();
        form.options = Some(match kind {
            DocumentKind::Chart => DocumentOptions::Chart(ChartOptions::new(&columns)),
            DocumentKind::Map => {
                DocumentOptions::Map(MapOptions::new(&columns, &self.tile_options()))
            }
        });
        self.add_layer(&mut form, kind);
        form
    }

    fn bind(&self, form: &mut DocumentForm, submitted: &SubmittedData) {
        for field in bindable_fields(form) {
            if let Some(raw) = submitted.get(&field.name) {
                field.set_value(raw);
            }
            validate(field);
        }
    }
}

/// Every user-editable field of the form tree, in tree order
fn bindable_fields(form: &mut DocumentForm) -> Vec<&mut Field> {
    let mut fields: Vec<&mut Field> = vec![
        &mut form.data_source.data_source,
        &mut form.data_source.separator_type,
        &mut form.data_source.columns_row_index,
    ];
    match &mut form.options {
        Some(DocumentOptions::Chart(chart)) => {
            fields.extend([
                &mut chart.title,
                &mut chart.free_text,
                &mut chart.x_axis,
                &mut chart.x_axis_label,
                &mut chart.is_date_column,
            ]);
        }
        Some(DocumentOptions::Map(map)) => {
            fields.extend([
                &mut map.title,
                &mut map.free_text,
                &mut map.tiles,
                &mut map.latitude,
                &mut map.longtitude,
            ]);
        }
        None => {}
    }
    for layer in form.layers.iter_mut() {
        fields.extend([
            &mut layer.layer_name,
            &mut layer.data_field,
            &mut layer.shape,
            &mut layer.colour,
            &mut layer.opacity,
            &mut layer.size,
        ]);
        for filter in layer.filters.iter_mut() {
            fields.push(&mut filter.operator);
            fields.push(&mut filter.value);
        }
    }
    fields
}

/// Run the field validators, appending one message per failure
fn validate(field: &mut Field) {
    if field.required && is_blank(field) {
        field.push_error(REQUIRED_MESSAGE);
    }
    if let Some(max) = field.max_length {
        let len = match &field.control {
            Control::Text { value } | Control::TextArea { value } => value.chars().count(),
            _ => 0,
        };
        if len > max {
            field.push_error(format!("Field cannot be longer than {max} characters."));
        }
    }
}

/// Required-input check: unchecked boxes and empty values count as missing
fn is_blank(field: &Field) -> bool {
    match &field.control {
        Control::Text { value } | Control::TextArea { value } => value.is_empty(),
        Control::Select { selected, .. } => selected.is_empty(),
        Control::Boolean { checked } => !checked,
        Control::Submit { .. } => false,
    }
}
