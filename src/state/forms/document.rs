//! Document form structs: data source, options variants, footer actions

use super::field::{Field, SelectOption};
use super::layer::Layers;

/// Document type tag supplied by the calling layer. Anything that is not
/// a map is treated as a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentKind {
    #[default]
    Chart,
    Map,
}

impl DocumentKind {
    /// Parse the upstream type tag
    pub fn from_tag(tag: &str) -> Self {
        if tag == "map" {
            DocumentKind::Map
        } else {
            DocumentKind::Chart
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::Chart => "chart",
            DocumentKind::Map => "map",
        }
    }
}

/// Data-source sub-form. `file_name` is the hidden upstream field carried
/// out-of-band and shown in the File Options panel once a file exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileForm {
    pub data_source: Field,
    pub separator_type: Field,
    pub columns_row_index: Field,
    pub file_name: Option<String>,
}

impl FileForm {
    pub fn new(separators: &[SelectOption]) -> Self {
        Self {
            data_source: Field::text("data_source", "Data"),
            separator_type: Field::select(
                "separator_type",
                "Columns separator",
                separators.to_vec(),
            ),
            columns_row_index: Field::text_with_value(
                "columns_row_index",
                "Index of columns row",
                "0",
            ),
            file_name: None,
        }
    }

    /// Fields in insertion order for the generic field-set pass
    pub fn fields(&self) -> [&Field; 3] {
        [
            &self.data_source,
            &self.separator_type,
            &self.columns_row_index,
        ]
    }
}

/// Options sub-form for charts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartOptions {
    pub title: Field,
    pub free_text: Field,
    pub x_axis: Field,
    pub x_axis_label: Field,
    pub is_date_column: Field,
}

impl ChartOptions {
    pub fn new(columns: &[SelectOption]) -> Self {
        Self {
            title: Field::text_with_value("title", "Title", "My Chart").with_required(),
            free_text: Field::text_area("free_text", "Description").with_max_length(200),
            x_axis: Field::select("x_axis", "X Column", columns.to_vec()).with_required(),
            x_axis_label: Field::text("x_axis_label", "X column label").with_max_length(50),
            is_date_column: Field::boolean(
                "is_date_column",
                "Click if the column contains dates",
            ),
        }
    }

    pub fn fields(&self) -> [&Field; 5] {
        [
            &self.title,
            &self.free_text,
            &self.x_axis,
            &self.x_axis_label,
            &self.is_date_column,
        ]
    }
}

/// Options sub-form for maps. The `longtitude` field name is an upstream
/// data-binding key and must stay spelled exactly like this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOptions {
    pub title: Field,
    pub free_text: Field,
    pub tiles: Field,
    pub latitude: Field,
    pub longtitude: Field,
}

impl MapOptions {
    pub fn new(columns: &[SelectOption], tiles: &[SelectOption]) -> Self {
        Self {
            title: Field::text_with_value("title", "Title", "My Map").with_required(),
            free_text: Field::text_area("free_text", "Description").with_max_length(200),
            tiles: Field::select("tiles", "Map Tiles", tiles.to_vec()).with_required(),
            latitude: Field::select("latitude", "Latitude Column", columns.to_vec())
                .with_required(),
            longtitude: Field::select("longtitude", "Longtitude Column", columns.to_vec())
                .with_required(),
        }
    }

    pub fn fields(&self) -> [&Field; 5] {
        [
            &self.title,
            &self.free_text,
            &self.tiles,
            &self.latitude,
            &self.longtitude,
        ]
    }
}

/// Document options, shape selected once at construction time by the
/// binding layer and never re-derived mid-render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOptions {
    Chart(ChartOptions),
    Map(MapOptions),
}

impl DocumentOptions {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentOptions::Chart(_) => DocumentKind::Chart,
            DocumentOptions::Map(_) => DocumentKind::Map,
        }
    }

    pub fn fields(&self) -> [&Field; 5] {
        match self {
            DocumentOptions::Chart(options) => options.fields(),
            DocumentOptions::Map(options) => options.fields(),
        }
    }
}

/// Which footer actions are exposed to the user. Edit and save exist in
/// the form model but ship disabled; re-enabling them is a configuration
/// change, not a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterCapabilities {
    pub cancel: bool,
    pub edit: bool,
    pub save: bool,
}

impl Default for FooterCapabilities {
    fn default() -> Self {
        Self {
            cancel: true,
            edit: false,
            save: false,
        }
    }
}

/// Footer submit actions of the document form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterActions {
    pub cancel: Field,
    pub edit: Field,
    pub save: Field,
    pub capabilities: FooterCapabilities,
}

impl FooterActions {
    pub fn new() -> Self {
        Self {
            cancel: Field::submit("cancel", "Dispose"),
            edit: Field::submit("edit_document", "Edit chart"),
            save: Field::submit("save_document", "Save chart"),
            capabilities: FooterCapabilities::default(),
        }
    }

    /// The actions currently exposed, in cancel/edit/save order
    pub fn enabled_fields(&self) -> Vec<&Field> {
        let mut fields = Vec::new();
        if self.capabilities.cancel {
            fields.push(&self.cancel);
        }
        if self.capabilities.edit {
            fields.push(&self.edit);
        }
        if self.capabilities.save {
            fields.push(&self.save);
        }
        fields
    }
}

impl Default for FooterActions {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level document form. `options` is populated only once a data
/// source exists; the emptiness presentation flag itself is supplied by
/// the calling layer, never derived here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentForm {
    pub data_source: FileForm,
    pub options: Option<DocumentOptions>,
    pub layers: Layers,
    pub submit_file: Field,
    pub submit_document: Field,
    pub add_layer: Field,
    pub footer: FooterActions,
}

impl DocumentForm {
    /// Document form for the pre-upload state: no options, no layers
    pub fn empty(separators: &[SelectOption]) -> Self {
        Self {
            data_source: FileForm::new(separators),
            options: None,
            layers: Layers::new(),
            submit_file: Field::submit("submit_file", "Submit file"),
            submit_document: Field::submit("submit_document", "Create chart"),
            add_layer: Field::submit("add_layer", "Add Layer"),
            footer: FooterActions::new(),
        }
    }
}
