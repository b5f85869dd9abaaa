//! Layer and filter-expression sub-forms

use super::field::{Field, SelectOption};

/// Number of filter expressions carried by every layer
pub const FILTERS_PER_LAYER: usize = 2;

/// Filter expression sub-form: an (operator, value) pair constraining
/// which data rows a layer includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterForm {
    pub operator: Field,
    pub value: Field,
}

impl FilterForm {
    /// Create a filter sub-form. Field names follow the upstream
    /// `layers-<id>-filter_expressions-<index>-*` binding keys.
    pub fn new(layer_id: usize, index: usize, operators: &[SelectOption]) -> Self {
        let prefix = format!("layers-{layer_id}-filter_expressions-{index}");
        Self {
            operator: Field::select(
                &format!("{prefix}-operator"),
                "Operator",
                operators.to_vec(),
            ),
            value: Field::text(&format!("{prefix}-value"), "Value"),
        }
    }
}

/// Options sub-form for a single document layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerForm {
    /// Stable identity, assigned once by [`Layers`] and never reused
    pub id: usize,
    pub layer_name: Field,
    pub data_field: Field,
    pub shape: Field,
    pub colour: Field,
    pub opacity: Field,
    pub size: Field,
    pub filters: [FilterForm; FILTERS_PER_LAYER],
    pub remove_layer: Field,
}

impl LayerForm {
    pub fn new(
        id: usize,
        columns: &[SelectOption],
        shapes: &[SelectOption],
        palette: &[SelectOption],
        operators: &[SelectOption],
    ) -> Self {
        let prefix = format!("layers-{id}");
        Self {
            id,
            layer_name: Field::text(&format!("{prefix}-layer_name"), "Label").with_max_length(100),
            data_field: Field::select(&format!("{prefix}-data_field"), "Column", columns.to_vec())
                .with_required(),
            shape: Field::select(&format!("{prefix}-shape"), "Shape", shapes.to_vec())
                .with_required(),
            colour: Field::select(&format!("{prefix}-colour"), "Colour", palette.to_vec())
                .with_required(),
            opacity: Field::text_with_value(&format!("{prefix}-opacity"), "Opacity", "0.8"),
            size: Field::text_with_value(&format!("{prefix}-size"), "Size", "1.21"),
            filters: [
                FilterForm::new(id, 0, operators),
                FilterForm::new(id, 1, operators),
            ],
            remove_layer: Field::submit(&format!("{prefix}-remove_layer"), "Remove"),
        }
    }

    /// The six option fields in render order
    pub fn option_fields(&self) -> [&Field; 6] {
        [
            &self.layer_name,
            &self.data_field,
            &self.shape,
            &self.colour,
            &self.opacity,
            &self.size,
        ]
    }
}

/// Ordered, variable-length sequence of layer sub-forms. Ids are assigned
/// monotonically; removing an entry removes exactly one form and never
/// reassigns the ids of the survivors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layers {
    entries: Vec<LayerForm>,
    next_id: usize,
}

impl Layers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new layer built by `make` from the next free id.
    /// Returns the assigned id.
    pub fn add_with(&mut self, make: impl FnOnce(usize) -> LayerForm) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(make(id));
        id
    }

    /// Remove the layer with the given id. Returns true if one was removed.
    pub fn remove(&mut self, id: usize) -> bool {
        let before = self.entries.len();
        self.entries.retain(|layer| layer.id != id);
        self.entries.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayerForm> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut LayerForm> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&LayerForm> {
        self.entries.last()
    }
}
