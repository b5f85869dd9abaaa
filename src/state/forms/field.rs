//! Form field value objects

/// One entry of a select control. `swatch` carries the background colour
/// hint for palette selectors and is `None` for ordinary selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub swatch: Option<String>,
}

impl SelectOption {
    /// Create a plain option whose label equals its value
    pub fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            label: value.to_string(),
            swatch: None,
        }
    }

    /// Create an option with a distinct display label
    pub fn labelled(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
            swatch: None,
        }
    }

    /// Create a colour option carrying its own hex value as swatch
    pub fn coloured(hex: &str) -> Self {
        Self {
            value: hex.to_string(),
            label: hex.to_string(),
            swatch: Some(hex.to_string()),
        }
    }
}

/// Closed set of control types a field can render as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    Text {
        value: String,
    },
    TextArea {
        value: String,
    },
    Boolean {
        checked: bool,
    },
    Select {
        selected: String,
        options: Vec<SelectOption>,
    },
    Submit {
        caption: String,
    },
}

/// Represents a single form field with its configuration, current value
/// and the validation errors attached by the binding layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub label: String,
    pub required: bool,
    /// Maximum accepted value length, checked by the binding layer
    pub max_length: Option<usize>,
    pub errors: Vec<String>,
    pub control: Control,
}

impl Field {
    /// Create a new single-line text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            required: false,
            max_length: None,
            errors: Vec::new(),
            control: Control::Text {
                value: String::new(),
            },
        }
    }

    /// Create a new single-line text field with initial value
    pub fn text_with_value(name: &str, label: &str, value: &str) -> Self {
        Self {
            control: Control::Text {
                value: value.to_string(),
            },
            ..Self::text(name, label)
        }
    }

    /// Create a new multi-line text field
    pub fn text_area(name: &str, label: &str) -> Self {
        Self {
            control: Control::TextArea {
                value: String::new(),
            },
            ..Self::text(name, label)
        }
    }

    /// Create a new checkbox field
    pub fn boolean(name: &str, label: &str) -> Self {
        Self {
            control: Control::Boolean { checked: false },
            ..Self::text(name, label)
        }
    }

    /// Create a new select field. The first option, if any, is preselected.
    pub fn select(name: &str, label: &str, options: Vec<SelectOption>) -> Self {
        let selected = options.first().map(|o| o.value.clone()).unwrap_or_default();
        Self {
            control: Control::Select { selected, options },
            ..Self::text(name, label)
        }
    }

    /// Create a new submit button field. The caption doubles as the label.
    pub fn submit(name: &str, caption: &str) -> Self {
        Self {
            label: caption.to_string(),
            control: Control::Submit {
                caption: caption.to_string(),
            },
            ..Self::text(name, caption)
        }
    }

    /// Mark the field as required
    pub fn with_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Cap the accepted value length
    pub fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Whether the field is a submit control (excluded from generic
    /// field-set rendering)
    pub fn is_submit(&self) -> bool {
        matches!(self.control, Control::Submit { .. })
    }

    /// Get the current value as text ("true"/"false" for checkboxes,
    /// the caption for submit buttons)
    pub fn value_str(&self) -> &str {
        match &self.control {
            Control::Text { value } | Control::TextArea { value } => value,
            Control::Boolean { checked } => {
                if *checked {
                    "true"
                } else {
                    "false"
                }
            }
            Control::Select { selected, .. } => selected,
            Control::Submit { caption } => caption,
        }
    }

    /// Apply a raw submitted value onto the field
    pub fn set_value(&mut self, raw: &str) {
        match &mut self.control {
            Control::Text { value } | Control::TextArea { value } => {
                raw.clone_into(value);
            }
            Control::Boolean { checked } => {
                *checked = matches!(raw, "true" | "on" | "y" | "1");
            }
            Control::Select { selected, .. } => {
                raw.clone_into(selected);
            }
            Control::Submit { .. } => {
                // Submit buttons carry no user value
            }
        }
    }

    /// Append a validation error message
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    /// Select options, empty for non-select controls
    pub fn options(&self) -> &[SelectOption] {
        match &self.control {
            Control::Select { options, .. } => options,
            _ => &[],
        }
    }
}
