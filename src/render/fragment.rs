//! Layout fragments: the output tree produced by the form renderer

use crate::state::SelectOption;
use std::fmt;

/// Fixed geometry hint for multi-line text controls
pub const TEXT_AREA_COLS: u16 = 50;
/// Fixed geometry hint for multi-line text controls
pub const TEXT_AREA_ROWS: u16 = 4;

/// Semantic intent of a region, mapped to concrete styling by the
/// presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Neutral,
    Success,
    Danger,
}

/// One rendered validation error, paired with the label of the field it
/// belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorLine {
    pub message: String,
    pub label: String,
}

impl fmt::Display for ErrorLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} !", self.message, self.label)
    }
}

/// Concrete control widget inside a labeled region
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    Input {
        value: String,
    },
    TextArea {
        value: String,
        cols: u16,
        rows: u16,
    },
    Checkbox {
        checked: bool,
    },
    Select {
        selected: String,
        options: Vec<SelectOption>,
    },
}

/// A node of the rendered layout tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Titled panel region wrapping its children
    Panel {
        title: String,
        intent: Intent,
        children: Vec<Fragment>,
    },
    /// Horizontal arrangement of regions
    Row(Vec<Fragment>),
    /// Vertical arrangement of regions
    Column(Vec<Fragment>),
    /// A control widget with an optional label region
    LabeledControl {
        label: Option<String>,
        widget: Widget,
    },
    /// Marker region appended after a required field's control
    RequiredMarker,
    /// An action button
    Button {
        caption: String,
        intent: Intent,
    },
    /// Error panel listing every message of one field, in order
    Errors(Vec<ErrorLine>),
    /// Static instructional text
    Caption(String),
    /// Pill-style navigation list of action captions
    NavPills(Vec<String>),
}

#[allow(dead_code)]
impl Fragment {
    /// Child fragments, empty for leaves
    pub fn children(&self) -> &[Fragment] {
        match self {
            Fragment::Panel { children, .. } => children,
            Fragment::Row(children) | Fragment::Column(children) => children,
            _ => &[],
        }
    }

    /// Count fragments in this subtree matching a predicate
    pub fn count(&self, predicate: &dyn Fn(&Fragment) -> bool) -> usize {
        let own = usize::from(predicate(self));
        own + self
            .children()
            .iter()
            .map(|child| child.count(predicate))
            .sum::<usize>()
    }

    /// Find the first fragment in this subtree matching a predicate
    pub fn find(&self, predicate: &dyn Fn(&Fragment) -> bool) -> Option<&Fragment> {
        if predicate(self) {
            return Some(self);
        }
        self.children()
            .iter()
            .find_map(|child| child.find(predicate))
    }
}
