//! Field and field-set rendering

use super::fragment::{ErrorLine, Fragment, Intent, Widget, TEXT_AREA_COLS, TEXT_AREA_ROWS};
use crate::state::{Control, Field};

/// Render a single field into one layout region.
///
/// Checkboxes always render as a two-region fragment (label + control)
/// regardless of `show_label`; multi-line controls carry their fixed
/// geometry hints. With `show_errors`, a non-empty error list renders as
/// an error panel adjacent to the control; an empty list renders nothing.
pub fn render_field(field: &Field, show_label: bool, show_errors: bool) -> Fragment {
    let control = match &field.control {
        Control::Boolean { checked } => Fragment::Row(vec![
            Fragment::Caption(field.label.clone()),
            Fragment::LabeledControl {
                label: None,
                widget: Widget::Checkbox { checked: *checked },
            },
        ]),
        Control::TextArea { value } => Fragment::LabeledControl {
            label: show_label.then(|| field.label.clone()),
            widget: Widget::TextArea {
                value: value.clone(),
                cols: TEXT_AREA_COLS,
                rows: TEXT_AREA_ROWS,
            },
        },
        Control::Text { value } => Fragment::LabeledControl {
            label: show_label.then(|| field.label.clone()),
            widget: Widget::Input {
                value: value.clone(),
            },
        },
        Control::Select { selected, options } => Fragment::LabeledControl {
            label: show_label.then(|| field.label.clone()),
            widget: Widget::Select {
                selected: selected.clone(),
                options: options.clone(),
            },
        },
        Control::Submit { caption } => Fragment::Button {
            caption: caption.clone(),
            intent: Intent::Neutral,
        },
    };

    let mut parts = vec![control];
    if field.required {
        parts.push(Fragment::RequiredMarker);
    }
    if show_errors && !field.errors.is_empty() {
        parts.push(Fragment::Errors(
            field
                .errors
                .iter()
                .map(|message| ErrorLine {
                    message: message.clone(),
                    label: field.label.clone(),
                })
                .collect(),
        ));
    }
    Fragment::Column(parts)
}

/// Render a sub-form's fields in insertion order, skipping submit
/// controls. Submit buttons are placed explicitly by parent composition,
/// never by this generic pass.
pub fn render_field_set<'a>(fields: impl IntoIterator<Item = &'a Field>) -> Vec<Fragment> {
    fields
        .into_iter()
        .filter(|field| !field.is_submit())
        .map(|field| render_field(field, true, true))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn errors_in(fragment: &Fragment) -> Vec<String> {
        match fragment.find(&|f| matches!(f, Fragment::Errors(_))) {
            Some(Fragment::Errors(lines)) => lines.iter().map(|l| l.to_string()).collect(),
            _ => Vec::new(),
        }
    }

    mod single_field {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_text_field_renders_labeled_input() {
            let field = Field::text_with_value("title", "Title", "My Chart");
            let fragment = render_field(&field, true, true);
            let control = fragment
                .find(&|f| matches!(f, Fragment::LabeledControl { .. }))
                .unwrap();
            assert_eq!(
                control,
                &Fragment::LabeledControl {
                    label: Some("Title".to_string()),
                    widget: Widget::Input {
                        value: "My Chart".to_string()
                    },
                }
            );
        }

        #[test]
        fn test_hidden_label() {
            let field = Field::text("value", "Value");
            let fragment = render_field(&field, false, true);
            let control = fragment
                .find(&|f| matches!(f, Fragment::LabeledControl { .. }))
                .unwrap();
            assert!(matches!(
                control,
                Fragment::LabeledControl { label: None, .. }
            ));
        }

        #[test]
        fn test_text_area_geometry() {
            let field = Field::text_area("free_text", "Description");
            let fragment = render_field(&field, true, true);
            let control = fragment
                .find(&|f| matches!(f, Fragment::LabeledControl { .. }))
                .unwrap();
            assert!(matches!(
                control,
                Fragment::LabeledControl {
                    widget: Widget::TextArea { cols: 50, rows: 4, .. },
                    ..
                }
            ));
        }

        #[test]
        fn test_checkbox_is_two_region_row_even_without_label_flag() {
            let field = Field::boolean("is_date_column", "Click if the column contains dates");
            let fragment = render_field(&field, false, true);
            let row = fragment
                .find(&|f| matches!(f, Fragment::Row(_)))
                .unwrap();
            assert_eq!(row.children().len(), 2);
            assert!(matches!(
                &row.children()[0],
                Fragment::Caption(label) if label == "Click if the column contains dates"
            ));
        }

        #[test]
        fn test_submit_renders_as_button() {
            let field = Field::submit("add_layer", "Add Layer");
            let fragment = render_field(&field, true, true);
            assert!(fragment
                .find(&|f| matches!(f, Fragment::Button { caption, .. } if caption == "Add Layer"))
                .is_some());
        }

        #[test]
        fn test_required_marker_appended() {
            let field = Field::text("x_axis", "X Column").with_required();
            let fragment = render_field(&field, true, true);
            assert_eq!(fragment.count(&|f| matches!(f, Fragment::RequiredMarker)), 1);
        }

        #[test]
        fn test_optional_field_has_no_marker() {
            let field = Field::text("x_axis_label", "X column label");
            let fragment = render_field(&field, true, true);
            assert_eq!(fragment.count(&|f| matches!(f, Fragment::RequiredMarker)), 0);
        }
    }

    mod errors {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_no_errors_emits_no_panel() {
            let field = Field::text("title", "Title");
            let fragment = render_field(&field, true, true);
            assert_eq!(fragment.count(&|f| matches!(f, Fragment::Errors(_))), 0);
        }

        #[test]
        fn test_errors_suppressed_when_flag_off() {
            let mut field = Field::text("title", "Title");
            field.push_error("This field is required.");
            let fragment = render_field(&field, true, false);
            assert_eq!(fragment.count(&|f| matches!(f, Fragment::Errors(_))), 0);
        }

        #[test]
        fn test_each_message_becomes_one_line_in_order() {
            let mut field = Field::text("title", "Title");
            field.push_error("This field is required.");
            field.push_error("Field cannot be longer than 50 characters.");
            let fragment = render_field(&field, true, true);
            assert_eq!(
                errors_in(&fragment),
                vec![
                    "This field is required. - Title !".to_string(),
                    "Field cannot be longer than 50 characters. - Title !".to_string(),
                ]
            );
        }

        #[test]
        fn test_required_checkbox_with_error() {
            let mut field =
                Field::boolean("is_date_column", "Click if the column contains dates")
                    .with_required();
            field.push_error("This field is required.");
            let fragment = render_field(&field, true, true);

            assert!(fragment
                .find(&|f| matches!(
                    f,
                    Fragment::LabeledControl { widget: Widget::Checkbox { .. }, .. }
                ))
                .is_some());
            assert_eq!(fragment.count(&|f| matches!(f, Fragment::RequiredMarker)), 1);
            assert_eq!(
                errors_in(&fragment),
                vec![
                    "This field is required. - Click if the column contains dates !".to_string()
                ]
            );
        }

        #[test]
        fn test_rendering_is_idempotent() {
            let mut field = Field::text("title", "Title").with_required();
            field.push_error("This field is required.");
            let first = render_field(&field, true, true);
            let second = render_field(&field, true, true);
            assert_eq!(first, second);
        }
    }

    mod field_set {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_skips_submit_fields() {
            let fields = [
                Field::text("title", "Title"),
                Field::submit("submit_document", "Create chart"),
                Field::text_area("free_text", "Description"),
                Field::submit("cancel", "Dispose"),
            ];
            let regions = render_field_set(fields.iter());
            assert_eq!(regions.len(), 2);
        }

        #[test]
        fn test_region_count_matches_non_submit_count() {
            let fields = [
                Field::text("a", "A"),
                Field::boolean("b", "B"),
                Field::text_area("c", "C"),
            ];
            let regions = render_field_set(fields.iter());
            assert_eq!(regions.len(), fields.len());
        }

        #[test]
        fn test_preserves_insertion_order() {
            let fields = [Field::text("first", "First"), Field::text("second", "Second")];
            let regions = render_field_set(fields.iter());
            let labels: Vec<Option<&str>> = regions
                .iter()
                .map(|r| match r.find(&|f| matches!(f, Fragment::LabeledControl { .. })) {
                    Some(Fragment::LabeledControl { label, .. }) => label.as_deref(),
                    _ => None,
                })
                .collect();
            assert_eq!(labels, vec![Some("First"), Some("Second")]);
        }
    }
}
