//! Layer and filter-expression rendering

use super::field::render_field;
use super::fragment::{Fragment, Intent};
use crate::state::{FilterForm, LayerForm};

/// Instructional caption shown above a layer's filter expressions
const FILTER_CAPTION: &str = "Narrow the layer's rows with up to two filter expressions.";

/// Render a filter sub-form as two compact side-by-side regions. Labels
/// are hidden; errors surface at the individual field level and the pair
/// itself adds no panel of its own.
pub fn render_filter_pair(filter: &FilterForm) -> Fragment {
    Fragment::Row(vec![
        render_field(&filter.operator, false, true),
        render_field(&filter.value, false, true),
    ])
}

/// Render the body of one layer panel, in fixed order: remove button,
/// the six option fields, the filter caption, then the filter pairs with
/// the combinator operator rendered between them.
pub fn render_layer(layer: &LayerForm) -> Vec<Fragment> {
    let mut parts = vec![Fragment::Button {
        caption: layer.remove_layer.value_str().to_string(),
        intent: Intent::Danger,
    }];

    for field in layer.option_fields() {
        parts.push(render_field(field, true, true));
    }

    parts.push(Fragment::Caption(FILTER_CAPTION.to_string()));
    parts.push(render_filter_pair(&layer.filters[0]));
    // The combinator operator renders a second time between the pairs;
    // errors are omitted here so each message stays unique to the pair
    // render above.
    parts.push(render_field(&layer.filters[0].operator, true, false));
    parts.push(render_filter_pair(&layer.filters[1]));

    parts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Field, SelectOption};
    use pretty_assertions::assert_eq;

    fn operators() -> Vec<SelectOption> {
        ["==", "!=", ">"].iter().map(|o| SelectOption::plain(o)).collect()
    }

    fn sample_layer() -> LayerForm {
        let columns = vec![SelectOption::plain("age")];
        let shapes = vec![SelectOption::plain("circle")];
        let palette = vec![SelectOption::coloured("#1f77b4")];
        LayerForm::new(0, &columns, &shapes, &palette, &operators())
    }

    mod filter_pair {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_pair_is_row_of_two_regions() {
            let filter = FilterForm::new(0, 0, &operators());
            let fragment = render_filter_pair(&filter);
            assert_eq!(fragment.children().len(), 2);
        }

        #[test]
        fn test_labels_are_hidden() {
            let filter = FilterForm::new(0, 0, &operators());
            let fragment = render_filter_pair(&filter);
            let labelled = fragment.count(&|f| {
                matches!(f, Fragment::LabeledControl { label: Some(_), .. })
            });
            assert_eq!(labelled, 0);
        }

        #[test]
        fn test_field_errors_still_surface() {
            let mut filter = FilterForm::new(0, 0, &operators());
            filter.value.push_error("This field is required.");
            let fragment = render_filter_pair(&filter);
            assert_eq!(fragment.count(&|f| matches!(f, Fragment::Errors(_))), 1);
        }
    }

    mod layer {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_remove_button_comes_first_and_is_destructive() {
            let parts = render_layer(&sample_layer());
            assert_eq!(
                parts[0],
                Fragment::Button {
                    caption: "Remove".to_string(),
                    intent: Intent::Danger,
                }
            );
        }

        #[test]
        fn test_option_field_labels_in_order() {
            let parts = render_layer(&sample_layer());
            let labels: Vec<String> = parts
                .iter()
                .filter_map(|part| {
                    match part.find(&|f| matches!(f, Fragment::LabeledControl { label: Some(_), .. }))
                    {
                        Some(Fragment::LabeledControl {
                            label: Some(label), ..
                        }) => Some(label.clone()),
                        _ => None,
                    }
                })
                .collect();
            // Six option fields plus the standalone combinator render
            assert_eq!(
                labels,
                vec!["Label", "Column", "Shape", "Colour", "Opacity", "Size", "Operator"]
            );
        }

        #[test]
        fn test_two_filter_pairs_with_operator_between() {
            let parts = render_layer(&sample_layer());
            let caption_index = parts
                .iter()
                .position(|p| matches!(p, Fragment::Caption(_)))
                .unwrap();
            assert!(matches!(parts[caption_index + 1], Fragment::Row(_)));
            assert!(matches!(parts[caption_index + 2], Fragment::Column(_)));
            assert!(matches!(parts[caption_index + 3], Fragment::Row(_)));
            assert_eq!(parts.len(), caption_index + 4);
        }

        #[test]
        fn test_combinator_render_carries_no_errors() {
            let mut layer = sample_layer();
            layer.filters[0].operator.push_error("This field is required.");
            let parts = render_layer(&layer);

            // One error panel from the pair render, none from the
            // standalone combinator render
            let error_panels: usize = parts
                .iter()
                .map(|p| p.count(&|f| matches!(f, Fragment::Errors(_))))
                .sum();
            assert_eq!(error_panels, 1);
        }

        #[test]
        fn test_rendering_is_idempotent() {
            let layer = sample_layer();
            assert_eq!(render_layer(&layer), render_layer(&layer));
        }
    }
}
