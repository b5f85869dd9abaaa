//! Trait abstraction for form binding to enable mocking in tests

use crate::state::{DocumentForm, DocumentKind};
use std::collections::HashMap;

/// Raw submitted key/value data, keyed by field name
pub type SubmittedData = HashMap<String, String>;

/// Form-binding operations. The renderer never constructs or validates a
/// form tree itself; everything here happens before a render is asked for.
#[cfg_attr(test, mockall::automock)]
pub trait FormBinding {
    /// Document form for the pre-upload state
    fn prepare_empty_form(&self) -> DocumentForm;

    /// Full document form with options and one initial layer
    fn prepare_document_form(&self, kind: DocumentKind) -> DocumentForm;

    /// Apply raw submitted values onto a prepared form and run the field
    /// validators, appending messages to the per-field error lists
    fn bind(&self, form: &mut DocumentForm, submitted: &SubmittedData);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::render::{render_document, Fragment};
    use crate::state::SelectOption;

    #[test]
    fn test_renderer_consumes_mocked_binding() {
        let mut binding = MockFormBinding::new();
        binding.expect_prepare_empty_form().returning(|| {
            DocumentForm::empty(&[SelectOption::labelled(",", "comma")])
        });

        let form = binding.prepare_empty_form();
        let tree = render_document(&form, DocumentKind::Chart, true).unwrap();
        assert!(tree
            .find(&|f| matches!(f, Fragment::Panel { title, .. } if title == "File Options"))
            .is_some());
    }
}
