//! Application state and core logic

use crate::binding::{FormBinder, FormBinding, SubmittedData};
use crate::config::VisualiserConfig;
use crate::render::{render_document, render_footer, Fragment, RenderError};
use crate::state::{DocumentForm, DocumentKind};
use crossterm::event::{KeyCode, KeyEvent};

/// Columns standing in for a parsed upload in the preview build
const SAMPLE_COLUMNS: &[&str] = &["age", "height", "weight", "latitude", "longtitude"];
const SAMPLE_FILE: &str = "measurements.csv";

/// Main application struct
pub struct App {
    binder: FormBinder,
    form: DocumentForm,
    /// Document type tag handed to the renderer
    pub kind: DocumentKind,
    /// Emptiness flag handed to the renderer
    pub is_empty: bool,
    quit: bool,
}

impl App {
    /// Create a new App instance in the pre-upload state
    pub fn new(config: VisualiserConfig, kind: DocumentKind) -> Self {
        let binder = FormBinder::new(config, Vec::new());
        let form = binder.prepare_empty_form();
        Self {
            binder,
            form,
            kind,
            is_empty: true,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Layout tree for the current document form
    pub fn fragment_tree(&self) -> Result<Fragment, RenderError> {
        render_document(&self.form, self.kind, self.is_empty)
    }

    /// Layout fragment for the footer actions
    pub fn footer_tree(&self) -> Fragment {
        render_footer(&self.form.footer)
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('u') if self.is_empty => self.submit_sample_file(),
            KeyCode::Char('a') if !self.is_empty => {
                self.binder.add_layer(&mut self.form, self.kind);
                tracing::info!(layers = self.form.layers.len(), "layer added");
            }
            KeyCode::Char('x') if !self.is_empty => self.remove_last_layer(),
            KeyCode::Char('m') => self.toggle_kind(),
            KeyCode::Char('e') if !self.is_empty => self.inject_demo_errors(),
            _ => {}
        }
    }

    /// Simulate the upload transition: a fresh full form is prepared for
    /// the now-known columns
    fn submit_sample_file(&mut self) {
        self.binder
            .set_columns(SAMPLE_COLUMNS.iter().map(|c| c.to_string()).collect());
        self.form = self.binder.prepare_document_form(self.kind);
        self.form.data_source.file_name = Some(SAMPLE_FILE.to_string());
        self.is_empty = false;
        tracing::info!(file = SAMPLE_FILE, "data source submitted");
    }

    fn remove_last_layer(&mut self) {
        if let Some(id) = self.form.layers.last().map(|layer| layer.id) {
            self.form.layers.remove(id);
            tracing::info!(id, "layer removed");
        }
    }

    /// Switch between chart and map. The options sub-form shape is fixed
    /// at construction time, so the form is rebuilt for the new kind.
    fn toggle_kind(&mut self) {
        self.kind = match self.kind {
            DocumentKind::Chart => DocumentKind::Map,
            DocumentKind::Map => DocumentKind::Chart,
        };
        if !self.is_empty {
            let file_name = self.form.data_source.file_name.take();
            self.form = self.binder.prepare_document_form(self.kind);
            self.form.data_source.file_name = file_name;
            debug_assert_eq!(
                self.form.options.as_ref().map(|o| o.kind()),
                Some(self.kind)
            );
        }
        tracing::info!(kind = self.kind.tag(), "document type switched");
    }

    /// Run the validators against a submission that clears the title,
    /// so the error rendering can be seen in the preview
    fn inject_demo_errors(&mut self) {
        let submitted = SubmittedData::from([("title".to_string(), String::new())]);
        self.binder.bind(&mut self.form, &submitted);
        tracing::info!("demo validation errors injected");
    }
}
