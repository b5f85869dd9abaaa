//! Configuration and fixed catalogs for the Visualiser forms

use anyhow::{bail, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// The colour selector always offers exactly this many palette entries
pub const PALETTE_SIZE: usize = 20;

/// Fixed catalogs backing the document form's select fields, with an
/// optional JSON override in the platform config directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualiserConfig {
    /// Layer colour palette, exactly [`PALETTE_SIZE`] hex entries in order
    pub colour_palette: Vec<String>,
    /// Supported map tile providers
    pub tiles: Vec<String>,
    /// Supported chart layer shapes
    pub chart_shapes: Vec<String>,
    /// Supported map layer shapes
    pub map_shapes: Vec<String>,
    /// Column separators as (value, label) pairs
    pub separators: Vec<(String, String)>,
    /// Filter expression operators
    pub operators: Vec<String>,
    /// Allowed upload file extensions
    pub allowed_extensions: Vec<String>,
}

impl Default for VisualiserConfig {
    fn default() -> Self {
        Self {
            colour_palette: [
                "#1f77b4", "#98df8a", "#8c564b", "#c7c7c7", "#aec7e8", "#d62728", "#c49c94",
                "#bcbd22", "#ff7f0e", "#ff9896", "#e377c2", "#dbdb8d", "#ffbb78", "#9467bd",
                "#f7b6d2", "#17becf", "#2ca02c", "#c5b0d5", "#7f7f7f", "#9edae5",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            tiles: [
                "Stamen Tone",
                "Stamen Terrain",
                "Mapbox Bright",
                "openstreetmap",
                "MapQuest Open Aerial",
                "stamenwatercolor",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            chart_shapes: ["line", "circle", "square", "triangle"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            map_shapes: ["Circle", "Marker"].iter().map(|s| s.to_string()).collect(),
            separators: [(",", "comma"), (";", "semicolon"), ("\t", "tab"), (" ", "space")]
                .iter()
                .map(|(value, label)| (value.to_string(), label.to_string()))
                .collect(),
            operators: ["==", "!=", ">", ">=", "<", "<="]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            allowed_extensions: ["txt", "csv", "xls", "json"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[allow(dead_code)]
impl VisualiserConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "visualiser", "visualiser-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration, falling back to the compiled-in catalogs when
    /// no override file exists
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that break the form contract
    pub fn validate(&self) -> Result<()> {
        if self.colour_palette.len() != PALETTE_SIZE {
            bail!(
                "colour palette must hold exactly {} entries, got {}",
                PALETTE_SIZE,
                self.colour_palette.len()
            );
        }
        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }
}
