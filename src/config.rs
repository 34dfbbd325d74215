//! Configuration file support for iconpick.
//!
//! Configuration is loaded from `~/.config/iconpick/config.toml` with the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/iconpick/config.toml
//! rows_in_one_page = 6
//! columns_in_one_page = 6
//! icon_height = 48
//! icon_width = 48
//! picker_height = 500
//! picker_width = 500
//!
//! # Pixel size of one terminal cell, used when the terminal does not report it
//! cell_width_px = 8
//! cell_height_px = 16
//!
//! # Restrict the catalog to these icons, in this order
//! icons = ["Home", "Star", "Heart", "Settings"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ConfigError, ConfigResult};
use crate::icons::Catalog;
use crate::picker::{CellMetrics, DEFAULT_PICKER_HEIGHT, DEFAULT_PICKER_WIDTH, PickerLayout};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid rows per page
    pub rows_in_one_page: usize,

    /// Grid columns per page
    pub columns_in_one_page: usize,

    /// Icon cell height in pixels
    pub icon_height: u32,

    /// Icon cell width in pixels
    pub icon_width: u32,

    /// Picker panel height in pixels
    pub picker_height: Option<u32>,

    /// Picker panel width in pixels
    pub picker_width: Option<u32>,

    /// Cell width in pixels, when the terminal does not report it
    pub cell_width_px: Option<u32>,

    /// Cell height in pixels, when the terminal does not report it
    pub cell_height_px: Option<u32>,

    /// Icons to offer, in order (all bundled icons when empty)
    pub icons: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rows_in_one_page: 6,
            columns_in_one_page: 6,
            icon_height: 48,
            icon_width: 48,
            picker_height: None,
            picker_width: None,
            cell_width_px: None,
            cell_height_px: None,
            icons: vec![],
        }
    }
}

/// Values supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub rows_in_one_page: Option<usize>,
    pub columns_in_one_page: Option<usize>,
    pub icon_height: Option<u32>,
    pub icon_width: Option<u32>,
    pub picker_height: Option<u32>,
    pub picker_width: Option<u32>,
    pub cell_metrics: Option<CellMetrics>,
    pub config_path: Option<PathBuf>,
}

impl Overrides {
    /// Parse command line arguments (without the program name).
    pub fn parse<I, S>(args: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let flag = arg.as_ref().to_string();
            let mut value = || {
                args.next()
                    .map(|v| v.as_ref().to_string())
                    .ok_or_else(|| ConfigError::MissingValue(flag.clone()))
            };

            match flag.as_str() {
                "--rows" | "-r" => overrides.rows_in_one_page = Some(parse_number(&flag, &value()?)?),
                "--columns" | "-c" => {
                    overrides.columns_in_one_page = Some(parse_number(&flag, &value()?)?)
                }
                "--icon-height" => overrides.icon_height = Some(parse_number(&flag, &value()?)?),
                "--icon-width" => overrides.icon_width = Some(parse_number(&flag, &value()?)?),
                "--picker-height" => overrides.picker_height = Some(parse_number(&flag, &value()?)?),
                "--picker-width" => overrides.picker_width = Some(parse_number(&flag, &value()?)?),
                "--cell-size" => overrides.cell_metrics = Some(CellMetrics::parse(&value()?)?),
                "--config" => overrides.config_path = Some(PathBuf::from(value()?)),
                _ => {
                    eprintln!("Warning: ignoring unknown argument '{}'", flag);
                }
            }
        }

        Ok(overrides)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> ConfigResult<T> {
    value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let path = std::env::var("ICONPICK_CONFIG")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(Self::config_path);
        Self::load_from(&path)
    }

    /// Load configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("iconpick")
            .join("config.toml")
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(mut self, overrides: &Overrides) -> Self {
        if let Some(rows) = overrides.rows_in_one_page {
            self.rows_in_one_page = rows;
        }
        if let Some(columns) = overrides.columns_in_one_page {
            self.columns_in_one_page = columns;
        }
        if let Some(height) = overrides.icon_height {
            self.icon_height = height;
        }
        if let Some(width) = overrides.icon_width {
            self.icon_width = width;
        }
        if overrides.picker_height.is_some() {
            self.picker_height = overrides.picker_height;
        }
        if overrides.picker_width.is_some() {
            self.picker_width = overrides.picker_width;
        }
        self
    }

    /// Build the validated picker layout.
    pub fn layout(&self) -> ConfigResult<PickerLayout> {
        let layout = PickerLayout::new(
            self.rows_in_one_page,
            self.columns_in_one_page,
            self.icon_height,
            self.icon_width,
        )?;

        if self.picker_height.is_none() && self.picker_width.is_none() {
            return Ok(layout);
        }
        layout.with_picker_size(
            self.picker_height.unwrap_or(DEFAULT_PICKER_HEIGHT),
            self.picker_width.unwrap_or(DEFAULT_PICKER_WIDTH),
        )
    }

    /// Build the catalog, restricted to `icons` when any are listed.
    pub fn catalog(&self) -> ConfigResult<Catalog> {
        if self.icons.is_empty() {
            Ok(Catalog::bundled())
        } else {
            Catalog::from_names(self.icons.as_slice())
        }
    }

    /// Cell metrics from `--cell-size`, `ICONPICK_CELL_SIZE` or the config
    /// file, in that order. `None` leaves detection to the terminal.
    pub fn cell_metrics(&self, overrides: &Overrides) -> ConfigResult<Option<CellMetrics>> {
        let env = std::env::var("ICONPICK_CELL_SIZE").ok();
        self.resolve_cell_metrics(overrides.cell_metrics, env.as_deref())
    }

    fn resolve_cell_metrics(
        &self,
        cli: Option<CellMetrics>,
        env: Option<&str>,
    ) -> ConfigResult<Option<CellMetrics>> {
        if let Some(metrics) = cli {
            return Ok(Some(metrics));
        }
        if let Some(value) = env {
            return CellMetrics::parse(value).map(Some);
        }
        match (self.cell_width_px, self.cell_height_px) {
            (None, None) => Ok(None),
            (Some(width_px), Some(height_px)) if width_px > 0 && height_px > 0 => {
                Ok(Some(CellMetrics { width_px, height_px }))
            }
            // One key missing or zero
            (width_px, height_px) => Err(ConfigError::InvalidCellSize(format!(
                "{}x{}",
                width_px.map_or("?".to_string(), |w| w.to_string()),
                height_px.map_or("?".to_string(), |h| h.to_string()),
            ))),
        }
    }
}
