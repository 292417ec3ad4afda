//! Picker configuration loaded from TOML.
//!
//! ```toml
//! [picker]
//! mode = "date-and-time"          # date-only | time-only | date-and-time
//! initial = "2024-01-01T00:00:00" # optional; defaults to the local clock
//! ```

use std::path::Path;

use chrono::Local;
use chronopick_primitives::{Mode, PointInTime};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Top-level configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerConfig {
	/// Session settings.
	pub picker: PickerOptions,
}

/// Settings applied when a picker session is created.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PickerOptions {
	/// Flow of the session.
	pub mode: Mode,
	/// Value the session starts from. `None` uses the local wall clock.
	pub initial: Option<PointInTime>,
}

impl PickerConfig {
	/// Parses configuration from TOML text.
	pub fn from_toml_str(input: &str) -> Result<Self> {
		Ok(toml::from_str(input)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), mode = %config.picker.mode, "Loaded picker config");
		Ok(config)
	}

	pub fn mode(&self) -> Mode {
		self.picker.mode
	}

	/// Starting value, falling back to the local wall clock.
	pub fn initial_value(&self) -> PointInTime {
		self.picker
			.initial
			.unwrap_or_else(|| PointInTime::new(Local::now().naive_local()))
	}
}
