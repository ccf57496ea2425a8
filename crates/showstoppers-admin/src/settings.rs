//! Layered admin site settings
//!
//! Settings are merged in priority order: environment variables > TOML file >
//! values already applied to the site. Every label is optional so an unset
//! value leaves the site's own label in place.

use crate::limits::DEFAULT_LIST_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

/// Prefix of the environment variables read by [`AdminSettings::load`]
pub const ENV_PREFIX: &str = "SHOWSTOPPERS_ADMIN_";

/// Error type for settings loading
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("Invalid value for {key}: {value}")]
	InvalidValue { key: String, value: String },
}

/// Admin site settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminSettings {
	/// Header shown on every admin page
	pub site_header: Option<String>,
	/// Browser title suffix
	pub site_title: Option<String>,
	/// Index page heading
	pub index_title: Option<String>,
	/// URL prefix the admin is mounted under
	pub url_prefix: String,
	/// Page size used when a model admin does not set one
	pub list_per_page: usize,
}

impl Default for AdminSettings {
	fn default() -> Self {
		Self {
			site_header: None,
			site_title: None,
			index_title: None,
			url_prefix: "/admin/".to_string(),
			list_per_page: DEFAULT_LIST_PER_PAGE,
		}
	}
}

#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
	#[serde(default)]
	admin: Option<AdminSettings>,
}

impl AdminSettings {
	/// Load settings from an optional TOML file and the process environment
	///
	/// A missing file is not an error.
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		let mut settings = match path {
			Some(path) if path.exists() => Self::from_toml_file(path)?,
			_ => Self::default(),
		};
		settings.apply_env_os(std::env::vars_os())?;
		Ok(settings)
	}

	/// Read the `[admin]` table of a TOML file
	pub fn from_toml_file(path: &Path) -> Result<Self, SettingsError> {
		let content = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&content)?;
		tracing::debug!(path = %path.display(), "loaded admin settings file");
		Ok(settings)
	}

	/// Parse the `[admin]` table of a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use showstoppers_admin::AdminSettings;
	///
	/// let settings = AdminSettings::from_toml_str(r#"
	/// [admin]
	/// site_header = "Staff Portal"
	/// list_per_page = 25
	/// "#).unwrap();
	///
	/// assert_eq!(settings.site_header.as_deref(), Some("Staff Portal"));
	/// assert_eq!(settings.list_per_page, 25);
	/// assert_eq!(settings.url_prefix, "/admin/");
	/// ```
	pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
		let file: SettingsFile = toml::from_str(content)?;
		let settings = file.admin.unwrap_or_default();
		if settings.list_per_page == 0 {
			return Err(SettingsError::InvalidValue {
				key: "list_per_page".to_string(),
				value: settings.list_per_page.to_string(),
			});
		}
		Ok(settings)
	}

	/// Apply `SHOWSTOPPERS_ADMIN_*` variables from raw OS key/value pairs
	///
	/// Pairs that are not valid UTF-8 are skipped unless their key carries
	/// the admin prefix, in which case they are rejected.
	pub fn apply_env_os<I>(&mut self, vars: I) -> Result<(), SettingsError>
	where
		I: IntoIterator<Item = (OsString, OsString)>,
	{
		let mut decoded = Vec::new();
		for (key, value) in vars {
			match (key.into_string(), value.into_string()) {
				(Ok(key), Ok(value)) => decoded.push((key, value)),
				(key, value) => {
					let key = key.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
					if key.starts_with(ENV_PREFIX) {
						let value = value.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
						return Err(SettingsError::InvalidValue { key, value });
					}
				}
			}
		}
		self.apply_env(decoded)
	}

	/// Apply `SHOWSTOPPERS_ADMIN_*` variables from an iterator of key/value pairs
	pub fn apply_env<I>(&mut self, vars: I) -> Result<(), SettingsError>
	where
		I: IntoIterator<Item = (String, String)>,
	{
		for (key, value) in vars {
			let Some(name) = key.strip_prefix(ENV_PREFIX) else {
				continue;
			};
			match name {
				"SITE_HEADER" => self.site_header = Some(value),
				"SITE_TITLE" => self.site_title = Some(value),
				"INDEX_TITLE" => self.index_title = Some(value),
				"URL_PREFIX" => self.url_prefix = value,
				"LIST_PER_PAGE" => {
					self.list_per_page = value
						.parse::<usize>()
						.ok()
						.filter(|n| *n > 0)
						.ok_or_else(|| SettingsError::InvalidValue {
							key: key.clone(),
							value: value.clone(),
						})?;
				}
				_ => {
					tracing::warn!(variable = %key, "ignoring unknown admin setting");
				}
			}
		}
		Ok(())
	}
}
