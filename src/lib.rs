//! # ShowsStoppers
//!
//! Admin portal of the ShowsStoppers movie catalogue.
//!
//! - [`admin`]: the admin descriptor layer (site, model admins, list and edit views)
//! - [`movies`]: the `Movie` record and its registered admin
//!
//! ## Bootstrapping the site
//!
//! ```rust
//! use showstoppers::admin::AdminSettings;
//!
//! let site = showstoppers::admin_site(&AdminSettings::default()).unwrap();
//!
//! assert!(site.is_registered("Movie"));
//! assert_eq!(site.site_header(), "ShowsStoppers Admin");
//! ```

pub mod admin;
pub mod movies;

use admin::{AdminSettings, AdminSite};
use anyhow::Context;
use std::path::Path;
use std::sync::Arc;

/// Name of the admin site instance
pub const SITE_NAME: &str = "admin";

/// Build the admin site
///
/// The portal labels are applied first, then any label set in `settings`
/// replaces them. Every submitted model admin is registered and checked.
///
/// # Errors
///
/// Fails when a model is submitted twice or a model admin does not pass its checks.
pub fn admin_site(settings: &AdminSettings) -> anyhow::Result<Arc<AdminSite>> {
	let site = AdminSite::from_settings(SITE_NAME, settings);
	movies::configure_site(&site);
	site.apply_label_overrides(settings);

	let count = site
		.autodiscover()
		.context("failed to register model admins")?;
	let warnings = site.run_checks().context("admin checks failed")?;

	tracing::info!(
		site = SITE_NAME,
		models = count,
		warnings = warnings.len(),
		url_prefix = site.url_prefix(),
		"admin site ready"
	);
	Ok(Arc::new(site))
}

/// Load settings from `path` and the environment, then build the admin site
///
/// # Errors
///
/// Fails when the settings cannot be read or the site cannot be built.
pub fn load_admin_site(path: Option<&Path>) -> anyhow::Result<Arc<AdminSite>> {
	let settings = AdminSettings::load(path).context("failed to load admin settings")?;
	admin_site(&settings)
}
