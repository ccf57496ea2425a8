//! Error types for the admin layer

use crate::settings::SettingsError;
use thiserror::Error;

/// Admin error type
#[derive(Debug, Error)]
pub enum AdminError {
	/// Model not registered with admin
	#[error("Model '{0}' is not registered with admin")]
	ModelNotRegistered(String),

	/// Model registered twice on the same site
	#[error("Model '{0}' is already registered with admin")]
	AlreadyRegistered(String),

	/// Permission denied
	#[error("Permission denied: {0}")]
	PermissionDenied(String),

	/// Validation error
	#[error("Validation error: {0}")]
	ValidationError(String),

	/// A registered descriptor failed the system checks
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),

	/// Settings could not be loaded
	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),
}

/// Result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;
