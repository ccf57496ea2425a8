//! # showstoppers-movies
//!
//! The `Movie` record type and its admin registration.
//!
//! Linking this crate submits [`admin::MovieAdmin`] for admin
//! autodiscovery; [`admin::configure_site`] applies the portal labels.

pub mod admin;
pub mod models;

pub use admin::{MovieAdmin, configure_site};
pub use models::Movie;
