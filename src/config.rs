//! Store configuration.
//!
//! A store is a single redb file identified by a name and an integer schema
//! version, configured with the builder pattern via `typed-builder`.

use std::path::PathBuf;
use typed_builder::TypedBuilder;

/// Name recorded in a store the first time it is opened.
pub const DEFAULT_DATABASE_NAME: &str = "coverLetterDatabase";

/// Current schema version. Bump it whenever a collection is added.
pub const DEFAULT_SCHEMA_VERSION: u32 = 1;

/// Configuration for opening a [`Connector`](crate::connector::Connector).
///
/// # Examples
///
/// ```
/// use coverletter_store::config::StoreConfig;
///
/// // Create with defaults
/// let config = StoreConfig::builder()
///     .path("letters.redb")
///     .build();
/// assert_eq!(config.database_name, "coverLetterDatabase");
/// assert_eq!(config.version, 1);
///
/// // Customize options
/// let config = StoreConfig::builder()
///     .path("/data/letters.redb")
///     .database_name("drafts")
///     .version(2)
///     .create_if_missing(false)
///     .build();
/// assert_eq!(config.version, 2);
/// ```
#[derive(Debug, Clone, TypedBuilder)]
#[builder(doc)]
pub struct StoreConfig {
    /// Path to the redb database file
    #[builder(setter(into))]
    pub path: PathBuf,

    /// Store name; must match the name recorded in an existing store
    #[builder(default = DEFAULT_DATABASE_NAME.to_string(), setter(into))]
    pub database_name: String,

    /// Schema version; opening with a higher version than stored upgrades
    /// the store, a lower one is rejected
    #[builder(default = DEFAULT_SCHEMA_VERSION)]
    pub version: u32,

    /// Whether to create the database file if it doesn't exist
    #[builder(default = true)]
    pub create_if_missing: bool,
}

impl StoreConfig {
    /// Create a basic configuration with just a path
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            version: DEFAULT_SCHEMA_VERSION,
            create_if_missing: true,
        }
    }
}
