//! Configuration management for the stylist assistant
//!
//! Supports loading configuration from:
//! - YAML files (config/default.yaml, config/{environment}.yaml)
//! - Environment variables (STYLIST__ prefix)
//!
//! # Domain Data
//!
//! The catalog, keyword vocabularies, store identity, and reply templates
//! all ship with built-in defaults and can each be overridden by a YAML file
//! referenced from `settings.data`. Everything is assembled once into an
//! immutable [`StylistConfig`] bundle at startup and injected into the
//! components that need it.

pub mod bundle;
pub mod catalog_data;
pub mod settings;
pub mod store;
pub mod templates;
pub mod vocabulary;

pub use bundle::StylistConfig;
pub use catalog_data::{default_catalog, load_catalog, CatalogDataError};
pub use settings::{load_settings, DataSettings, LlmSettings, LoggingSettings, Settings};
pub use store::{StoreInfo, StoreInfoError};
pub use templates::{render, LocalizedText, ReplyTemplates, TemplatesError};
pub use vocabulary::{QuantityWord, Vocabulary, VocabularyError};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Catalog rejected: {0}")]
    Catalog(#[from] stylist_core::CatalogError),

    #[error(transparent)]
    CatalogData(#[from] CatalogDataError),

    #[error(transparent)]
    Vocabulary(#[from] VocabularyError),

    #[error(transparent)]
    StoreInfo(#[from] StoreInfoError),

    #[error(transparent)]
    Templates(#[from] TemplatesError),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
