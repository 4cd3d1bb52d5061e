//! Assembled immutable configuration for the assistant
//!
//! Everything the engines need at runtime, built once at startup and shared
//! behind an `Arc`. There is no ambient global state; components receive a
//! reference to this bundle.

use stylist_core::CatalogIndex;

use crate::catalog_data::{default_catalog, load_catalog};
use crate::settings::Settings;
use crate::store::StoreInfo;
use crate::templates::ReplyTemplates;
use crate::vocabulary::Vocabulary;
use crate::ConfigError;

/// Immutable domain configuration: catalog, vocabularies, store identity,
/// reply templates.
#[derive(Debug, Clone)]
pub struct StylistConfig {
    pub catalog: CatalogIndex,
    pub vocabulary: Vocabulary,
    pub store: StoreInfo,
    pub templates: ReplyTemplates,
}

impl StylistConfig {
    /// Assemble from settings, honoring any file overrides in
    /// `settings.data`.
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let categories = match &settings.data.catalog_path {
            Some(path) => load_catalog(path)?,
            None => default_catalog(),
        };
        let catalog = CatalogIndex::build(categories)?;

        let vocabulary = match &settings.data.vocabulary_path {
            Some(path) => Vocabulary::load(path)?,
            None => {
                let vocabulary = Vocabulary::default();
                vocabulary.validate()?;
                vocabulary
            }
        };

        let store = match &settings.data.store_path {
            Some(path) => StoreInfo::load(path)?,
            None => StoreInfo::default(),
        };

        let templates = match &settings.data.templates_path {
            Some(path) => ReplyTemplates::load(path)?,
            None => ReplyTemplates::default(),
        };

        tracing::info!(
            categories = catalog.categories().len(),
            products = catalog.product_count(),
            store = %store.name,
            "assembled stylist configuration"
        );

        Ok(Self {
            catalog,
            vocabulary,
            store,
            templates,
        })
    }

    /// Built-in data only, no file overrides. Used by tests and demos.
    pub fn built_in() -> Result<Self, ConfigError> {
        Self::from_settings(&Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_bundle_assembles() {
        let config = StylistConfig::built_in().unwrap();
        assert!(config.catalog.product_count() > 0);
        assert_eq!(config.store.name, "TantuShree");
        config.vocabulary.validate().unwrap();
    }

    #[test]
    fn test_missing_override_file_fails() {
        let settings = Settings {
            data: crate::settings::DataSettings {
                catalog_path: Some("/nonexistent/catalog.yaml".to_string()),
                ..Default::default()
            },
            ..Settings::default()
        };
        assert!(StylistConfig::from_settings(&settings).is_err());
    }
}
