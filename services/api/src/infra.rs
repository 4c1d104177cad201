use metrics_exporter_prometheus::PrometheusHandle;
use menu_match::catalog::{MenuCatalog, MenuCatalogImporter};
use menu_match::config::CatalogConfig;
use menu_match::error::AppError;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured CSV catalog, falling back to the bundled sample.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<MenuCatalog, AppError> {
    match config.path.as_deref() {
        Some(path) => load_catalog_from_path(path),
        None => {
            let catalog = MenuCatalog::sample();
            info!(items = catalog.len(), "using bundled sample catalog");
            Ok(catalog)
        }
    }
}

pub(crate) fn load_catalog_from_path(path: &Path) -> Result<MenuCatalog, AppError> {
    let catalog = MenuCatalogImporter::from_path(path)?;
    info!(
        path = %path.display(),
        items = catalog.len(),
        restaurants = catalog.restaurants().len(),
        "menu catalog imported"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_path_uses_sample_catalog() {
        let catalog = load_catalog(&CatalogConfig::default()).expect("sample loads");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn unreadable_path_surfaces_catalog_error() {
        let config = CatalogConfig {
            path: Some(PathBuf::from("./no-such-menu.csv")),
        };

        let error = load_catalog(&config).expect_err("io error");
        assert!(matches!(error, AppError::Catalog(_)));
    }
}
