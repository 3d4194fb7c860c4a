use std::sync::Arc;

use menu::{Catalog, CatalogError};

use super::config::Config;

pub struct AppState {
    pub catalog: Catalog,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Result<Arc<Self>, CatalogError> {
        let catalog = Catalog::load(config.catalog_path.as_deref())?;

        Ok(Self::with_catalog(catalog, config))
    }

    pub fn with_catalog(catalog: Catalog, config: Config) -> Arc<Self> {
        Arc::new(Self { catalog, config })
    }
}
