use std::sync::Arc;

use trailforward_core::config::SiteConfig;

use crate::db::SqliteStore;
use crate::images::DirImageStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub records: Arc<SqliteStore>,
    pub images: Arc<DirImageStore>,
}

impl AppState {
    pub fn new(config: SiteConfig, records: Arc<SqliteStore>) -> Self {
        let images = DirImageStore::new(config.gallery_dir(), &config.gallery_url_prefix);
        AppState {
            config: Arc::new(config),
            records,
            images: Arc::new(images),
        }
    }
}
