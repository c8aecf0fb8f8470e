//! Gallery images listed from a directory.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use trailforward_core::store::ImageStore;
use trailforward_core::{CoreError, CoreResult};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "svg", "avif"];

/// Lists the image files of a directory as URLs under `url_prefix`,
/// sorted by file name.
#[derive(Debug, Clone)]
pub struct DirImageStore {
    dir: PathBuf,
    url_prefix: String,
}

impl DirImageStore {
    pub fn new(dir: PathBuf, url_prefix: &str) -> Self {
        DirImageStore {
            dir,
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
        }
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

#[async_trait]
impl ImageStore for DirImageStore {
    async fn list(&self) -> CoreResult<Vec<String>> {
        let unreadable = |e: std::io::Error| CoreError::ImagesUnreadable(format!("{}: {e}", self.dir.display()));

        let mut entries = tokio::fs::read_dir(&self.dir).await.map_err(unreadable)?;
        let mut names = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(unreadable)? {
            let path = entry.path();
            let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);

            if is_file
                && is_image(&path)
                && let Some(name) = path.file_name().and_then(|n| n.to_str())
            {
                names.push(name.to_string());
            }
        }

        if names.is_empty() {
            return Err(CoreError::ImagesNotFound);
        }

        names.sort();
        Ok(names
            .into_iter()
            .map(|name| format!("{}/{}", self.url_prefix, name))
            .collect())
    }
}
