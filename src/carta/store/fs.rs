use super::{validate, CatalogStore};
use crate::error::Result;
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog read from a JSON file holding an array of items.
///
/// The file is read once on [`FileCatalog::load`]; later edits to it are not
/// picked up by an existing store.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
    items: Vec<Item>,
}

impl FileCatalog {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = fs::read_to_string(&path)?;
        let items: Vec<Item> = serde_json::from_str(&content)?;
        validate(&items)?;
        Ok(Self { path, items })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FileCatalog {
    fn items(&self) -> &[Item] {
        &self.items
    }
}
