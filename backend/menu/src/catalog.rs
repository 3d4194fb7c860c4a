//! # Catalog
//!
//! The menu served by the API.
//!
//! ## Lifecycle
//!
//! - Built exactly once at startup, either from the built-in sample menu or from a JSON file
//! - Validated on construction, so every item held here satisfies the record invariants
//! - Never mutated afterwards; the server shares it behind an `Arc`
//!
//! ## Lookups
//!
//! - Ordered slice of items, in definition order
//! - Id index built at construction for O(1) single-item lookups
//! - Distinct categories/cuisines in first-occurrence order
use std::{
    collections::{HashMap, HashSet},
    fs::read_to_string,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::items::{MenuItem, sample_items};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Menu item ids must be positive")]
    InvalidId,

    #[error("Duplicate menu item id {0}")]
    DuplicateId(u32),

    #[error("Menu item {id} has an empty name")]
    EmptyName { id: u32 },

    #[error("Menu item {id} must serve at least one person")]
    InvalidServings { id: u32 },
}

#[derive(Debug)]
pub struct Catalog {
    items: Vec<MenuItem>,
    positions: HashMap<u32, usize>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Result<Self, CatalogError> {
        let mut positions = HashMap::with_capacity(items.len());

        for (position, item) in items.iter().enumerate() {
            if item.id == 0 {
                return Err(CatalogError::InvalidId);
            }
            if item.name.trim().is_empty() {
                return Err(CatalogError::EmptyName { id: item.id });
            }
            if item.servings == 0 {
                return Err(CatalogError::InvalidServings { id: item.id });
            }
            if positions.insert(item.id, position).is_some() {
                return Err(CatalogError::DuplicateId(item.id));
            }
        }

        Ok(Self { items, positions })
    }

    pub fn sample() -> Result<Self, CatalogError> {
        Self::new(sample_items())
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<MenuItem> = serde_json::from_str(json)?;

        Self::new(items)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    /// Loads the catalog from `path` when given, otherwise the built-in sample menu.
    pub fn load(path: Option<&Path>) -> Result<Self, CatalogError> {
        let catalog = match path {
            Some(path) => {
                info!("Loading catalog from {}", path.display());
                Self::from_json_file(path)?
            }
            None => {
                info!("No catalog file configured, using the sample menu");
                Self::sample()?
            }
        };

        info!("Loaded {} menu items", catalog.len());

        Ok(catalog)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&MenuItem> {
        self.positions
            .get(&id)
            .and_then(|&position| self.items.get(position))
    }

    pub fn categories(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|item| item.category.as_str()))
    }

    pub fn cuisines(&self) -> Vec<&str> {
        distinct(self.items.iter().map(|item| item.cuisine.as_str()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();

    values.filter(|value| seen.insert(*value)).collect()
}
