//! Material catalog store
//!
//! A read-only, in-memory registry of purchasable materials. The wizard's
//! material selector, the materials view, and the dashboard all read from
//! it; nothing writes to it at runtime.

use crate::models::{Material, MaterialId};

/// Read-only registry of catalog materials
#[derive(Debug, Clone, Default)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// Create a catalog from a fixed set of materials
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    /// Create an empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a material by id
    pub fn get(&self, id: MaterialId) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }

    /// Look up a material by display code (case-insensitive)
    pub fn get_by_code(&self, code: &str) -> Option<&Material> {
        self.materials
            .iter()
            .find(|m| m.code.eq_ignore_ascii_case(code))
    }

    /// All materials, in catalog order
    pub fn all(&self) -> &[Material] {
        &self.materials
    }

    /// Number of materials in the catalog
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
