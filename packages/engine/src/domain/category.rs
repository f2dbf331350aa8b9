//! Word categories and the catalog that supplies them.
//!
//! The catalog is an external collaborator: the mobile shell owns storage and
//! purchase state. The engine only reads `Category` records; `InMemoryCatalog`
//! is the reference implementation used by the simulator and tests.

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Candidate secret words.
    #[serde(default)]
    pub items: Vec<String>,
    /// Hints shown to the spy only.
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub locked: bool,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: Vec::new(),
            hints: Vec::new(),
            locked: false,
        }
    }

    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hints<I, S>(mut self, hints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hints = hints.into_iter().map(Into::into).collect();
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}

/// Read-only source of categories.
pub trait CategoryCatalog {
    /// Every category, locked or not, in display order.
    fn categories(&self) -> &[Category];

    fn get(&self, id: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.id == id)
    }

    /// Categories a player may pick right now.
    fn available(&self) -> Vec<&Category> {
        self.categories().iter().filter(|c| !c.locked).collect()
    }

    /// Look up a playable category by id.
    fn resolve(&self, id: &str) -> Result<&Category, DomainError> {
        let category = self.get(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Category, format!("No category with id {id}"))
        })?;
        if category.locked {
            return Err(DomainError::validation(
                ValidationKind::CategoryLocked,
                format!("Category {id} is locked"),
            ));
        }
        Ok(category)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    categories: Vec<Category>,
}

impl InMemoryCatalog {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parse a JSON array of categories.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        let categories: Vec<Category> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation_other(format!("Invalid category catalog: {e}")))?;
        Ok(Self::new(categories))
    }
}

impl CategoryCatalog for InMemoryCatalog {
    fn categories(&self) -> &[Category] {
        &self.categories
    }
}
