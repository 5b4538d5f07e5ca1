//! Category service
//!
//! Provides business logic for category management: CRUD operations with
//! duplicate-name checks, color validation, and a referencing-expense guard
//! on delete.

use crate::audit::EntityType;
use crate::error::{MonityError, MonityResult};
use crate::models::{Category, CategoryId};
use crate::storage::Storage;

use super::pagination::{paginate, Page, PageRequest};

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a Storage,
}

/// Optional fields for a partial category update
#[derive(Debug, Clone, Default)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub clear_description: bool,
    pub color: Option<String>,
    pub is_default: Option<bool>,
}

impl CategoryPatch {
    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && !self.clear_description
            && self.color.is_none()
            && self.is_default.is_none()
    }
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new category
    pub fn create(
        &self,
        name: &str,
        description: Option<&str>,
        color: &str,
    ) -> MonityResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MonityError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Names are unique case-insensitively, Polish names of the seeded
        // defaults included
        if self.storage.categories.get_by_name(name)?.is_some() {
            return Err(MonityError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = match description.map(str::trim).filter(|d| !d.is_empty()) {
            Some(desc) => Category::with_description(name, color, desc),
            None => Category::new(name, color),
        };

        category
            .validate()
            .map_err(|e| MonityError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_create(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(category)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> MonityResult<Option<Category>> {
        self.storage.categories.get(id)
    }

    /// Find a category by name, full ID, or short displayed ID
    pub fn find(&self, identifier: &str) -> MonityResult<Option<Category>> {
        // Try by name first
        if let Some(category) = self.storage.categories.get_by_name(identifier)? {
            return Ok(Some(category));
        }

        // Try parsing as a full ID
        if let Ok(id) = identifier.parse::<CategoryId>() {
            return self.storage.categories.get(id);
        }

        // Fall back to the short form shown in listings ("cat-1a2b3c4d")
        let all = self.storage.categories.get_all()?;
        Ok(all.into_iter().find(|c| c.id.matches_str(identifier)))
    }

    /// Resolve a category or fail with NOT_FOUND
    pub fn resolve(&self, identifier: &str) -> MonityResult<Category> {
        self.find(identifier)?
            .ok_or_else(|| MonityError::category_not_found(identifier))
    }

    /// List categories sorted by name
    ///
    /// `include_default = false` drops the seeded defaults.
    pub fn list(&self, include_default: bool, request: PageRequest) -> MonityResult<Page<Category>> {
        let mut categories = self.storage.categories.get_all()?;
        if !include_default {
            categories.retain(|c| !c.is_default);
        }
        Ok(paginate(categories, request))
    }

    /// List every category without pagination (dashboard view)
    pub fn list_all(&self) -> MonityResult<Vec<Category>> {
        self.storage.categories.get_all()
    }

    /// Apply a partial update to a category
    pub fn update(&self, id: CategoryId, patch: CategoryPatch) -> MonityResult<Category> {
        let mut category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| MonityError::category_not_found(id.to_string()))?;

        if patch.is_empty() {
            return Err(MonityError::InvalidInput("Nothing to update".into()));
        }

        let before = category.clone();

        if let Some(new_name) = &patch.name {
            let new_name = new_name.trim();
            if new_name.is_empty() {
                return Err(MonityError::Validation(
                    "Category name cannot be empty".into(),
                ));
            }

            // Check for duplicate, excluding self
            if let Some(existing) = self.storage.categories.get_by_name(new_name)? {
                if existing.id != id {
                    return Err(MonityError::Duplicate {
                        entity_type: "Category",
                        identifier: new_name.to_string(),
                    });
                }
            }

            // Renaming a seeded default detaches its Polish alias
            if category.name != new_name {
                category.name_pl = None;
            }
            category.name = new_name.to_string();
        }

        if patch.clear_description {
            category.description = None;
        } else if let Some(desc) = &patch.description {
            category.description = Some(desc.trim().to_string());
        }

        if let Some(color) = &patch.color {
            category.color = color.clone();
        }

        if let Some(is_default) = patch.is_default {
            category.is_default = is_default;
        }

        category.touch();
        category
            .validate()
            .map_err(|e| MonityError::Validation(e.to_string()))?;

        self.storage.categories.upsert(category.clone())?;
        self.storage.categories.save()?;

        self.storage.log_update(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &before,
            &category,
            None,
        )?;

        Ok(category)
    }

    /// Delete a category
    ///
    /// Refused while any expense still references it.
    pub fn delete(&self, id: CategoryId) -> MonityResult<()> {
        let category = self
            .storage
            .categories
            .get(id)?
            .ok_or_else(|| MonityError::category_not_found(id.to_string()))?;

        let referencing = self.storage.expenses.count_by_category(id)?;
        if referencing > 0 {
            return Err(MonityError::ForeignKey(format!(
                "Cannot delete category '{}': {} expense(s) still reference it",
                category.name, referencing
            )));
        }

        self.storage.categories.delete(id)?;
        self.storage.categories.save()?;

        self.storage.log_delete(
            EntityType::Category,
            category.id.to_string(),
            Some(category.name.clone()),
            &category,
        )?;

        Ok(())
    }
}
