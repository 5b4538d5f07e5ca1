//! Category repository for JSON storage
//!
//! Manages loading and saving categories to categories.json. Categories are
//! shared across users; names resolve case-insensitively.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MonityError;
use crate::models::{Category, CategoryId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub(super) struct CategoryData {
    pub(super) categories: Vec<Category>,
}

/// Repository for category persistence
pub struct CategoryRepository {
    path: PathBuf,
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            categories: RwLock::new(HashMap::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), MonityError> {
        let file_data: CategoryData = read_json(&self.path)?;

        let mut categories = self
            .categories
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.clear();

        for category in file_data.categories {
            categories.insert(category.id, category);
        }

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), MonityError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut category_list: Vec<_> = categories.values().cloned().collect();
        category_list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

        let file_data = CategoryData {
            categories: category_list,
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Result<Option<Category>, MonityError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(categories.get(&id).cloned())
    }

    /// Get all categories, sorted by name
    pub fn get_all(&self) -> Result<Vec<Category>, MonityError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut list: Vec<_> = categories.values().cloned().collect();
        list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(list)
    }

    /// Get a category by name (case-insensitive, matches the Polish name of
    /// seeded defaults too)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Category>, MonityError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(categories
            .values()
            .find(|c| {
                c.name.to_lowercase() == name_lower
                    || c.name_pl
                        .as_ref()
                        .is_some_and(|pl| pl.to_lowercase() == name_lower)
            })
            .cloned())
    }

    /// Insert or update a category
    pub fn upsert(&self, category: Category) -> Result<(), MonityError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        categories.insert(category.id, category);
        Ok(())
    }

    /// Delete a category
    pub fn delete(&self, id: CategoryId) -> Result<bool, MonityError> {
        let mut categories = self
            .categories
            .write()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(categories.remove(&id).is_some())
    }

    /// Count categories
    pub fn count(&self) -> Result<usize, MonityError> {
        let categories = self
            .categories
            .read()
            .map_err(|e| MonityError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(categories.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DefaultCategory;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, CategoryRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("categories.json");
        let repo = CategoryRepository::new(path);
        (temp_dir, repo)
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_upsert_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category = Category::new("Pets", "#112233");
        let id = category.id;

        repo.upsert(category).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Pets");

        assert!(repo.delete(id).unwrap());
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_get_all_sorted_by_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Category::new("transport", "#111111")).unwrap();
        repo.upsert(Category::new("Food", "#222222")).unwrap();
        repo.upsert(Category::new("Books", "#333333")).unwrap();

        let all = repo.get_all().unwrap();
        let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Books", "Food", "transport"]);
    }

    #[test]
    fn test_get_by_name_case_insensitive() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(Category::new("Groceries", "#112233")).unwrap();

        assert!(repo.get_by_name("GROCERIES").unwrap().is_some());
        assert!(repo.get_by_name("groceries").unwrap().is_some());
        assert!(repo.get_by_name("grocery").unwrap().is_none());
    }

    #[test]
    fn test_get_by_polish_name() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.upsert(DefaultCategory::Food.to_category()).unwrap();

        let by_en = repo.get_by_name("food").unwrap();
        let by_pl = repo.get_by_name("jedzenie").unwrap();
        assert!(by_en.is_some());
        assert_eq!(by_en.unwrap().id, by_pl.unwrap().id);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let category = Category::new("Pets", "#112233");
        let id = category.id;

        repo.upsert(category).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("categories.json");
        let repo2 = CategoryRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        let retrieved = repo2.get(id).unwrap().unwrap();
        assert_eq!(retrieved.name, "Pets");
    }
}
