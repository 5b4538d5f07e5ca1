//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::MonityPaths;
use crate::error::MonityError;
use crate::models::DefaultCategory;

use super::categories::CategoryData;
use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and seeds the default categories
pub fn initialize_storage(paths: &MonityPaths) -> Result<(), MonityError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        create_default_categories(paths)?;
    }

    Ok(())
}

/// Seed the six default categories
fn create_default_categories(paths: &MonityPaths) -> Result<(), MonityError> {
    let categories = DefaultCategory::all()
        .iter()
        .map(|d| d.to_category())
        .collect();

    let data = CategoryData { categories };
    write_json_atomic(paths.categories_file(), &data)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.categories_file().exists());

        initialize_storage(&paths).unwrap();

        assert!(paths.categories_file().exists());
        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_default_categories_created() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        let data: CategoryData = serde_json::from_str(&content).unwrap();

        assert_eq!(data.categories.len(), 6);

        let names: Vec<_> = data.categories.iter().map(|c| c.name.as_str()).collect();
        assert!(names.contains(&"Food"));
        assert!(names.contains(&"Transport"));
        assert!(names.contains(&"Entertainment"));
        assert!(names.contains(&"Housing"));
        assert!(names.contains(&"Shopping"));
        assert!(names.contains(&"Health"));

        assert!(data.categories.iter().all(|c| c.is_default));
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MonityPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();

        // Replace the seeded file with custom data
        let custom_data = CategoryData {
            categories: vec![Category::new("Custom", "#ABCDEF")],
        };
        write_json_atomic(paths.categories_file(), &custom_data).unwrap();

        // Second initialization should not overwrite
        initialize_storage(&paths).unwrap();

        let content = std::fs::read_to_string(paths.categories_file()).unwrap();
        let data: CategoryData = serde_json::from_str(&content).unwrap();

        assert_eq!(data.categories.len(), 1);
        assert_eq!(data.categories[0].name, "Custom");
    }
}
