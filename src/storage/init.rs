//! Storage initialization
//!
//! Handles first-run setup: directories and an empty expense list.

use crate::config::paths::TrackerPaths;
use crate::error::ExpenseError;

use super::expenses::ExpenseStore;

/// Initialize storage for a fresh installation
///
/// Returns `true` if a new expense file was written. Running it again is a
/// no-op.
pub fn initialize_storage(paths: &TrackerPaths) -> Result<bool, ExpenseError> {
    paths.ensure_directories()?;
    ExpenseStore::new(paths.expenses_file()).initialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;
    use crate::storage::write_json_atomic;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_storage() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(!paths.expenses_file().exists());
        assert!(initialize_storage(&paths).unwrap());

        assert!(paths.data_dir().exists());
        assert!(paths.expenses_file().exists());
    }

    #[test]
    fn test_doesnt_overwrite_existing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        write_json_atomic(
            paths.expenses_file(),
            &vec![Expense::new("2024-01-05", "Food", 100.0, "")],
        )
        .unwrap();

        assert!(!initialize_storage(&paths).unwrap());

        let loaded = ExpenseStore::new(paths.expenses_file()).load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].category, "Food");
    }
}
