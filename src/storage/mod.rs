//! Storage layer for the expense tracker
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the hooks services use to write audit entries.

pub mod expenses;
pub mod file_io;
pub mod init;

pub use expenses::ExpenseStore;
pub use file_io::{read_json_required, write_json_atomic};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::TrackerPaths;
use crate::error::ExpenseError;

/// Main storage coordinator
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseStore,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance, creating directories and the expense file if needed
    pub fn new(paths: TrackerPaths) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let expenses = ExpenseStore::new(paths.expenses_file());
        expenses.initialize()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            expenses,
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    pub fn audit_logger(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), ExpenseError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ExpenseError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}
