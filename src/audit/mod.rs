//! Audit logging for the expense tracker
//!
//! Records every create, update and delete with before/after values in an
//! append-only, line-delimited JSON log next to the settings file.
//!
//! - `AuditEntry`: one logged operation (timestamp, operation, entity,
//!   optional before/after values and diff summary).
//! - `AuditLogger`: appends entries to the log and reads them back.
//! - `generate_diff`: summarises changed fields for update entries.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
