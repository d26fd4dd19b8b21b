//! Record store
//!
//! Durable ordered collection of health records, persisted as one
//! comma-separated line per record in a single text file. Records have no
//! stored identifier: an id is a record's 0-based position at read time and
//! shifts whenever an earlier record is deleted.

pub mod file;
pub mod record;

pub use file::{DeleteOutcome, RecordStore};
pub use record::{FormError, ListedRecord, Record};
