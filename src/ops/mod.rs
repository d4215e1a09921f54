//! Backup and restore operations.
//!
//! Both directions are generic over [`RecordStore`](crate::RecordStore) and
//! run to completion or fail on the first error. Nothing is retried and
//! nothing already written is rolled back.

mod backup;
mod restore;

pub use backup::*;
pub use restore::*;
