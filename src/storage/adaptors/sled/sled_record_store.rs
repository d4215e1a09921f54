use std::path::Path;
use std::path::PathBuf;

use sled::IVec;
use tracing::debug;
use tracing::instrument;
use tracing::trace;
use tracing::warn;

use super::init_sled_record_db;
use crate::RecordStore;
use crate::Result;
use crate::StorageConfig;

/// `RecordStore` backed by an on-disk `sled` database.
///
/// The handle lives exactly as long as this value. `close` flushes and
/// releases it; any other exit path flushes on drop.
pub struct SledRecordStore {
    db: sled::Db,
    path: PathBuf,
}

impl std::fmt::Debug for SledRecordStore {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("SledRecordStore").field("path", &self.path).finish()
    }
}

impl SledRecordStore {
    /// Opens the database at `path`, creating it if missing.
    pub fn open(
        path: impl AsRef<Path>,
        config: &StorageConfig,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let db = init_sled_record_db(&path, config)?;
        debug!("opened record store at {:?}, recovered={}", path, db.was_recovered());

        Ok(Self { db, path })
    }

    /// Flushes pending writes and releases the database handle.
    pub fn close(self) -> Result<()> {
        let bytes = self.db.flush()?;
        debug!("closed record store at {:?}, flushed {} bytes", self.path, bytes);
        Ok(())
    }
}

impl RecordStore for SledRecordStore {
    fn put(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()> {
        self.db.insert(key, IVec::from(value))?;
        Ok(())
    }

    #[instrument(skip(self))]
    fn values(&self) -> Result<Vec<Vec<u8>>> {
        let mut values = Vec::with_capacity(self.db.len());
        for item in self.db.iter() {
            let (_, value) = item?;
            values.push(value.to_vec());
        }
        trace!("values len = {}", values.len());
        Ok(values)
    }

    fn flush(&self) -> Result<()> {
        trace!("SledRecordStore flush");
        self.db.flush()?;
        Ok(())
    }

    fn len(&self) -> usize {
        self.db.len()
    }
}

impl Drop for SledRecordStore {
    fn drop(&mut self) {
        if let Err(e) = self.db.flush() {
            warn!("flush on drop failed for {:?}: {:?}", self.path, e);
        }
    }
}
