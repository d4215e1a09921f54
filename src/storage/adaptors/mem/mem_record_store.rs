use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;

use crate::RecordStore;
use crate::Result;

/// In-memory record store.
///
/// Backed by a `HashMap`, so `values` comes back in arbitrary order. Nothing
/// survives the process; `flush` is a no-op.
#[derive(Debug, Default)]
pub struct MemRecordStore {
    data: RwLock<HashMap<Vec<u8>, Vec<u8>>>,
}

impl MemRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemRecordStore {
    fn put(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()> {
        self.data.write().insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn values(&self) -> Result<Vec<Vec<u8>>> {
        let data = self.data.read();
        trace!("values len = {}", data.len());
        Ok(data.values().cloned().collect())
    }

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn len(&self) -> usize {
        self.data.read().len()
    }
}
