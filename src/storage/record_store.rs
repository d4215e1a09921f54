use crate::Result;

#[cfg(test)]
use mockall::automock;

/// Persistent byte-string map that backup writes into and restore reads from.
///
/// Implementations must make every successful `put` durable once `flush`
/// returns, and `values` must yield every stored value exactly once. The
/// order `values` yields them in is unspecified and never relied upon.
#[cfg_attr(test, automock)]
pub trait RecordStore: Send + Sync {
    fn put(
        &self,
        key: &[u8],
        value: &[u8],
    ) -> Result<()>;

    /// Collects all stored values in whatever order the store iterates.
    fn values(&self) -> Result<Vec<Vec<u8>>>;

    fn flush(&self) -> Result<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
