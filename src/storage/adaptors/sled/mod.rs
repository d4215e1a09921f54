mod sled_record_store;


pub use sled_record_store::*;

use crate::Error;
use crate::StorageConfig;
use crate::StorageError;

#[doc(hidden)]
pub fn init_sled_record_db(
    sled_db_path: impl AsRef<std::path::Path> + std::fmt::Debug,
    config: &StorageConfig,
) -> Result<sled::Db, Error> {
    tracing::debug!("init_sled_record_db from path: {:?}", &sled_db_path);

    let path = sled_db_path.as_ref();

    sled::Config::default()
        .path(path)
        .cache_capacity(config.cache_capacity)
        .flush_every_ms(config.flush_every_ms)
        .use_compression(config.use_compression)
        .mode(config.mode.into())
        .open()
        .map_err(|e| {
            tracing::warn!(
                "Try to open DB at this location: {:?} and failed: {:?}",
                path,
                e
            );
            StorageError::DbError(format!("failed to open store at {}: {}", path.display(), e))
                .into()
        })
}
