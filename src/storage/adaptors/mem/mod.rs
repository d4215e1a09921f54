mod mem_record_store;

pub use mem_record_store::*;
