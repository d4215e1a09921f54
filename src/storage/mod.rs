mod adaptors;
mod record_store;


pub use adaptors::*;
pub use record_store::*;
