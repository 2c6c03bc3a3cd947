//! Student repository port and adapters.

pub mod contract;
pub mod sharded;

pub use contract::{CorruptRecordPolicy, StudentRepository};
pub use sharded::{read_record_array, ShardedFileRepository};
