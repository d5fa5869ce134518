pub mod serialize;
pub mod sync_records;
