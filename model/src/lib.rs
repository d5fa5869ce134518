pub mod sync_record;
