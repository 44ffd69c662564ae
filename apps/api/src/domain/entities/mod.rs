pub mod export_status;
pub mod waitlist_entry;
