pub mod history_entry;
pub mod settings;
pub mod table;
pub mod table_status;
