pub mod bill;
pub mod config;
pub mod control;
pub mod db;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod session;
pub mod settings;
pub mod solo;
pub mod table;
pub mod watch;
