pub mod app;
pub mod bill;
pub mod calculator;
pub mod clock;
pub mod config;
pub mod ledger;
pub mod log;
pub mod session_timer;
pub mod shortcuts;
pub mod table;
pub mod ticker;
