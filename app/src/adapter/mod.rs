pub mod api;
pub mod monitor;
