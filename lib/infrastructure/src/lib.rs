mod db;
mod http;
mod monitoring;

pub use db::DatabaseConfig;
pub use http::server::HttpServerConfig;
pub use monitoring::MonitoringConfig;
