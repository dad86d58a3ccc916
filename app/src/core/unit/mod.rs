mod degree_celsius;
mod flow;

pub use degree_celsius::DegreeCelsius;
pub use flow::LitersPerMinute;
