use std::fmt::Display;

use derive_more::derive::AsRef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, AsRef, Serialize, Deserialize)]
pub struct LitersPerMinute(pub f64);

impl From<&LitersPerMinute> for f64 {
    fn from(value: &LitersPerMinute) -> Self {
        value.0
    }
}

impl From<f64> for LitersPerMinute {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<LitersPerMinute> for f64 {
    fn from(value: LitersPerMinute) -> Self {
        value.0
    }
}

impl Display for LitersPerMinute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} l/min", self.0)
    }
}
