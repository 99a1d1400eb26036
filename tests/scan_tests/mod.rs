mod batch;
mod fixtures;
mod properties;
mod scenarios;

use glossator::{CommentEngine, ScanConfig};

pub fn engine() -> CommentEngine {
    CommentEngine::new(ScanConfig::default()).unwrap()
}
