pub mod progress;
pub mod report;
pub mod tree;
