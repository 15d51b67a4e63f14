pub mod answers;
pub mod plan;
pub mod progress;
