pub mod plan_builder;
pub mod progress;
pub mod templates;
