pub mod brief;
pub mod plan;
