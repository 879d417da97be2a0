pub mod excavation;
pub mod offset;
pub mod query;
