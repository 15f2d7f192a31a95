pub mod mutators;
pub mod schema;
pub mod selectors;
pub mod spec;
