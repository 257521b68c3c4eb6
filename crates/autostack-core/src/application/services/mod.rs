//! Application services - orchestrate use cases.

pub mod generator;

pub use generator::ProjectGenerator;
