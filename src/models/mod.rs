//! Core data models for the leagues.

mod fixture;
mod ids;
mod standing;
mod team;
mod validation;

pub use fixture::*;
pub use ids::*;
pub use standing::*;
pub use team::*;
pub use validation::*;
