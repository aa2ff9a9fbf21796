// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod category;
pub mod coordinates;
pub mod directions;
pub mod place;

pub use category::*;
pub use coordinates::*;
pub use directions::*;
pub use place::*;
