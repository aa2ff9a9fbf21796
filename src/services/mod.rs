// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod best_effort;
pub mod distance;
pub mod google_maps_client;
pub mod maps_sdk;
pub mod places_lookup;

pub use best_effort::*;
pub use distance::*;
pub use google_maps_client::*;
pub use maps_sdk::*;
pub use places_lookup::*;
