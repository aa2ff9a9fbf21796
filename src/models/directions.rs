// src/models/directions.rs
// DOCUMENTATION: Directions result model
// PURPOSE: Route summary plus turn-by-turn steps for one origin/destination pair

use serde::Serialize;

/// One turn-by-turn instruction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionsStep {
    /// Plain-text instruction (markup removed)
    pub instruction: String,
    pub distance: String,
    pub duration: String,
}

/// Route between two points
/// DOCUMENTATION: Distance and duration are the provider's human-readable
/// strings; `polyline_points` is the encoded overview path
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectionsInfo {
    pub distance: String,
    pub duration: String,
    pub steps: Vec<DirectionsStep>,
    pub polyline_points: String,
}
