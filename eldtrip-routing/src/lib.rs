//! external collaborators of the trip planner: a road routing service
//! (OSRM HTTP API) wrapped in a retry policy, and address geocoding.
pub mod geocode;
pub mod osrm;
pub mod provider;
