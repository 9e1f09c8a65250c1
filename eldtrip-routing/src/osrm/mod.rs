mod osrm_client;
mod osrm_client_config;
mod osrm_response;
mod road_route;
mod route_service;
mod route_service_error;

pub use osrm_client::OsrmClient;
pub use osrm_client_config::OsrmClientConfig;
pub use osrm_response::{OsrmGeometry, OsrmResponse, OsrmRoute};
pub use road_route::RoadRoute;
pub use route_service::RouteService;
pub use route_service_error::RouteServiceError;
