//! renderings of planned trips for people and other tools.
mod duration_format;
mod export_error;
mod log_csv;
mod log_sheet;
mod route_geojson;
mod route_report;

pub use duration_format::{format_clock, format_duration};
pub use export_error::ExportError;
pub use log_csv::{status_blocks_csv, write_status_blocks, StatusBlockRow};
pub use log_sheet::{render_day_sheet, render_trip_log};
pub use route_geojson::route_feature_collection;
pub use route_report::render_route_summary;
