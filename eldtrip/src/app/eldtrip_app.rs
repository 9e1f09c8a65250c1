use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use eldtrip_core::model::{RouteSummary, TripLog};
use eldtrip_routing::{
    geocode::{ChainGeocoder, CoordinateGeocoder, Geocoder},
    osrm::OsrmClient,
    provider::RoadRouteProvider,
};
use serde_json::json;

use super::{
    EldTripAppError, EldTripConfiguration, OutputFormat, TripPlanner, TripRequest,
};
use crate::model::{
    duty_log::DutyLogGenerator,
    export::{
        render_route_summary, render_trip_log, route_feature_collection, status_blocks_csv,
    },
    hos::HosStopPlanner,
};

/// Command line tool for Hours-of-Service trip planning and ELD duty-status logs
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct EldTripApp {
    /// .toml or .json file with configuration overrides
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
    #[command(subcommand)]
    pub op: EldTripOperation,
}

#[derive(Debug, Clone, Subcommand)]
pub enum EldTripOperation {
    /// resolve an address, or a "lat, lng" pair, to a coordinate
    Geocode {
        #[arg(long)]
        address: String,
    },
    /// route a trip and place the required rest and fuel stops
    PlanRoute {
        #[command(flatten)]
        trip: TripArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// write the route summary here instead of stdout
        #[arg(long)]
        output: Option<String>,
        /// also write the route and stops as GeoJSON
        #[arg(long)]
        geojson: Option<String>,
    },
    /// generate daily duty-status logs from a route summary JSON file
    GenerateLogs {
        #[arg(long)]
        summary: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// date of the first log day, YYYY-MM-DD. defaults to today
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        output: Option<String>,
    },
    /// plan the route and generate its duty-status logs
    PlanTrip {
        #[command(flatten)]
        trip: TripArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        geojson: Option<String>,
    },
}

/// trip fields from a JSON request file and/or flags. flags win.
#[derive(Args, Debug, Clone, Default)]
pub struct TripArgs {
    /// JSON file holding a trip request
    #[arg(long)]
    pub request: Option<String>,
    #[arg(long)]
    pub current_location: Option<String>,
    #[arg(long)]
    pub pickup_location: Option<String>,
    #[arg(long)]
    pub dropoff_location: Option<String>,
    #[arg(long)]
    pub current_cycle_hours: Option<f64>,
}

impl TripArgs {
    pub fn trip_request(&self) -> Result<TripRequest, EldTripAppError> {
        let from_file = match &self.request {
            Some(filepath) => read_json::<TripRequest>(filepath)?,
            None => TripRequest::default(),
        };
        Ok(from_file.merge(TripRequest {
            current_location: self.current_location.clone(),
            pickup_location: self.pickup_location.clone(),
            dropoff_location: self.dropoff_location.clone(),
            current_cycle_hours: self.current_cycle_hours,
        }))
    }
}

impl EldTripApp {
    pub fn run(self) -> Result<(), EldTripAppError> {
        let conf = EldTripConfiguration::load(self.configuration_file.as_deref())?;
        self.op.run(&conf)
    }
}

impl EldTripOperation {
    pub fn run(self, conf: &EldTripConfiguration) -> Result<(), EldTripAppError> {
        match self {
            EldTripOperation::Geocode { address } => {
                let coordinate = build_geocoder(conf)?.resolve(&address).map_err(|source| {
                    EldTripAppError::Geocode {
                        field: String::from("address"),
                        source,
                    }
                })?;
                let out = json!({
                    "address": address,
                    "latitude": coordinate.latitude,
                    "longitude": coordinate.longitude,
                });
                write_output(None, &serde_json::to_string_pretty(&out)?)
            }
            EldTripOperation::PlanRoute {
                trip,
                format,
                output,
                geojson,
            } => {
                let summary = plan_route(conf, &trip)?;
                if let Some(path) = geojson {
                    write_geojson(&path, &summary)?;
                }
                let text = match format {
                    OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
                    OutputFormat::Text => render_route_summary(&summary),
                    OutputFormat::Csv => {
                        return Err(EldTripAppError::InvalidRequest(String::from(
                            "csv output is only available for duty logs",
                        )))
                    }
                };
                write_output(output.as_deref(), &text)
            }
            EldTripOperation::GenerateLogs {
                summary,
                format,
                start_date,
                output,
            } => {
                let route: RouteSummary = read_json(&summary)?;
                let trip_log = generate_logs(conf, &route, start_date)?;
                let text = match format {
                    OutputFormat::Json => serde_json::to_string_pretty(&trip_log)?,
                    OutputFormat::Text => render_trip_log(&trip_log),
                    OutputFormat::Csv => status_blocks_csv(&trip_log)?,
                };
                write_output(output.as_deref(), &text)
            }
            EldTripOperation::PlanTrip {
                trip,
                format,
                start_date,
                output,
                geojson,
            } => {
                let summary = plan_route(conf, &trip)?;
                if let Some(path) = geojson {
                    write_geojson(&path, &summary)?;
                }
                let trip_log = generate_logs(conf, &summary, start_date)?;
                let text = match format {
                    OutputFormat::Json => serde_json::to_string_pretty(&json!({
                        "route": summary,
                        "logs": trip_log,
                    }))?,
                    OutputFormat::Text => format!(
                        "{}\n{}",
                        render_route_summary(&summary),
                        render_trip_log(&trip_log)
                    ),
                    OutputFormat::Csv => status_blocks_csv(&trip_log)?,
                };
                write_output(output.as_deref(), &text)
            }
        }
    }
}

/// literal coordinates first, then the search service
fn build_geocoder(conf: &EldTripConfiguration) -> Result<ChainGeocoder, EldTripAppError> {
    let nominatim = conf
        .geocoding
        .build()
        .map_err(|source| EldTripAppError::Geocode {
            field: String::from("geocoding client"),
            source,
        })?;
    Ok(ChainGeocoder::new(vec![
        Box::new(CoordinateGeocoder),
        Box::new(nominatim),
    ]))
}

fn build_planner(
    conf: &EldTripConfiguration,
) -> Result<TripPlanner<ChainGeocoder, OsrmClient>, EldTripAppError> {
    let client = conf.routing.client_config().build()?;
    let routes = RoadRouteProvider::new(client, conf.routing.retry.clone());
    let stop_planner = HosStopPlanner::new(conf.hos.clone())?;
    Ok(TripPlanner::new(build_geocoder(conf)?, routes, stop_planner))
}

fn plan_route(
    conf: &EldTripConfiguration,
    trip: &TripArgs,
) -> Result<RouteSummary, EldTripAppError> {
    let request = trip.trip_request()?.validate()?;
    let summary = build_planner(conf)?.plan_trip(&request)?;
    log::info!(
        "planned {} -> {} -> {}: {:.1} miles, {} rest stops, {} fuel stops",
        summary.start.display_name(),
        summary.pickup.display_name(),
        summary.dropoff.display_name(),
        summary.total_distance_miles,
        summary.rest_stops.len(),
        summary.fuel_stops.len()
    );
    Ok(summary)
}

fn generate_logs(
    conf: &EldTripConfiguration,
    summary: &RouteSummary,
    start_date: Option<NaiveDate>,
) -> Result<TripLog, EldTripAppError> {
    let generator = DutyLogGenerator::new(conf.log.clone())?;
    let start = start_date.unwrap_or_else(|| Local::now().date_naive());
    Ok(generator.generate(summary, start)?)
}

fn read_json<T: serde::de::DeserializeOwned>(filepath: &str) -> Result<T, EldTripAppError> {
    let contents =
        std::fs::read_to_string(filepath).map_err(|source| EldTripAppError::ReadError {
            filepath: filepath.to_string(),
            source,
        })?;
    serde_json::from_str(&contents).map_err(|source| EldTripAppError::DecodeError {
        filepath: filepath.to_string(),
        source,
    })
}

fn write_geojson(filepath: &str, summary: &RouteSummary) -> Result<(), EldTripAppError> {
    let collection = route_feature_collection(summary);
    let text = serde_json::to_string_pretty(&collection)?;
    write_output(Some(filepath), &text)?;
    log::info!("wrote route GeoJSON to {filepath}");
    Ok(())
}

fn write_output(filepath: Option<&str>, text: &str) -> Result<(), EldTripAppError> {
    match filepath {
        Some(f) => std::fs::write(f, text).map_err(|source| EldTripAppError::WriteError {
            filepath: f.to_string(),
            source,
        }),
        None => {
            println!("{}", text.trim_end());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use eldtrip_core::model::{Coordinate, DutyStatus, TripEndpoint};
    use std::io::Write;

    #[test]
    fn test_parse_plan_trip_arguments() {
        let app = EldTripApp::try_parse_from([
            "eldtrip",
            "plan-trip",
            "--current-location",
            "39.7392, -104.9903",
            "--pickup-location",
            "Omaha, NE",
            "--dropoff-location",
            "Chicago, IL",
            "--current-cycle-hours",
            "4.5",
            "--format",
            "text",
            "--start-date",
            "2024-06-03",
            "--configuration-file",
            "eldtrip.toml",
        ])
        .expect("arguments should parse");
        assert_eq!(app.configuration_file.as_deref(), Some("eldtrip.toml"));
        match app.op {
            EldTripOperation::PlanTrip {
                trip,
                format,
                start_date,
                ..
            } => {
                assert_eq!(format, OutputFormat::Text);
                assert_eq!(start_date.map(|d| d.day()), Some(3));
                let request = trip
                    .trip_request()
                    .expect("request")
                    .validate()
                    .expect("valid request");
                assert_eq!(request.current_location, "39.7392, -104.9903");
                assert_eq!(request.current_cycle_hours, 4.5);
            }
            _ => panic!("expected plan-trip"),
        }
    }

    #[test]
    fn test_missing_location_is_rejected_before_planning() {
        let trip = TripArgs {
            current_location: Some(String::from("Denver, CO")),
            dropoff_location: Some(String::from("Chicago, IL")),
            ..Default::default()
        };
        let result = plan_route(&EldTripConfiguration::default(), &trip);
        assert!(matches!(result, Err(EldTripAppError::MissingField(f)) if f == "pickup_location"));
    }

    #[test]
    fn test_generate_logs_from_summary_file() {
        let here = Coordinate::new(39.0, -100.0);
        let driving = 300.0 / 55.0;
        let summary = RouteSummary {
            start: TripEndpoint::new(None, here),
            pickup: TripEndpoint::new(None, here),
            dropoff: TripEndpoint::new(None, here),
            total_distance_miles: 300.0,
            total_driving_hours: driving,
            total_trip_hours: driving + 2.0,
            rest_stops: vec![],
            fuel_stops: vec![],
            route_coordinates: vec![here],
        };
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        file.write_all(
            serde_json::to_string(&summary)
                .expect("serialize")
                .as_bytes(),
        )
        .expect("write temp file");
        let path = file.path().to_string_lossy().to_string();

        let route: RouteSummary = read_json(&path).expect("summary should decode");
        let start = NaiveDate::from_ymd_opt(2024, 6, 3).expect("valid date");
        let trip_log = generate_logs(&EldTripConfiguration::default(), &route, Some(start))
            .expect("logs should generate");
        assert_eq!(trip_log.days.len(), 1);
        assert_eq!(trip_log.days[0].date, start);
        assert_eq!(trip_log.days[0].status_blocks[0].status, DutyStatus::OnDuty);

        let out = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .expect("temp file");
        let out_path = out.path().to_string_lossy().to_string();
        let op = EldTripOperation::GenerateLogs {
            summary: path,
            format: OutputFormat::Csv,
            start_date: Some(start),
            output: Some(out_path.clone()),
        };
        op.run(&EldTripConfiguration::default())
            .expect("generate-logs should succeed");
        let csv_text = std::fs::read_to_string(&out_path).expect("read csv");
        assert_eq!(csv_text.lines().count(), 6);
        assert!(csv_text.contains("1,2024-06-03,ON,8.0,9.0,1.0"));
    }

    #[test]
    fn test_unreadable_summary_file() {
        let result = read_json::<RouteSummary>("/nonexistent/summary.json");
        assert!(matches!(result, Err(EldTripAppError::ReadError { .. })));
    }
}
