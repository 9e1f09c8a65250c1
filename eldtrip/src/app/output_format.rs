use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// pretty-printed JSON
    #[default]
    Json,
    /// human-readable report and log sheets
    Text,
    /// one row per duty-status block
    Csv,
}
