use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::geometry::{Point, Rect};

#[derive(Parser, Debug)]
#[command(
    name = "spatio-geo",
    version,
    about = "Query and clip a GeoJSON file with an in-memory R-tree",
    long_about = "spatio-geo loads a GeoJSON file into an in-memory R-tree and runs one query over it.\nBounds are given as MIN_X MIN_Y MAX_X MAX_Y, results are printed as text or GeoJSON."
)]
pub struct CliArgs {
    /// GeoJSON file to load
    pub file: PathBuf,

    /// Configuration file
    #[arg(short, long, default_value = "spatio.toml")]
    pub config: String,

    /// Log level (overrides config file)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print results as GeoJSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Feature count, bounds and geometry kinds
    Stats,

    /// Features intersecting the bounds
    Search {
        #[arg(long, num_args = 4, value_names = ["MIN_X", "MIN_Y", "MAX_X", "MAX_Y"], allow_negative_numbers = true)]
        bounds: Vec<f64>,
    },

    /// Features entirely inside the bounds
    Within {
        #[arg(long, num_args = 4, value_names = ["MIN_X", "MIN_Y", "MAX_X", "MAX_Y"], allow_negative_numbers = true)]
        bounds: Vec<f64>,
    },

    /// Nearest features to a point
    Nearby {
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        point: Vec<f64>,

        /// Number of features to return
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Clip every feature to the bounds
    Clip {
        #[arg(long, num_args = 4, value_names = ["MIN_X", "MIN_Y", "MAX_X", "MAX_Y"], allow_negative_numbers = true)]
        bounds: Vec<f64>,
    },
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> Result<(), String> {
        match &self.command {
            Command::Search { bounds } | Command::Within { bounds } | Command::Clip { bounds } => {
                bounds_rect(bounds).map(|_| ())
            }
            Command::Nearby { point, limit } => {
                if *limit == 0 {
                    return Err("Limit must be greater than 0".to_string());
                }
                query_point(point).map(|_| ())
            }
            Command::Stats => Ok(()),
        }
    }
}

/// `MIN_X MIN_Y MAX_X MAX_Y` 转成矩形
pub fn bounds_rect(values: &[f64]) -> Result<Rect, String> {
    let [min_x, min_y, max_x, max_y] = values else {
        return Err(format!("Bounds need 4 numbers, got {}", values.len()));
    };
    if min_x > max_x || min_y > max_y {
        return Err(format!(
            "Bounds min ({} {}) is greater than max ({} {})",
            min_x, min_y, max_x, max_y
        ));
    }
    Ok(Rect::new(*min_x, *min_y, *max_x, *max_y))
}

pub fn query_point(values: &[f64]) -> Result<Point, String> {
    let [x, y] = values else {
        return Err(format!("Point needs 2 numbers, got {}", values.len()));
    };
    Ok(Point::new(*x, *y))
}
