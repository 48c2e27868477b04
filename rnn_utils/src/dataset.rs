//! Loading of lecture data sets
//!
//! The airline passenger series is the running example: a CSV file with a
//! `Month` column (`YYYY-MM`) and a `Passengers` count. Columns are renamed to
//! a canonical schema and calendar fields are derived on load.

use crate::error::{Result, RnnUtilsError};
use chrono::{Datelike, NaiveDate};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name of the canonical time column
pub const TIME_COLUMN: &str = "time";
/// Name of the derived year column
pub const YEAR_COLUMN: &str = "year";
/// Name of the derived month column
pub const MONTH_COLUMN: &str = "month";

/// Where a data set lives and how its raw columns map onto the canonical schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSource {
    /// Short human readable name, used in messages
    pub description: String,
    /// File name expected in the data directory
    pub file_name: String,
    /// Where to download the file from when it is missing
    pub url: String,
    /// Raw name of the time column
    pub time_column: String,
    /// Raw name of the value column
    pub value_column: String,
    /// Canonical name the value column is renamed to
    pub value_name: String,
    /// Year-month format of the raw time column; day 1 is implied
    pub date_format: String,
}

impl Default for DatasetSource {
    fn default() -> Self {
        Self::airline_passengers()
    }
}

impl DatasetSource {
    /// The monthly airline passenger totals, 1949-1960
    pub fn airline_passengers() -> Self {
        let file_name = "airline-passengers.csv".to_string();
        Self {
            description: "airline passenger data".to_string(),
            url: format!(
                "https://raw.githubusercontent.com/jbrownlee/Datasets/master/{}",
                file_name
            ),
            file_name,
            time_column: "Month".to_string(),
            value_column: "Passengers".to_string(),
            value_name: "passengers".to_string(),
            date_format: "%Y-%m".to_string(),
        }
    }

    /// Expected location of the file inside `dir`
    pub fn path_in<P: AsRef<Path>>(&self, dir: P) -> PathBuf {
        dir.as_ref().join(&self.file_name)
    }

    /// Shell command that fetches the file into the working directory
    pub fn download_command(&self) -> String {
        format!("wget {} --no-check-certificate", self.url)
    }

    fn parse_month(&self, raw: &str) -> Result<NaiveDate> {
        let date = NaiveDate::parse_from_str(
            &format!("{}-01", raw.trim()),
            &format!("{}-%d", self.date_format),
        )?;
        Ok(date)
    }
}

/// A loaded data set in canonical form: `time`, the value column, `year`, `month`
#[derive(Debug, Clone)]
pub struct TimeSeriesDataset {
    df: DataFrame,
    value_column: String,
}

impl TimeSeriesDataset {
    /// Read a CSV file and bring it into canonical form
    pub fn from_csv<P: AsRef<Path>>(path: P, source: &DatasetSource) -> Result<Self> {
        let file = File::open(path)?;
        let df = CsvReader::new(file)
            .infer_schema(None)
            .has_header(true)
            .finish()?;

        Self::from_dataframe(df, source)
    }

    /// Bring a raw DataFrame into canonical form
    pub fn from_dataframe(mut df: DataFrame, source: &DatasetSource) -> Result<Self> {
        for raw in [&source.time_column, &source.value_column] {
            if df.column(raw).is_err() {
                return Err(RnnUtilsError::DataError(format!(
                    "Column '{}' not found in data",
                    raw
                )));
            }
        }

        df.rename(&source.time_column, TIME_COLUMN)?;
        df.rename(&source.value_column, &source.value_name)?;

        let dates = {
            let raw_times = df.column(TIME_COLUMN)?.utf8().map_err(|_| {
                RnnUtilsError::DataError(format!(
                    "Column '{}' must contain text dates",
                    source.time_column
                ))
            })?;
            raw_times
                .into_iter()
                .map(|raw| match raw {
                    Some(raw) => source.parse_month(raw),
                    None => Err(RnnUtilsError::DataError(
                        "Missing value in time column".to_string(),
                    )),
                })
                .collect::<Result<Vec<NaiveDate>>>()?
        };

        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .ok_or_else(|| RnnUtilsError::DataError("Invalid epoch date".to_string()))?;
        let days: Vec<i32> = dates
            .iter()
            .map(|d| d.signed_duration_since(epoch).num_days() as i32)
            .collect();
        let years: Vec<i32> = dates.iter().map(|d| d.year()).collect();
        let months: Vec<i32> = dates.iter().map(|d| d.month() as i32).collect();

        let values = df.column(&source.value_name)?.cast(&DataType::Float64)?;

        df.with_column(Series::new(TIME_COLUMN, days).cast(&DataType::Date)?)?;
        df.with_column(values)?;
        df.with_column(Series::new(YEAR_COLUMN, years))?;
        df.with_column(Series::new(MONTH_COLUMN, months))?;

        Ok(Self {
            df,
            value_column: source.value_name.clone(),
        })
    }

    /// Get the DataFrame
    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    /// Canonical name of the value column
    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// Get the number of rows
    pub fn len(&self) -> usize {
        self.df.height()
    }

    /// Check if the data set is empty
    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// The value column as a signal
    pub fn values(&self) -> Result<Vec<f64>> {
        let col = self.df.column(&self.value_column)?;
        col.f64()?
            .into_iter()
            .map(|v| {
                v.ok_or_else(|| {
                    RnnUtilsError::DataError(format!(
                        "Missing value in column '{}'",
                        self.value_column
                    ))
                })
            })
            .collect()
    }

    /// Calendar date of each row
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        let col = self.df.column(TIME_COLUMN)?;
        Ok(col.date()?.as_date_iter().flatten().collect())
    }

    /// Year of each row
    pub fn years(&self) -> Result<Vec<i32>> {
        self.int_column(YEAR_COLUMN)
    }

    /// Month (1-12) of each row
    pub fn months(&self) -> Result<Vec<i32>> {
        self.int_column(MONTH_COLUMN)
    }

    fn int_column(&self, name: &str) -> Result<Vec<i32>> {
        let col = self.df.column(name)?;
        Ok(col.i32()?.into_iter().flatten().collect())
    }
}

/// Load a data set from `dir`, failing with `MissingResource` when the file is absent
pub fn load<P: AsRef<Path>>(source: &DatasetSource, dir: P) -> Result<TimeSeriesDataset> {
    let path = source.path_in(dir);
    if !path.exists() {
        warn!(path = %path.display(), "data set not found");
        return Err(RnnUtilsError::MissingResource {
            path,
            url: source.url.clone(),
        });
    }

    let dataset = TimeSeriesDataset::from_csv(&path, source)?;
    info!(path = %path.display(), rows = dataset.len(), "loaded data set");
    Ok(dataset)
}

/// Load a data set from `dir`, terminating the process when that fails.
///
/// This is an interactive entry point: when the file is missing it prints the
/// command that downloads it and exits with status 1. Use [`load`] for a
/// recoverable error instead.
pub fn load_or_exit<P: AsRef<Path>>(source: &DatasetSource, dir: P) -> TimeSeriesDataset {
    match load(source, dir) {
        Ok(dataset) => dataset,
        Err(RnnUtilsError::MissingResource { .. }) => {
            println!(
                "Download {}: '{}'",
                source.description,
                source.download_command()
            );
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to load {}: {}", source.file_name, e);
            std::process::exit(1);
        }
    }
}

/// Load and reformat the airline passenger data set from the working directory
pub fn airlines() -> TimeSeriesDataset {
    load_or_exit(&DatasetSource::airline_passengers(), ".")
}
