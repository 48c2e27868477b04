//! # RNN Utils
//!
//! Helpers for teaching time series forecasting with recurrent neural networks.
//!
//! ## Features
//!
//! - Min-max scaling with a reusable scaler and contiguous train/test splits
//! - Lookback windows shaped `(samples, window, 1)` for sequence models
//! - Prediction charts with per-series RMSE in the legend
//! - Training history charts for loss and accuracy style metrics
//! - Loading of the airline passenger data set
//!
//! Model definition and training are left to whichever framework the lecture
//! uses; this crate only prepares its inputs and displays its outputs.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rnn_utils::dataset::airlines;
//! use rnn_utils::plot::{plot_pred, PredictionPlotOptions, PredictionSeries, SvgSurface};
//! use rnn_utils::scaling::make_train_test;
//! use rnn_utils::windowing::make_xy;
//!
//! # fn main() -> rnn_utils::Result<()> {
//! // Load data
//! let data = airlines();
//! let signal = data.values()?;
//!
//! // Scale and split
//! let split = make_train_test(&signal, 0.67, true)?;
//!
//! // Build lookback windows
//! let train = make_xy(&split.train, 12, 1)?;
//! let test = make_xy(&split.test, 12, 1)?;
//!
//! // ... train a model on train.x / train.y and predict ...
//! # let train_pred = train.y.to_vec();
//! # let test_pred = test.y.to_vec();
//!
//! // Plot predictions in original units
//! let series = [
//!     ("Train", Some(PredictionSeries::from_samples(train_pred, &split.train, &train))),
//!     ("Test", Some(PredictionSeries::from_samples(test_pred, &split.test, &test))),
//! ];
//! plot_pred(
//!     &series,
//!     Some(&split.scaler),
//!     &PredictionPlotOptions::default(),
//!     &mut SvgSurface::stdout(),
//! )?;
//! # Ok(())
//! # }
//! ```

pub mod dataset;
pub mod error;
pub mod history;
pub mod metrics;
pub mod plot;
pub mod scaling;
pub mod windowing;

// Re-export commonly used types
pub use crate::dataset::{airlines, DatasetSource, TimeSeriesDataset};
pub use crate::error::{Result, RnnUtilsError};
pub use crate::history::{History, HistorySource};
pub use crate::plot::{plot_history, plot_loss_acc, plot_pred};
pub use crate::scaling::{make_train_test, MinMaxScaler, TrainTestSplit};
pub use crate::windowing::{make_xy, WindowSampleSet};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
