//! Min-max scaling and train/test splitting
//!
//! A [`MinMaxScaler`] is fitted once over the full signal and then reused for
//! the train segment, the test segment and every model prediction, so all of
//! them live on one consistent scale.

use crate::error::{Result, RnnUtilsError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fraction of the signal used for training when the caller has no preference
pub const DEFAULT_TRAIN_FRACTION: f64 = 0.67;

/// Linear rescaling of values from an observed `[min, max]` into a target range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinMaxScaler {
    feature_range: (f64, f64),
    data_min: f64,
    data_max: f64,
}

impl MinMaxScaler {
    /// Fit a scaler mapping the observed range of `data` onto `feature_range`
    pub fn fit(data: &[f64], feature_range: (f64, f64)) -> Result<Self> {
        if data.is_empty() {
            return Err(RnnUtilsError::InvalidInput(
                "Cannot fit a scaler on an empty vector".to_string(),
            ));
        }

        if data.iter().any(|v| !v.is_finite()) {
            return Err(RnnUtilsError::InvalidInput(
                "Cannot fit a scaler on non-finite values".to_string(),
            ));
        }

        let (range_min, range_max) = feature_range;
        if !range_min.is_finite() || !range_max.is_finite() || range_min > range_max {
            return Err(RnnUtilsError::InvalidInput(format!(
                "Invalid feature range ({}, {})",
                range_min, range_max
            )));
        }

        let data_min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(Self {
            feature_range,
            data_min,
            data_max,
        })
    }

    /// Fit on `data` and return the transformed vector together with the scaler
    pub fn fit_transform(data: &[f64], feature_range: (f64, f64)) -> Result<(Vec<f64>, Self)> {
        let scaler = Self::fit(data, feature_range)?;
        let transformed = scaler.transform(data);
        Ok((transformed, scaler))
    }

    /// Target range of the forward transform
    pub fn feature_range(&self) -> (f64, f64) {
        self.feature_range
    }

    /// Smallest value seen while fitting
    pub fn data_min(&self) -> f64 {
        self.data_min
    }

    /// Largest value seen while fitting
    pub fn data_max(&self) -> f64 {
        self.data_max
    }

    // Constant signals get a unit range so they map onto the range minimum.
    fn data_range(&self) -> f64 {
        let range = self.data_max - self.data_min;
        if range == 0.0 {
            1.0
        } else {
            range
        }
    }

    fn scale(&self) -> f64 {
        (self.feature_range.1 - self.feature_range.0) / self.data_range()
    }

    /// Map a single raw value into the target range
    pub fn transform_value(&self, value: f64) -> f64 {
        (value - self.data_min) * self.scale() + self.feature_range.0
    }

    /// Map a single scaled value back into original units
    pub fn inverse_transform_value(&self, value: f64) -> f64 {
        let scale = self.scale();
        if scale == 0.0 {
            // Degenerate target range: every input collapsed onto one point.
            return self.data_min;
        }
        (value - self.feature_range.0) / scale + self.data_min
    }

    /// Map raw values into the target range
    pub fn transform(&self, data: &[f64]) -> Vec<f64> {
        data.iter().map(|&v| self.transform_value(v)).collect()
    }

    /// Map scaled values back into original units
    pub fn inverse_transform(&self, data: &[f64]) -> Vec<f64> {
        data.iter().map(|&v| self.inverse_transform_value(v)).collect()
    }
}

/// Scaled train and test segments plus the scaler that produced them
#[derive(Debug, Clone)]
pub struct TrainTestSplit {
    /// Leading `floor(len * train_fraction)` scaled samples
    pub train: Vec<f64>,
    /// Remaining scaled samples
    pub test: Vec<f64>,
    /// Scaler fitted on the whole signal; keep it for inverse transforms
    pub scaler: MinMaxScaler,
}

/// Create train and test data sets from a data vector.
///
/// With `rescale` the data is mapped onto `[0, 1]`; without it the scaler maps
/// the observed range onto itself, so values pass through unchanged but the
/// caller still gets a scaler to hand to the plotting functions.
///
/// # Examples
///
/// ```
/// use rnn_utils::scaling::make_train_test;
///
/// let split = make_train_test(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.6, true).unwrap();
/// assert_eq!(split.train.len(), 3);
/// assert_eq!(split.test.len(), 2);
/// assert_eq!(split.train[0], 0.0);
/// ```
pub fn make_train_test(data: &[f64], train_fraction: f64, rescale: bool) -> Result<TrainTestSplit> {
    if data.is_empty() {
        return Err(RnnUtilsError::InvalidInput(
            "Cannot split an empty vector".to_string(),
        ));
    }

    if !(train_fraction > 0.0 && train_fraction <= 1.0) {
        return Err(RnnUtilsError::InvalidInput(format!(
            "Train fraction must be in (0, 1], got {}",
            train_fraction
        )));
    }

    let split = (data.len() as f64 * train_fraction).floor() as usize;

    let feature_range = if rescale {
        (0.0, 1.0)
    } else {
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    };

    let (scaled, scaler) = MinMaxScaler::fit_transform(data, feature_range)?;
    let test = scaled[split..].to_vec();
    let mut train = scaled;
    train.truncate(split);

    debug!(
        train = train.len(),
        test = test.len(),
        rescale,
        "split signal into train and test segments"
    );

    Ok(TrainTestSplit {
        train,
        test,
        scaler,
    })
}
