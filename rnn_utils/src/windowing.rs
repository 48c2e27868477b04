//! Lookback windows for sequence models
//!
//! [`make_xy`] turns a flat signal into supervised-learning pairs: each sample
//! is a window of `window_size` past observations and the target is the value
//! immediately following it.

use crate::error::{Result, RnnUtilsError};
use ndarray::{Array1, Array2, Array3, ArrayView1, Axis};
use tracing::debug;

/// Number of past observations per sample when the caller has no preference
pub const DEFAULT_WINDOW_SIZE: usize = 1;

/// Distance between consecutive targets when the caller has no preference
pub const DEFAULT_STEP_SIZE: usize = 1;

/// Windows, targets and the source indices they were taken from
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSampleSet {
    /// Lookback windows shaped `(samples, window_size, 1)`
    pub x: Array3<f64>,
    /// Target following each window
    pub y: Array1<f64>,
    /// Source indices composing each window, shaped `(samples, window_size)`
    pub x_indices: Array2<usize>,
    /// Source index of each target
    pub y_indices: Array1<usize>,
}

impl WindowSampleSet {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// True when the signal was too short to produce a single sample
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Width of each lookback window
    pub fn window_size(&self) -> usize {
        self.x.shape()[1]
    }

    /// The `i`-th lookback window as a flat view
    pub fn window(&self, i: usize) -> Option<ArrayView1<'_, f64>> {
        if i >= self.len() {
            return None;
        }
        Some(self.x.index_axis(Axis(0), i).index_axis_move(Axis(1), 0))
    }
}

/// Create X, Y data pairs from a dataset vector.
///
/// Target indices run `window_size, window_size + step_size, ...` while they
/// stay inside `data`. A window offset starts at zero and advances by
/// `step_size` once per target, so window `i` covers
/// `data[i * step_size .. i * step_size + window_size]`.
///
/// A signal no longer than `window_size` yields an empty sample set.
///
/// # Examples
///
/// ```
/// use rnn_utils::windowing::make_xy;
///
/// let samples = make_xy(&[10.0, 20.0, 30.0, 40.0], 2, 1).unwrap();
/// assert_eq!(samples.y.to_vec(), vec![30.0, 40.0]);
/// assert_eq!(samples.y_indices.to_vec(), vec![2, 3]);
/// assert_eq!(samples.x.shape(), &[2, 2, 1]);
/// ```
pub fn make_xy(data: &[f64], window_size: usize, step_size: usize) -> Result<WindowSampleSet> {
    if data.is_empty() {
        return Err(RnnUtilsError::InvalidInput(
            "Cannot build windows from an empty vector".to_string(),
        ));
    }
    if window_size == 0 {
        return Err(RnnUtilsError::InvalidInput(
            "Window size must be greater than zero".to_string(),
        ));
    }
    if step_size == 0 {
        return Err(RnnUtilsError::InvalidInput(
            "Step size must be greater than zero".to_string(),
        ));
    }

    let y_indices: Vec<usize> = (window_size..data.len()).step_by(step_size).collect();
    let samples = y_indices.len();

    let mut x = Array3::zeros((samples, window_size, 1));
    let mut x_indices = Array2::zeros((samples, window_size));
    let mut y = Array1::zeros(samples);

    // One offset advance per target keeps windows and targets aligned.
    let mut j = 0;
    for (i, &target) in y_indices.iter().enumerate() {
        for t in 0..window_size {
            x[[i, t, 0]] = data[j + t];
            x_indices[[i, t]] = j + t;
        }
        y[i] = data[target];
        j += step_size;
    }

    debug!(samples, window_size, step_size, "built lookback windows");

    Ok(WindowSampleSet {
        x,
        y,
        x_indices,
        y_indices: Array1::from(y_indices),
    })
}
