//! # RNN Lecture
//!
//! Workspace facade for the recurrent neural network lecture helpers. All
//! functionality lives in the [`rnn_utils`] crate and is re-exported here.
//!
//! ## Example
//!
//! ```
//! use rnn_lecture_workspace::make_xy;
//!
//! let samples = make_xy(&[10.0, 20.0, 30.0, 40.0, 50.0, 60.0], 2, 1).unwrap();
//! assert_eq!(samples.y_indices.to_vec(), vec![2, 3, 4, 5]);
//! ```

pub use rnn_utils::*;
