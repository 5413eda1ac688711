//! Hand landmark types for per-frame symbol prediction.
//!
//! This crate provides the input side of the prediction pipeline:
//!
//! - [`Landmark`] - A 3-D keypoint `(x, y, z)`
//! - [`LandmarkKind`] - Absolute or normalized coordinate space
//! - [`LandmarkSet`] - Ordered landmarks for a single frame
//! - [`LandmarkInput`] - A set tagged with exactly one coordinate space
//! - [`LandmarkPacket`] - A timestamped input for one frame
//!
//! # Layer 0 Crate
//!
//! This crate has no runtime dependencies beyond `serde` and `thiserror`. It
//! can be shared by landmark producers, classifiers, and dataset tools.
//!
//! # Example
//!
//! ```
//! use landmark_types::{
//!     HAND_LANDMARK_COUNT, LandmarkInput, LandmarkPacket, LandmarkSet, Timestamp,
//! };
//!
//! let set = LandmarkSet::zeros(HAND_LANDMARK_COUNT);
//! let packet = LandmarkPacket::new(Timestamp(0), LandmarkInput::Normalized(set));
//!
//! assert_eq!(packet.landmarks.landmarks().len(), 21);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod landmark;
mod packet;
mod set;

pub use landmark::{Landmark, LandmarkKind};
pub use packet::{LandmarkInput, LandmarkPacket, Timestamp};
pub use set::{HAND_LANDMARK_COUNT, LandmarkSet};

pub use error::{LandmarkError, Result};
