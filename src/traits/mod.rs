//! Core traits for the BER engine
//!
//! These traits define mathematical behavior, not any particular pulse
//! family. Each trait represents one orthogonal axis of configuration.

mod pulse_shape;

pub use pulse_shape::PulseShape;
