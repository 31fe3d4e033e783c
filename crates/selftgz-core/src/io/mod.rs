//! I/O utilities for the extraction pipeline.
//!
//! This module provides reader wrappers used between the decompression and
//! tar parsing stages.

pub mod tracking;

pub use tracking::TrackingReader;
