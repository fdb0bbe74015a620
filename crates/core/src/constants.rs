//! Clinical rule constants used throughout the RSG core crate.
//!
//! This module contains the fixed thresholds of the screening rule table to
//! ensure consistency across the codebase and make maintenance easier.

/// Risk scores strictly above this value classify as HIGH.
///
/// A score of exactly 0.7 is MODERATE: the bound is strict-greater.
pub const HIGH_RISK_THRESHOLD: f64 = 0.7;

/// Risk scores strictly above this value (and not HIGH) classify as MODERATE.
///
/// A score of exactly 0.4 is LOW: the bound is strict-greater.
pub const MODERATE_RISK_THRESHOLD: f64 = 0.4;

/// Heart rates strictly above this (bpm) trigger the tachycardia advisory.
pub const TACHYCARDIA_THRESHOLD_BPM: u16 = 100;

/// Temperatures strictly above this (°C) trigger the fever advisory.
pub const FEVER_THRESHOLD_CELSIUS: f64 = 37.5;
