//! # UFR Insight Backend
//!
//! Ultrafiltration Rate (UFR) computation and classification engine for
//! dialysis treatments.
//!
//! Given fluid removed (ml), patient dry weight (kg) and treatment duration
//! (hours), the engine validates the inputs, computes the UFR in ml/kg/hr,
//! classifies it against the 13 ml/kg/hr safety threshold, persists the
//! result and rebuilds the plot-ready history trend.
//!
//! ## Architecture
//!
//! - [`models`]: Domain types (inputs, records, remarks, feedback)
//! - [`services`]: Validator, calculator, classifier, history aggregator and
//!   the calculation pipeline
//! - [`db`]: Repository pattern and persistence layer
//! - [`routes`]: Route-specific response types
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use ufr_insight::services::{calculator, classifier, validator};
//!
//! let input = validator::validate("2500", "70", "4").unwrap();
//! let ufr = calculator::compute(&input);
//! assert_eq!(ufr, 8.93);
//! assert!(classifier::classify(ufr).is_safe());
//! ```

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
