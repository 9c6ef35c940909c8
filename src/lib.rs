#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! oncocalc: terminal intake form for a remote breast cancer recurrence
//! prediction service.
//!
//! The form values are encoded into the backend's numeric feature vector
//! ([`model::encode()`]), posted as JSON ([`client::PredictionClient`]) and the
//! returned class probabilities are shown in the TUI.

pub mod client;
pub mod config;
pub mod model;
pub mod tui;
