//! # sensor-provider-domain
//!
//! Pure domain model for the mock sensor provider.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Projects** (a named set of sensors owned by one client)
//! - Define **Sensors** (status snapshot of a single device)
//! - Define **Measurements** (time-ordered readings of one sensor)
//! - Define **Credentials** (the project / refresh token / access token triple)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod credentials;
pub mod measurement;
pub mod project;
pub mod reading;
pub mod sensor;
