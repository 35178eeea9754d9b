//! # sensor-provider-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **sensor provider JSON API** (`/sensors-auth`, `/sensors`,
//!   `/sensors/{id}/status`, `/sensors/{id}/measurements`,
//!   `/sensors/{id}/notifications`)
//! - Guard protected routes with the `X-ProjectId` / bearer token check
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `sensor-provider-app` (for port traits and services) and
//! `sensor-provider-domain` (for domain types used in request/response
//! mapping). Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod guard;
pub mod router;
pub mod state;
