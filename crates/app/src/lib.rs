//! # sensor-provider-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `SensorCatalog` — read-only access to the project's sensors and history
//!   - `CredentialStore` — the credentials a project authenticates with
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AuthService` — token exchange and request authorization
//!   - `SensorService` — list sensors, status, measurements, notifications
//!
//! ## Dependency rule
//! Depends on `sensor-provider-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
