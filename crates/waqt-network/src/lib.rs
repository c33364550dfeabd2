//! Network collaborators for waqt.
//!
//! IP geolocation (ipgeolocation.io) and daily prayer timings (Aladhan).
//! Requests use a fixed timeout and are never retried.

pub mod config;
pub mod geo;
pub mod http;
pub mod timings;

pub use config::ProviderConfig;
pub use geo::IpGeolocationClient;
pub use timings::AladhanClient;
