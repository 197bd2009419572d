//! Core library for the `ubike` station viewer.
//!
//! This crate defines:
//! - Credential handling for the PTX/TDX open-data gateway
//! - HMAC-SHA1 request signing and the authenticated HTTP client
//! - The viewer state store and its fetch actions
//! - A trait seam over platform geolocation
//!
//! It is used by `ubike-cli`, but can also be reused by other front ends.

pub mod cities;
pub mod client;
pub mod config;
pub mod geo;
pub mod model;
pub mod sign;
pub mod store;

pub use client::{BikeClient, DEFAULT_BASE_URL, FetchError};
pub use config::{ConfigError, Credentials};
pub use geo::{FixedLocation, GeoError, LocationProvider};
pub use model::{CityRecord, Position};
pub use sign::{AuthHeader, auth_header};
pub use store::{BikeStore, Fetched, NEARBY_RADIUS_M};
