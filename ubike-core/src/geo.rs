use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use crate::model::Position;

/// Why the platform could not produce a position. Mirrors the failure codes
/// of single-shot platform geolocation queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("permission to read the device position was denied")]
    PermissionDenied,

    #[error("the device position is currently unavailable")]
    PositionUnavailable,

    #[error("timed out waiting for the device position")]
    Timeout,
}

/// Single-shot access to the platform position.
///
/// Implementations do not retry, and concurrent queries are not deduplicated:
/// each call reaches the platform once and reports whatever it said.
#[async_trait]
pub trait LocationProvider: Send + Sync + Debug {
    async fn current_position(&self) -> Result<Position, GeoError>;
}

/// A position known up front, e.g. parsed from CLI flags. Doubles as the
/// success-path provider in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Position);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn current_position(&self) -> Result<Position, GeoError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_location_resolves_with_its_position() {
        let provider = FixedLocation(Position { latitude: 24.1, longitude: 120.6 });

        let pos = provider.current_position().await.expect("fixed location cannot fail");
        assert_eq!(pos, Position { latitude: 24.1, longitude: 120.6 });
    }
}
