//! Viewer state and the actions the UI calls.
//!
//! The store owns the one piece of mutable client state, the current
//! position, and fans the read actions out to the gateway. Geolocation
//! failures are loud (the UI must react, e.g. by prompting for permission),
//! data-fetch failures are quiet (logged, then handed back as a typed
//! outcome so the UI can still render something sensible). Keep that
//! asymmetry when touching this module.

use log::warn;
use serde_json::Value;

use crate::{
    cities,
    client::{BikeClient, FetchError},
    geo::{GeoError, LocationProvider},
    model::{CityRecord, Position},
};

/// Nearby-search radius in meters, per the gateway's spatial-filter
/// convention. Fixed by design.
pub const NEARBY_RADIUS_M: u32 = 500;

/// Page-size cap for city-scoped queries.
const PAGE_SIZE: u32 = 30;

/// Outcome of a data-fetch action.
///
/// Fetch actions never return `Err`; a failure is logged and carried here,
/// so callers can tell "nothing there" from "fetch broke" without growing a
/// hard error path.
#[derive(Debug)]
pub enum Fetched {
    Records(Vec<Value>),
    Empty,
    Failed(FetchError),
}

impl Fetched {
    /// The fetched records, or an empty slice when there are none. For
    /// callers that do not care why.
    pub fn records(&self) -> &[Value] {
        match self {
            Fetched::Records(records) => records,
            Fetched::Empty | Fetched::Failed(_) => &[],
        }
    }
}

/// The station viewer's client-side state.
#[derive(Debug)]
pub struct BikeStore {
    client: BikeClient,
    position: Position,
}

impl BikeStore {
    /// Start from the default position; call [`Self::locate`] to commit a
    /// real device position.
    pub fn new(client: BikeClient) -> Self {
        Self { client, position: Position::default() }
    }

    pub fn current_position(&self) -> Position {
        self.position
    }

    /// Unconditional replace. A position is always committed whole, never
    /// one coordinate at a time.
    pub fn set_current_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Query the platform position and commit it on success. The platform
    /// error propagates unchanged on failure, and the stored position is
    /// left as it was.
    pub async fn locate(
        &mut self,
        provider: &dyn LocationProvider,
    ) -> Result<Position, GeoError> {
        let position = provider.current_position().await?;
        self.set_current_position(position);
        Ok(position)
    }

    /// Rental stations, scoped to `city` when given, otherwise near the
    /// current position.
    pub async fn station_data(&self, city: Option<&str>) -> Fetched {
        self.fetch("Station", city).await
    }

    /// Real-time bike/dock availability, same scoping as
    /// [`Self::station_data`].
    pub async fn available_data(&self, city: Option<&str>) -> Fetched {
        self.fetch("Availability", city).await
    }

    /// The service-area city list, served from the embedded table. No
    /// network involved.
    pub fn cities(&self) -> Vec<CityRecord> {
        cities::all()
    }

    async fn fetch(&self, resource: &str, city: Option<&str>) -> Fetched {
        let path = match city {
            Some(code) => format!("{resource}/City/{code}?$top={PAGE_SIZE}"),
            None => {
                let Position { latitude, longitude } = self.position;
                format!(
                    "{resource}/NearBy?$spatialFilter=nearby({latitude},{longitude},{NEARBY_RADIUS_M})"
                )
            }
        };

        match self.client.get::<Vec<Value>>(&path).await {
            Ok(records) if records.is_empty() => Fetched::Empty,
            Ok(records) => Fetched::Records(records),
            Err(err) => {
                warn!("{resource} fetch failed: {err}");
                Fetched::Failed(err)
            }
        }
    }
}
