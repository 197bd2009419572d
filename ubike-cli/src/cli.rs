use anyhow::Context;
use clap::{Parser, Subcommand};

use ubike_core::{BikeClient, BikeStore, Credentials, Fetched, FixedLocation, Position};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "ubike", version, about = "Bike-sharing station viewer")]
pub struct Cli {
    /// Device latitude for nearby queries; defaults to Taipei when absent.
    #[arg(long, requires = "lon", global = true)]
    pub lat: Option<f64>,

    /// Device longitude for nearby queries; defaults to Taipei when absent.
    #[arg(long, requires = "lat", global = true)]
    pub lon: Option<f64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List rental stations, near the current position or for a city.
    Stations {
        /// City code, e.g. "TPE"; omit to search near the current position.
        #[arg(long)]
        city: Option<String>,
    },

    /// List real-time bike/dock availability.
    Availability {
        /// City code, e.g. "TPE"; omit to search near the current position.
        #[arg(long)]
        city: Option<String>,
    },

    /// List the cities the service covers.
    Cities,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let credentials = Credentials::from_env().context(
            "Credentials are required to query the gateway.\n\
             Hint: export TDX_APP_ID and TDX_APP_KEY (a .env file works too).",
        )?;
        let mut store = BikeStore::new(BikeClient::new(credentials));

        // The flags stand in for the platform's position query; on a device
        // this would be the geolocation capability instead.
        if let (Some(latitude), Some(longitude)) = (self.lat, self.lon) {
            let device = FixedLocation(Position { latitude, longitude });
            store
                .locate(&device)
                .await
                .context("Failed to read the device position")?;
        }

        match self.command {
            Command::Stations { city } => print_fetched(store.station_data(city.as_deref()).await),
            Command::Availability { city } => {
                print_fetched(store.available_data(city.as_deref()).await)
            }
            Command::Cities => {
                println!("{}", serde_json::to_string_pretty(&store.cities())?);
                Ok(())
            }
        }
    }
}

fn print_fetched(fetched: Fetched) -> anyhow::Result<()> {
    match fetched {
        Fetched::Records(records) => {
            println!("{}", serde_json::to_string_pretty(&records)?);
            Ok(())
        }
        Fetched::Empty => {
            println!("No records found.");
            Ok(())
        }
        Fetched::Failed(err) => Err(err.into()),
    }
}
