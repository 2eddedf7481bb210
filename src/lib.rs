//! Builds request links for the Blizzard (WoW, Diablo III, StarCraft II,
//! OAuth) and Riot League of Legends REST APIs. Nothing here talks to the
//! network: every builder returns the URL for the caller to fetch, or `None`
//! when its arguments cannot form a valid link.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod region;
mod validate;

pub use api::blizzard::Blizzard;
pub use api::riot::LeagueOfLegends;
pub use config::{BlizzardConfig, Config, RiotConfig};
pub use error::{Error, Result};
pub use region::{resolve, ConnectionContext, Credentials, Platform, Region};
