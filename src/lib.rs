//! Typed models for the Clash of Clans API, the decode entry points that build
//! them from response bodies, and a thin async client.

pub mod api_client;
pub mod api_models;
pub mod config;
pub mod decode;

pub use api_client::{ApiError, ClashClient};
pub use api_models::{Clan, Player};
pub use config::Config;
pub use decode::ModelError;
