//! Typed models for the JSON objects returned by the Clash of Clans API.
//!
//! Every field is optional: a key the API omitted (or sent as `null`) is `None`,
//! never a zero or an empty string. Models are only built by decoding and
//! expose read-only accessors.

use serde::{Deserialize, Serialize};

mod clan;
mod label;
mod player;

pub use clan::{Clan, ClanMember, ClanModel, Location, WarLeague};
pub use label::{BadgeUrls, IconUrls, Label};
pub use player::{Achievement, LegendStatistics, Player, Season, Troop};

/// Rank of a player inside their clan.
///
/// The wire values are kept exactly as the API sends them. Note that the
/// elder rank is called `admin` upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    /// No particular rank.
    Member,
    /// Elder.
    Admin,
    CoLeader,
    Leader,
}

impl Role {
    /// The literal value used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Admin => "admin",
            Role::CoLeader => "coLeader",
            Role::Leader => "leader",
        }
    }
}

/// Which of the two villages a unit or achievement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Village {
    /// The main village.
    Home,
    /// The builder base, a separate track with its own progression.
    BuilderBase,
}

/// Error body the API sends along with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientError {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl ClientError {
    /// Short machine-readable reason, e.g. `notFound` or `accessDenied.invalidIp`.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
