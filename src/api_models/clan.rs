use serde::{Deserialize, Serialize};

use super::{BadgeUrls, Label, Role};
use crate::decode::{self, ModelError};

/// Clan summary embedded in a player profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clan_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge_urls: Option<BadgeUrls>,
}

impl ClanModel {
    /// Unique identifier of the clan, in the form `#A0B1C2`.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn clan_level(&self) -> Option<i32> {
        self.clan_level
    }

    pub fn badge_urls(&self) -> Option<&BadgeUrls> {
        self.badge_urls.as_ref()
    }
}

/// A full clan profile, as returned by `GET /clans/{clanTag}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Clan {
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    clan_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge_urls: Option<BadgeUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clan_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clan_points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clan_versus_points: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    war_frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    war_win_streak: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    war_wins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    war_ties: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    war_losses: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_war_log_public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    war_league: Option<WarLeague>,
    #[serde(skip_serializing_if = "Option::is_none")]
    members: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    member_list: Option<Vec<ClanMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<Label>>,
}

impl Clan {
    /// Decodes a clan profile from the raw response body.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        decode::from_str(json)
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Join policy: `open`, `inviteOnly` or `closed`. Kept as the raw API string.
    pub fn clan_type(&self) -> Option<&str> {
        self.clan_type.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn badge_urls(&self) -> Option<&BadgeUrls> {
        self.badge_urls.as_ref()
    }

    pub fn clan_level(&self) -> Option<i32> {
        self.clan_level
    }

    /// Clan points computed by the API from the main village trophies of the members.
    pub fn clan_points(&self) -> Option<i32> {
        self.clan_points
    }

    /// Builder base counterpart of [`clan_points`](Self::clan_points).
    pub fn clan_versus_points(&self) -> Option<i32> {
        self.clan_versus_points
    }

    /// Main village trophies needed to join.
    pub fn required_trophies(&self) -> Option<i32> {
        self.required_trophies
    }

    /// Stated war frequency such as `always` or `moreThanOncePerWeek`.
    pub fn war_frequency(&self) -> Option<&str> {
        self.war_frequency.as_deref()
    }

    pub fn war_win_streak(&self) -> Option<i32> {
        self.war_win_streak
    }

    pub fn war_wins(&self) -> Option<i32> {
        self.war_wins
    }

    /// Only sent when the war log is public.
    pub fn war_ties(&self) -> Option<i32> {
        self.war_ties
    }

    /// Only sent when the war log is public.
    pub fn war_losses(&self) -> Option<i32> {
        self.war_losses
    }

    pub fn is_war_log_public(&self) -> Option<bool> {
        self.is_war_log_public
    }

    pub fn war_league(&self) -> Option<&WarLeague> {
        self.war_league.as_ref()
    }

    /// Member count as reported by the API.
    pub fn members(&self) -> Option<i32> {
        self.members
    }

    /// Members ordered by clan rank.
    pub fn member_list(&self) -> Option<&[ClanMember]> {
        self.member_list.as_deref()
    }

    pub fn labels(&self) -> Option<&[Label]> {
        self.labels.as_deref()
    }
}

/// One entry of a clan's member list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    league: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    versus_trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clan_rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_clan_rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    donations: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    donations_received: Option<i32>,
}

impl ClanMember {
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// [`Role::Admin`] is the elder rank.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn exp_level(&self) -> Option<i32> {
        self.exp_level
    }

    pub fn league(&self) -> Option<&Label> {
        self.league.as_ref()
    }

    pub fn trophies(&self) -> Option<i32> {
        self.trophies
    }

    pub fn versus_trophies(&self) -> Option<i32> {
        self.versus_trophies
    }

    /// Position in the clan, ordered by trophies.
    pub fn clan_rank(&self) -> Option<i32> {
        self.clan_rank
    }

    pub fn previous_clan_rank(&self) -> Option<i32> {
        self.previous_clan_rank
    }

    /// Troops donated during the current season.
    pub fn donations(&self) -> Option<i32> {
        self.donations
    }

    pub fn donations_received(&self) -> Option<i32> {
        self.donations_received
    }
}

/// Country or region a clan declares.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_country: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<String>,
}

impl Location {
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// `false` for regions such as `International`.
    pub fn is_country(&self) -> Option<bool> {
        self.is_country
    }

    /// Two-letter ISO code, only sent for countries.
    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }
}

/// Clan war league the clan is placed in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct WarLeague {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl WarLeague {
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
