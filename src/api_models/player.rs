use serde::{Deserialize, Serialize};

use super::{ClanModel, Label, Role, Village};
use crate::decode::{self, ModelError};

/// A player profile, as returned by `GET /players/{playerTag}`.
///
/// Main village and builder base statistics are separate tracks: the `versus_*`
/// and `builder_hall_level` accessors only ever describe the builder base.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(skip_serializing_if = "Option::is_none")]
    clan: Option<ClanModel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    league: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attack_wins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defense_wins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    town_hall_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    town_hall_weapon_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    versus_battle_wins: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    legend_statistics: Option<LegendStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    troops: Option<Vec<Troop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    heroes: Option<Vec<Troop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    spells: Option<Vec<Troop>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    labels: Option<Vec<Label>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exp_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    donations: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    donations_received: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    builder_hall_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    versus_trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_versus_trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    war_stars: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    achievements: Option<Vec<Achievement>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    versus_battle_win_count: Option<i32>,
}

impl Player {
    /// Decodes a player profile from the raw response body.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        decode::from_str(json)
    }

    /// The clan the player belongs to. `None` when the player is clanless.
    pub fn clan(&self) -> Option<&ClanModel> {
        self.clan.as_ref()
    }

    /// The league matching the player's current trophy count.
    pub fn league(&self) -> Option<&Label> {
        self.league.as_ref()
    }

    /// The player's rank in their clan.
    ///
    /// [`Role::Admin`] is the elder rank; the API calls it `admin`.
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    /// Attacks won during the current season. An attack is won when it earns
    /// at least one star.
    ///
    /// Only main village attacks are counted, clan war attacks are not.
    pub fn attack_wins(&self) -> Option<i32> {
        self.attack_wins
    }

    /// Defenses won during the current season. A defense is won when the
    /// attacker earned no star.
    ///
    /// Only main village defenses are counted, clan war defenses are not.
    pub fn defense_wins(&self) -> Option<i32> {
        self.defense_wins
    }

    /// Current level of the main village town hall.
    pub fn town_hall_level(&self) -> Option<i32> {
        self.town_hall_level
    }

    /// Level of the town hall weapon.
    ///
    /// Only meaningful when [`town_hall_level`](Self::town_hall_level) is at the
    /// maximum tier, the only one that has a weapon.
    pub fn town_hall_weapon_level(&self) -> Option<i32> {
        self.town_hall_weapon_level
    }

    /// Attacks won in the builder base.
    pub fn versus_battle_wins(&self) -> Option<i32> {
        self.versus_battle_wins
    }

    /// Season results in the legend league. Only present for players who
    /// reached it at least once.
    pub fn legend_statistics(&self) -> Option<&LegendStatistics> {
        self.legend_statistics.as_ref()
    }

    /// Unlocked troops of both villages, in API order.
    pub fn troops(&self) -> Option<&[Troop]> {
        self.troops.as_deref()
    }

    /// Unlocked heroes, in API order.
    pub fn heroes(&self) -> Option<&[Troop]> {
        self.heroes.as_deref()
    }

    /// Unlocked spells, in API order.
    pub fn spells(&self) -> Option<&[Troop]> {
        self.spells.as_deref()
    }

    /// Labels shown on the player's profile.
    pub fn labels(&self) -> Option<&[Label]> {
        self.labels.as_deref()
    }

    /// Unique identifier of the player, in the form `#A0B1C2`.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// In-game nickname.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn exp_level(&self) -> Option<i32> {
        self.exp_level
    }

    /// Current main village trophies.
    pub fn trophies(&self) -> Option<i32> {
        self.trophies
    }

    /// Highest main village trophy count ever reached.
    pub fn best_trophies(&self) -> Option<i32> {
        self.best_trophies
    }

    /// Troops donated to clanmates during the current season.
    pub fn donations(&self) -> Option<i32> {
        self.donations
    }

    /// Troops received from clanmates during the current season.
    pub fn donations_received(&self) -> Option<i32> {
        self.donations_received
    }

    /// Level of the builder hall, the builder base counterpart of the town hall.
    pub fn builder_hall_level(&self) -> Option<i32> {
        self.builder_hall_level
    }

    /// Current builder base trophies.
    pub fn versus_trophies(&self) -> Option<i32> {
        self.versus_trophies
    }

    /// Highest builder base trophy count ever reached.
    pub fn best_versus_trophies(&self) -> Option<i32> {
        self.best_versus_trophies
    }

    /// Total stars earned in clan wars.
    pub fn war_stars(&self) -> Option<i32> {
        self.war_stars
    }

    /// Achievement progress, in API order.
    pub fn achievements(&self) -> Option<&[Achievement]> {
        self.achievements.as_deref()
    }

    /// Battles won in the builder base.
    pub fn versus_battle_win_count(&self) -> Option<i32> {
        self.versus_battle_win_count
    }
}

/// A troop, hero or spell the player unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Troop {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    village: Option<Village>,
}

impl Troop {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Current upgrade level.
    pub fn level(&self) -> Option<i32> {
        self.level
    }

    /// Highest level available in the game, regardless of the player's hall level.
    pub fn max_level(&self) -> Option<i32> {
        self.max_level
    }

    pub fn village(&self) -> Option<Village> {
        self.village
    }
}

/// Progress of one achievement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stars: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    completion_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    village: Option<Village>,
}

impl Achievement {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Stars earned so far, from 0 to 3.
    pub fn stars(&self) -> Option<i32> {
        self.stars
    }

    /// Current progress towards [`target`](Self::target).
    pub fn value(&self) -> Option<i32> {
        self.value
    }

    /// Progress needed for the next star.
    pub fn target(&self) -> Option<i32> {
        self.target
    }

    /// Description of the goal.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Text shown once the achievement is complete.
    pub fn completion_info(&self) -> Option<&str> {
        self.completion_info.as_deref()
    }

    pub fn village(&self) -> Option<Village> {
        self.village
    }
}

/// Legend league results across seasons.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    legend_trophies: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    current_season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    previous_versus_season: Option<Season>,
    #[serde(skip_serializing_if = "Option::is_none")]
    best_versus_season: Option<Season>,
}

impl LegendStatistics {
    /// Legend trophies accumulated over all finished seasons.
    pub fn legend_trophies(&self) -> Option<i32> {
        self.legend_trophies
    }

    pub fn current_season(&self) -> Option<&Season> {
        self.current_season.as_ref()
    }

    pub fn previous_season(&self) -> Option<&Season> {
        self.previous_season.as_ref()
    }

    pub fn best_season(&self) -> Option<&Season> {
        self.best_season.as_ref()
    }

    /// Previous builder base season.
    pub fn previous_versus_season(&self) -> Option<&Season> {
        self.previous_versus_season.as_ref()
    }

    /// Best builder base season.
    pub fn best_versus_season(&self) -> Option<&Season> {
        self.best_versus_season.as_ref()
    }
}

/// Final standing of a player in one season.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Season {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rank: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    trophies: Option<i32>,
}

impl Season {
    /// Season identifier such as `2020-05`. Absent for the running season.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Global rank at the end of the season.
    pub fn rank(&self) -> Option<i32> {
        self.rank
    }

    pub fn trophies(&self) -> Option<i32> {
        self.trophies
    }
}
