use std::fmt::Display;

use tracing::debug;

use super::character::WowCharacter;
use super::guild::WowGuild;
use crate::api::blizzard::{community_query, Blizzard};
use crate::validate;

/// PvP leaderboard brackets the Community API serves.
pub const BRACKETS: [&str; 4] = ["2v2", "3v3", "5v5", "rbg"];

pub struct WowCommunity<'a> {
    pub(crate) client: &'a Blizzard,
}

impl<'a> WowCommunity<'a> {
    pub fn boss(&self) -> Boss<'a> {
        Boss { client: self.client }
    }

    pub fn challenge(&self) -> Challenge<'a> {
        Challenge { client: self.client }
    }

    pub fn character(&self) -> WowCharacter<'a> {
        WowCharacter { client: self.client }
    }

    pub fn guild(&self) -> WowGuild<'a> {
        WowGuild { client: self.client }
    }

    pub fn item(&self) -> Item<'a> {
        Item { client: self.client }
    }

    pub fn pet(&self) -> Pet<'a> {
        Pet { client: self.client }
    }

    pub fn resources(&self) -> Resources<'a> {
        Resources { client: self.client }
    }

    pub fn zone(&self) -> Zone<'a> {
        Zone { client: self.client }
    }

    pub fn achievement(&self, id: impl Display) -> Option<String> {
        let id = validate::numeric("id", id)?;
        Some(link(self.client, &format!("achievement/{id}")))
    }

    /// Auction data file for a realm. The realm name is lower-cased.
    pub fn auction(&self, realm: &str) -> Option<String> {
        let realm = validate::slug("realm", realm)?.to_lowercase();
        Some(link(self.client, &format!("auction/data/{realm}")))
    }

    pub fn mounts(&self) -> String {
        link(self.client, "mount/")
    }

    pub fn pvp(&self, bracket: &str) -> Option<String> {
        if !BRACKETS.contains(&bracket) {
            debug!(bracket, "unknown pvp bracket");
            return None;
        }
        Some(link(self.client, &format!("leaderboard/{bracket}")))
    }

    pub fn quest(&self, quest_id: impl Display) -> Option<String> {
        let quest_id = validate::numeric("quest_id", quest_id)?;
        Some(link(self.client, &format!("quest/{quest_id}")))
    }

    pub fn realm_status(&self) -> String {
        link(self.client, "realm/status")
    }

    pub fn recipe(&self, recipe_id: impl Display) -> Option<String> {
        let recipe_id = validate::numeric("recipe_id", recipe_id)?;
        Some(link(self.client, &format!("recipe/{recipe_id}")))
    }

    pub fn spell(&self, spell_id: impl Display) -> Option<String> {
        let spell_id = validate::numeric("spell_id", spell_id)?;
        Some(link(self.client, &format!("spell/{spell_id}")))
    }
}

pub struct Boss<'a> {
    client: &'a Blizzard,
}

impl Boss<'_> {
    pub fn list(&self) -> String {
        link(self.client, "boss/")
    }

    pub fn get(&self, boss_id: impl Display) -> Option<String> {
        let boss_id = validate::numeric("boss_id", boss_id)?;
        Some(link(self.client, &format!("boss/{boss_id}")))
    }
}

pub struct Challenge<'a> {
    client: &'a Blizzard,
}

impl Challenge<'_> {
    pub fn realm(&self, realm: &str) -> Option<String> {
        let realm = validate::slug("realm", realm)?.to_lowercase();
        Some(link(self.client, &format!("challenge/{realm}")))
    }

    pub fn region(&self) -> String {
        link(self.client, "challenge/region")
    }
}

pub struct Item<'a> {
    client: &'a Blizzard,
}

impl Item<'_> {
    pub fn get(&self, item_id: impl Display) -> Option<String> {
        let item_id = validate::numeric("item_id", item_id)?;
        Some(link(self.client, &format!("item/{item_id}")))
    }

    pub fn set(&self, set_id: impl Display) -> Option<String> {
        let set_id = validate::numeric("set_id", set_id)?;
        Some(link(self.client, &format!("item/set/{set_id}")))
    }
}

/// Level, breed and quality for a battle pet stats lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetStatsQuery {
    pub level: i64,
    pub breed_id: i64,
    pub quality_id: i64,
}

impl Default for PetStatsQuery {
    fn default() -> Self {
        PetStatsQuery {
            level: 1,
            breed_id: 3,
            quality_id: 1,
        }
    }
}

pub struct Pet<'a> {
    client: &'a Blizzard,
}

impl Pet<'_> {
    pub fn list(&self) -> String {
        link(self.client, "pet/")
    }

    pub fn ability(&self, ability_id: impl Display) -> Option<String> {
        let ability_id = validate::numeric("ability_id", ability_id)?;
        Some(link(self.client, &format!("pet/ability/{ability_id}")))
    }

    pub fn species(&self, species_id: impl Display) -> Option<String> {
        let species_id = validate::numeric("species_id", species_id)?;
        Some(link(self.client, &format!("pet/species/{species_id}")))
    }

    /// Level must be 1..=25 and quality 0..=5.
    pub fn stats(&self, species_id: impl Display, query: PetStatsQuery) -> Option<String> {
        let species_id = validate::numeric("species_id", species_id)?;
        let level = validate::in_range("level", query.level, 1, 25)?;
        let quality_id = validate::in_range("quality_id", query.quality_id, 0, 5)?;
        let context = self.client.community();
        Some(format!(
            "{}/wow/pet/stats/{}?level={}&breedId={}&qualityId={}&{}",
            context.root,
            species_id,
            level,
            query.breed_id,
            quality_id,
            community_query(&context)
        ))
    }
}

pub struct Resources<'a> {
    client: &'a Blizzard,
}

impl Resources<'_> {
    pub fn battlegroups(&self) -> String {
        link(self.client, "data/battlegroups/")
    }

    pub fn character_races(&self) -> String {
        link(self.client, "data/character/races")
    }

    pub fn character_classes(&self) -> String {
        link(self.client, "data/character/classes")
    }

    pub fn character_achievements(&self) -> String {
        link(self.client, "data/character/achievements")
    }

    pub fn guild_rewards(&self) -> String {
        link(self.client, "data/guild/rewards")
    }

    pub fn guild_perks(&self) -> String {
        link(self.client, "data/guild/perks")
    }

    pub fn guild_achievements(&self) -> String {
        link(self.client, "data/guild/achievements")
    }

    pub fn item_classes(&self) -> String {
        link(self.client, "data/item/classes")
    }

    pub fn talents(&self) -> String {
        link(self.client, "data/talents")
    }

    pub fn pet_types(&self) -> String {
        link(self.client, "data/pet/types")
    }
}

pub struct Zone<'a> {
    client: &'a Blizzard,
}

impl Zone<'_> {
    pub fn list(&self) -> String {
        link(self.client, "zone/")
    }

    pub fn get(&self, zone_id: impl Display) -> Option<String> {
        let zone_id = validate::numeric("zone_id", zone_id)?;
        Some(link(self.client, &format!("zone/{zone_id}")))
    }
}

fn link(client: &Blizzard, path: &str) -> String {
    let context = client.community();
    format!("{}/wow/{}?{}", context.root, path, community_query(&context))
}
