use super::fields;
use crate::api::blizzard::{community_query, Blizzard};
use crate::validate;

/// The character profile sections, each of which is its own endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterField {
    Profile,
    Achievements,
    Appearance,
    Feed,
    Guild,
    HunterPets,
    Items,
    Mounts,
    Pets,
    PetSlots,
    Professions,
    Progression,
    Pvp,
    Quests,
    Reputation,
    Statistics,
    Stats,
    Talents,
    Titles,
    Audit,
}

impl CharacterField {
    pub const ALL: [CharacterField; 20] = [
        CharacterField::Profile,
        CharacterField::Achievements,
        CharacterField::Appearance,
        CharacterField::Feed,
        CharacterField::Guild,
        CharacterField::HunterPets,
        CharacterField::Items,
        CharacterField::Mounts,
        CharacterField::Pets,
        CharacterField::PetSlots,
        CharacterField::Professions,
        CharacterField::Progression,
        CharacterField::Pvp,
        CharacterField::Quests,
        CharacterField::Reputation,
        CharacterField::Statistics,
        CharacterField::Stats,
        CharacterField::Talents,
        CharacterField::Titles,
        CharacterField::Audit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterField::Profile => "profile",
            CharacterField::Achievements => "achievements",
            CharacterField::Appearance => "appearance",
            CharacterField::Feed => "feed",
            CharacterField::Guild => "guild",
            CharacterField::HunterPets => "hunterPets",
            CharacterField::Items => "items",
            CharacterField::Mounts => "mounts",
            CharacterField::Pets => "pets",
            CharacterField::PetSlots => "petSlots",
            CharacterField::Professions => "professions",
            CharacterField::Progression => "progression",
            CharacterField::Pvp => "pvp",
            CharacterField::Quests => "quests",
            CharacterField::Reputation => "reputation",
            CharacterField::Statistics => "statistics",
            CharacterField::Stats => "stats",
            CharacterField::Talents => "talents",
            CharacterField::Titles => "titles",
            CharacterField::Audit => "audit",
        }
    }
}

pub struct WowCharacter<'a> {
    pub(crate) client: &'a Blizzard,
}

impl WowCharacter<'_> {
    /// `fields` is `field` followed by `extra`. The realm is lower-cased, the
    /// character name is passed through as given.
    pub fn get(
        &self,
        field: CharacterField,
        realm: &str,
        character_name: &str,
        extra: &[&str],
    ) -> Option<String> {
        let realm = validate::slug("realm", realm)?.to_lowercase();
        let character_name = validate::slug("character_name", character_name)?;
        let context = self.client.community();
        Some(format!(
            "{}/wow/character/{}/{}?fields={}&{}",
            context.root,
            realm,
            character_name,
            fields(field.as_str(), extra),
            community_query(&context)
        ))
    }

    pub fn profile(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Profile, realm, name, extra)
    }

    pub fn achievements(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Achievements, realm, name, extra)
    }

    pub fn appearance(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Appearance, realm, name, extra)
    }

    pub fn feed(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Feed, realm, name, extra)
    }

    pub fn guild(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Guild, realm, name, extra)
    }

    pub fn hunter_pets(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::HunterPets, realm, name, extra)
    }

    pub fn items(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Items, realm, name, extra)
    }

    pub fn mounts(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Mounts, realm, name, extra)
    }

    pub fn pets(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Pets, realm, name, extra)
    }

    pub fn pet_slots(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::PetSlots, realm, name, extra)
    }

    pub fn professions(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Professions, realm, name, extra)
    }

    pub fn progression(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Progression, realm, name, extra)
    }

    pub fn pvp(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Pvp, realm, name, extra)
    }

    pub fn quests(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Quests, realm, name, extra)
    }

    pub fn reputation(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Reputation, realm, name, extra)
    }

    pub fn statistics(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Statistics, realm, name, extra)
    }

    pub fn stats(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Stats, realm, name, extra)
    }

    pub fn talents(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Talents, realm, name, extra)
    }

    pub fn titles(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Titles, realm, name, extra)
    }

    pub fn audit(&self, realm: &str, name: &str, extra: &[&str]) -> Option<String> {
        self.get(CharacterField::Audit, realm, name, extra)
    }
}
