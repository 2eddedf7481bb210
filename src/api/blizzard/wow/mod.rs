//! World of Warcraft: the key-authenticated Community API and the
//! token-authenticated Game Data API.

pub mod character;
pub mod community;
pub mod data;
pub mod guild;

use super::Blizzard;

pub use self::character::CharacterField;
pub use self::community::{PetStatsQuery, BRACKETS};
pub use self::guild::GuildField;

pub struct Wow<'a> {
    pub(crate) client: &'a Blizzard,
}

impl<'a> Wow<'a> {
    pub fn community(&self) -> community::WowCommunity<'a> {
        community::WowCommunity {
            client: self.client,
        }
    }

    pub fn data(&self) -> data::WowData<'a> {
        data::WowData {
            client: self.client,
        }
    }
}

/// Joins the endpoint's own field with caller-requested extras.
pub(crate) fn fields(leading: &str, extra: &[&str]) -> String {
    std::iter::once(leading)
        .chain(extra.iter().copied())
        .collect::<Vec<_>>()
        .join(",")
}
