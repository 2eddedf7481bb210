use super::fields;
use crate::api::blizzard::{community_query, Blizzard};
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuildField {
    Profile,
    Members,
    Achievements,
    News,
    Challenge,
}

impl GuildField {
    pub const ALL: [GuildField; 5] = [
        GuildField::Profile,
        GuildField::Members,
        GuildField::Achievements,
        GuildField::News,
        GuildField::Challenge,
    ];

    /// The guild profile asks for achievements and challenge data up front.
    pub fn as_str(&self) -> &'static str {
        match self {
            GuildField::Profile => "achievements,challenge",
            GuildField::Members => "members",
            GuildField::Achievements => "achievements",
            GuildField::News => "news",
            GuildField::Challenge => "challenge",
        }
    }
}

pub struct WowGuild<'a> {
    pub(crate) client: &'a Blizzard,
}

impl WowGuild<'_> {
    /// Realm and guild name are both lower-cased.
    pub fn get(
        &self,
        field: GuildField,
        realm: &str,
        guild_name: &str,
        extra: &[&str],
    ) -> Option<String> {
        let realm = validate::slug("realm", realm)?.to_lowercase();
        let guild_name = validate::slug("guild_name", guild_name)?.to_lowercase();
        let context = self.client.community();
        Some(format!(
            "{}/wow/guild/{}/{}?fields={}&{}",
            context.root,
            realm,
            guild_name,
            fields(field.as_str(), extra),
            community_query(&context)
        ))
    }

    pub fn profile(&self, realm: &str, guild_name: &str, extra: &[&str]) -> Option<String> {
        self.get(GuildField::Profile, realm, guild_name, extra)
    }

    pub fn members(&self, realm: &str, guild_name: &str, extra: &[&str]) -> Option<String> {
        self.get(GuildField::Members, realm, guild_name, extra)
    }

    pub fn achievements(&self, realm: &str, guild_name: &str, extra: &[&str]) -> Option<String> {
        self.get(GuildField::Achievements, realm, guild_name, extra)
    }

    pub fn news(&self, realm: &str, guild_name: &str, extra: &[&str]) -> Option<String> {
        self.get(GuildField::News, realm, guild_name, extra)
    }

    pub fn challenge(&self, realm: &str, guild_name: &str, extra: &[&str]) -> Option<String> {
        self.get(GuildField::Challenge, realm, guild_name, extra)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::blizzard::test_support::client;
    use crate::region::Region;

    #[test]
    fn guild_profile_requests_achievements_and_challenge() {
        let blizzard = client().with_region(Region::Kr).with_locale("xx_XX");
        assert_eq!(
            blizzard.wow().community().guild().profile("Azshara", "Method", &[]).unwrap(),
            "https://kr.api.battle.net/wow/guild/azshara/method?fields=achievements,challenge&locale=ko_KR&apikey=KEY"
        );
    }

    #[test]
    fn members_with_extra_fields() {
        assert_eq!(
            client().wow().community().guild().members("Draenor", "Echo", &["news"]).unwrap(),
            "https://eu.api.battle.net/wow/guild/draenor/echo?fields=members,news&locale=en_GB&apikey=KEY"
        );
    }

    #[test]
    fn empty_guild_name_is_rejected() {
        assert_eq!(client().wow().community().guild().news("draenor", "", &[]), None);
    }
}
