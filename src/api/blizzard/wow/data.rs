use std::fmt::Display;

use crate::api::blizzard::Blizzard;
use crate::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Namespace {
    Dynamic,
    Static,
}

impl Namespace {
    fn as_str(&self) -> &'static str {
        match self {
            Namespace::Dynamic => "dynamic",
            Namespace::Static => "static",
        }
    }
}

/// Game Data API. Every link needs an access token; without one each
/// builder returns `None`.
pub struct WowData<'a> {
    pub(crate) client: &'a Blizzard,
}

impl WowData<'_> {
    pub fn connected_realm_index(&self) -> Option<String> {
        self.link(Namespace::Dynamic, "connected-realm/")
    }

    pub fn connected_realm(&self, connected_realm_id: impl Display) -> Option<String> {
        let id = validate::numeric("connected_realm_id", connected_realm_id)?;
        self.link(Namespace::Dynamic, &format!("connected-realm/{id}"))
    }

    pub fn mythic_keystone_index(&self, connected_realm_id: impl Display) -> Option<String> {
        let id = validate::numeric("connected_realm_id", connected_realm_id)?;
        self.link(
            Namespace::Dynamic,
            &format!("connected-realm/{id}/mythic-leaderboard/"),
        )
    }

    pub fn mythic_keystone_leaderboard(
        &self,
        connected_realm_id: impl Display,
        dungeon_id: impl Display,
        period: impl Display,
    ) -> Option<String> {
        let id = validate::numeric("connected_realm_id", connected_realm_id)?;
        let dungeon_id = validate::numeric("dungeon_id", dungeon_id)?;
        let period = validate::numeric("period", period)?;
        self.link(
            Namespace::Dynamic,
            &format!("connected-realm/{id}/mythic-leaderboard/{dungeon_id}/period/{period}"),
        )
    }

    /// Hall of fame for a raid slug and faction, e.g. `uldir` / `horde`.
    pub fn raid_leaderboard(&self, raid: &str, faction: &str) -> Option<String> {
        let raid = validate::slug("raid", raid)?;
        let faction = validate::slug("faction", faction)?;
        self.link(
            Namespace::Dynamic,
            &format!("leaderboard/hall-of-fame/{raid}/{faction}"),
        )
    }

    pub fn mythic_challenge_mode(&self) -> Option<String> {
        self.link(Namespace::Dynamic, "mythic-challenge-mode/")
    }

    pub fn playable_class_index(&self) -> Option<String> {
        self.link(Namespace::Static, "playable-class/")
    }

    pub fn playable_class(&self, class_id: impl Display) -> Option<String> {
        let class_id = validate::numeric("class_id", class_id)?;
        self.link(Namespace::Static, &format!("playable-class/{class_id}"))
    }

    pub fn realm_index(&self) -> Option<String> {
        self.link(Namespace::Dynamic, "realm/")
    }

    pub fn realm(&self, realm_slug: &str) -> Option<String> {
        let realm_slug = validate::slug("realm_slug", realm_slug)?;
        self.link(Namespace::Dynamic, &format!("realm/{realm_slug}"))
    }

    pub fn region_index(&self) -> Option<String> {
        self.link(Namespace::Dynamic, "region/")
    }

    pub fn region(&self, region_id: impl Display) -> Option<String> {
        let region_id = validate::numeric("region_id", region_id)?;
        self.link(Namespace::Dynamic, &format!("region/{region_id}"))
    }

    pub fn specialization_index(&self) -> Option<String> {
        self.link(Namespace::Static, "playable-specialization/")
    }

    pub fn specialization(&self, spec_id: impl Display) -> Option<String> {
        let spec_id = validate::numeric("spec_id", spec_id)?;
        self.link(Namespace::Static, &format!("playable-specialization/{spec_id}"))
    }

    pub fn token(&self) -> Option<String> {
        self.link(Namespace::Dynamic, "token/")
    }

    fn link(&self, namespace: Namespace, path: &str) -> Option<String> {
        let context = self.client.data()?;
        Some(format!(
            "{}/data/wow/{}?namespace={}-{}&locale={}&access_token={}",
            context.root,
            path,
            namespace.as_str(),
            context.region,
            context.locale,
            context.token()
        ))
    }
}
