use std::fmt::Display;

use super::{community_query, Blizzard};
use crate::validate;

/// StarCraft II Community links.
pub struct StarCraft<'a> {
    pub(crate) client: &'a Blizzard,
}

impl StarCraft<'_> {
    /// `profile_region` is the numeric region segment of the profile path,
    /// not the API region.
    pub fn profile(&self, id: impl Display, profile_region: &str, name: &str) -> Option<String> {
        self.profile_link(id, profile_region, name, "")
    }

    pub fn ladders(&self, id: impl Display, profile_region: &str, name: &str) -> Option<String> {
        self.profile_link(id, profile_region, name, "ladders")
    }

    pub fn match_history(
        &self,
        id: impl Display,
        profile_region: &str,
        name: &str,
    ) -> Option<String> {
        self.profile_link(id, profile_region, name, "matches")
    }

    pub fn ladder(&self, id: impl Display) -> Option<String> {
        let id = validate::numeric("ladder_id", id)?;
        Some(self.link(&format!("ladder/{id}")))
    }

    pub fn achievements(&self) -> String {
        self.link("data/achievements")
    }

    pub fn rewards(&self) -> String {
        self.link("data/rewards")
    }

    fn profile_link(
        &self,
        id: impl Display,
        profile_region: &str,
        name: &str,
        section: &str,
    ) -> Option<String> {
        let id = validate::numeric("profile_id", id)?;
        let profile_region = validate::slug("profile_region", profile_region)?;
        let name = validate::slug("name", name)?;
        Some(self.link(&format!("profile/{id}/{profile_region}/{name}/{section}")))
    }

    fn link(&self, path: &str) -> String {
        let context = self.client.community();
        format!("{}/sc2/{}?{}", context.root, path, community_query(&context))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::blizzard::test_support::client;
    use crate::region::Region;

    const Q: &str = "locale=en_US&apikey=KEY";

    #[test]
    fn profile_links() {
        let blizzard = client().with_region(Region::Us);
        let sc2 = blizzard.sc2();
        assert_eq!(
            sc2.profile(2137104, "1", "Skt").unwrap(),
            format!("https://us.api.battle.net/sc2/profile/2137104/1/Skt/?{Q}")
        );
        assert_eq!(
            sc2.ladders(2137104, "1", "Skt").unwrap(),
            format!("https://us.api.battle.net/sc2/profile/2137104/1/Skt/ladders?{Q}")
        );
        assert_eq!(
            sc2.match_history(2137104, "1", "Skt").unwrap(),
            format!("https://us.api.battle.net/sc2/profile/2137104/1/Skt/matches?{Q}")
        );
        assert_eq!(sc2.profile("abc", "1", "Skt"), None);
        assert_eq!(sc2.profile(1, "", "Skt"), None);
        assert_eq!(sc2.profile(1, "1", ""), None);
    }

    #[test]
    fn ladder_and_data_links() {
        let blizzard = client().with_region(Region::Us);
        let sc2 = blizzard.sc2();
        assert_eq!(
            sc2.ladder(194163).unwrap(),
            format!("https://us.api.battle.net/sc2/ladder/194163?{Q}")
        );
        assert_eq!(sc2.ladder("top"), None);
        assert_eq!(
            sc2.achievements(),
            format!("https://us.api.battle.net/sc2/data/achievements?{Q}")
        );
        assert_eq!(
            sc2.rewards(),
            format!("https://us.api.battle.net/sc2/data/rewards?{Q}")
        );
    }
}
