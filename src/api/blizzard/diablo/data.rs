use std::fmt::Display;

use crate::api::blizzard::Blizzard;
use crate::validate;

/// Season and era leaderboards. These carry only the access token, no locale.
pub struct DiabloData<'a> {
    pub(crate) client: &'a Blizzard,
}

impl DiabloData<'_> {
    pub fn season_index(&self) -> Option<String> {
        self.link("season/")
    }

    pub fn season(&self, id: impl Display) -> Option<String> {
        let id = validate::numeric("season_id", id)?;
        self.link(&format!("season/{id}"))
    }

    pub fn season_leaderboard(&self, id: impl Display, leaderboard: &str) -> Option<String> {
        let id = validate::numeric("season_id", id)?;
        let leaderboard = validate::slug("leaderboard", leaderboard)?;
        self.link(&format!("season/{id}/leaderboard/{leaderboard}"))
    }

    pub fn era_index(&self) -> Option<String> {
        self.link("era/")
    }

    pub fn era(&self, id: impl Display) -> Option<String> {
        let id = validate::numeric("era_id", id)?;
        self.link(&format!("era/{id}"))
    }

    pub fn era_leaderboard(&self, id: impl Display, leaderboard: &str) -> Option<String> {
        let id = validate::numeric("era_id", id)?;
        let leaderboard = validate::slug("leaderboard", leaderboard)?;
        self.link(&format!("era/{id}/leaderboard/{leaderboard}"))
    }

    fn link(&self, path: &str) -> Option<String> {
        let context = self.client.data()?;
        Some(format!(
            "{}/data/d3/{}?access_token={}",
            context.root,
            path,
            context.token()
        ))
    }
}

#[cfg(test)]
mod tests {
    use crate::api::blizzard::test_support::{client, with_token};

    #[test]
    fn season_links() {
        let blizzard = with_token();
        let data = blizzard.diablo().data();
        assert_eq!(
            data.season_index().unwrap(),
            "https://eu.api.battle.net/data/d3/season/?access_token=TOKEN"
        );
        assert_eq!(
            data.season(12).unwrap(),
            "https://eu.api.battle.net/data/d3/season/12?access_token=TOKEN"
        );
        assert_eq!(
            data.season_leaderboard(12, "achievement-points").unwrap(),
            "https://eu.api.battle.net/data/d3/season/12/leaderboard/achievement-points?access_token=TOKEN"
        );
    }

    #[test]
    fn era_links() {
        let blizzard = with_token();
        let data = blizzard.diablo().data();
        assert_eq!(
            data.era(1).unwrap(),
            "https://eu.api.battle.net/data/d3/era/1?access_token=TOKEN"
        );
        assert_eq!(
            data.era_leaderboard(1, "rift-barbarian").unwrap(),
            "https://eu.api.battle.net/data/d3/era/1/leaderboard/rift-barbarian?access_token=TOKEN"
        );
        assert_eq!(data.era("first"), None);
        assert_eq!(data.era_leaderboard(1, ""), None);
    }

    #[test]
    fn token_is_required() {
        let blizzard = client();
        assert_eq!(blizzard.diablo().data().era_index(), None);
        assert_eq!(blizzard.diablo().data().season_leaderboard(12, "x"), None);
    }
}
