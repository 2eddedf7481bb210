use std::fmt::Display;

use tracing::trace;

use crate::config::RiotConfig;
use crate::error::Result;
use crate::region::Platform;
use crate::validate;

/// League of Legends v3 platform links, authenticated with `api_key`.
#[derive(Debug, Clone)]
pub struct LeagueOfLegends {
    config: RiotConfig,
}

impl LeagueOfLegends {
    pub fn new(config: RiotConfig) -> Result<Self> {
        config.validate()?;
        Ok(LeagueOfLegends { config })
    }

    pub fn config(&self) -> &RiotConfig {
        &self.config
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.config.platform = platform;
        self
    }

    // LOL-STATUS-V3

    pub fn status(&self) -> String {
        self.link("status/v3/shard-data")
    }

    // THIRD-PARTY-CODE-V3

    pub fn third_party_code(&self, summoner_id: impl Display) -> Option<String> {
        let summoner_id = validate::numeric("summoner_id", summoner_id)?;
        Some(self.link(&format!(
            "platform/v3/third-party-code/by-summoner/{summoner_id}"
        )))
    }

    // CHAMPION-MASTERY-V3

    pub fn champion_masteries(&self, summoner_id: impl Display) -> Option<String> {
        let summoner_id = validate::numeric("summoner_id", summoner_id)?;
        Some(self.link(&format!(
            "champion-mastery/v3/champion-masteries/by-summoner/{summoner_id}"
        )))
    }

    pub fn champion_mastery(
        &self,
        summoner_id: impl Display,
        champion_id: impl Display,
    ) -> Option<String> {
        let summoner_id = validate::numeric("summoner_id", summoner_id)?;
        let champion_id = validate::numeric("champion_id", champion_id)?;
        Some(self.link(&format!(
            "champion-mastery/v3/champion-masteries/by-summoner/{summoner_id}/by-champion/{champion_id}"
        )))
    }

    pub fn champion_mastery_score(&self, summoner_id: impl Display) -> Option<String> {
        let summoner_id = validate::numeric("summoner_id", summoner_id)?;
        Some(self.link(&format!(
            "champion-mastery/v3/scores/by-summoner/{summoner_id}"
        )))
    }

    // CHAMPION-V3

    pub fn champion_rotations(&self) -> String {
        self.link("platform/v3/champion-rotations")
    }

    pub fn champions(&self) -> String {
        self.link("platform/v3/champions")
    }

    pub fn champion(&self, champion_id: impl Display) -> Option<String> {
        let champion_id = validate::numeric("champion_id", champion_id)?;
        Some(self.link(&format!("platform/v3/champions/{champion_id}")))
    }

    // LEAGUE-V3

    pub fn challenger_league(&self, queue: &str) -> Option<String> {
        let queue = validate::slug("queue", queue)?;
        Some(self.link(&format!("league/v3/challengerleagues/by-queue/{queue}")))
    }

    pub fn master_league(&self, queue: &str) -> Option<String> {
        let queue = validate::slug("queue", queue)?;
        Some(self.link(&format!("league/v3/masterleagues/by-queue/{queue}")))
    }

    /// `league_id` is the league UUID, not a number.
    pub fn league(&self, league_id: &str) -> Option<String> {
        let league_id = validate::slug("league_id", league_id)?;
        Some(self.link(&format!("league/v3/leagues/{league_id}")))
    }

    pub fn league_positions(&self, summoner_id: impl Display) -> Option<String> {
        let summoner_id = validate::numeric("summoner_id", summoner_id)?;
        Some(self.link(&format!("league/v3/positions/by-summoner/{summoner_id}")))
    }

    // MATCH-V3

    pub fn match_by_id(&self, match_id: impl Display) -> Option<String> {
        let match_id = validate::numeric("match_id", match_id)?;
        Some(self.link(&format!("match/v3/matches/{match_id}")))
    }

    pub fn match_list(&self, account_id: impl Display) -> Option<String> {
        let account_id = validate::numeric("account_id", account_id)?;
        Some(self.link(&format!("match/v3/matchlists/by-account/{account_id}")))
    }

    pub fn match_timeline(&self, match_id: impl Display) -> Option<String> {
        let match_id = validate::numeric("match_id", match_id)?;
        Some(self.link(&format!("match/v3/timelines/by-match/{match_id}")))
    }

    pub fn matches_by_tournament_code(&self, tournament_code: &str) -> Option<String> {
        let code = validate::slug("tournament_code", tournament_code)?;
        Some(self.link(&format!("match/v3/matches/by-tournament-code/{code}/ids")))
    }

    // SPECTATOR-V3

    pub fn active_game(&self, summoner_id: impl Display) -> Option<String> {
        let summoner_id = validate::numeric("summoner_id", summoner_id)?;
        Some(self.link(&format!(
            "spectator/v3/active-games/by-summoner/{summoner_id}"
        )))
    }

    pub fn featured_games(&self) -> String {
        self.link("spectator/v3/featured-games")
    }

    // SUMMONER-V3

    pub fn summoner_by_account(&self, account_id: impl Display) -> Option<String> {
        let account_id = validate::numeric("account_id", account_id)?;
        Some(self.link(&format!("summoner/v3/summoners/by-account/{account_id}")))
    }

    /// The summoner name is passed through as given.
    pub fn summoner_by_name(&self, summoner_name: &str) -> Option<String> {
        let summoner_name = validate::slug("summoner_name", summoner_name)?;
        Some(self.link(&format!("summoner/v3/summoners/by-name/{summoner_name}")))
    }

    pub fn summoner(&self, summoner_id: impl Display) -> Option<String> {
        let summoner_id = validate::numeric("summoner_id", summoner_id)?;
        Some(self.link(&format!("summoner/v3/summoners/{summoner_id}")))
    }

    fn link(&self, path: &str) -> String {
        trace!(platform = %self.config.platform, path, "building league link");
        format!(
            "{}/lol/{}?api_key={}",
            self.config.platform.host(),
            path,
            self.config.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use expect_test::expect;

    fn client() -> LeagueOfLegends {
        LeagueOfLegends::new(RiotConfig::new("RGAPI-KEY")).unwrap()
    }

    #[test]
    fn construction_requires_key() {
        assert_eq!(
            LeagueOfLegends::new(RiotConfig::new("")).unwrap_err(),
            Error::MissingKey
        );
    }

    #[test]
    fn status_uses_default_platform() {
        expect!["https://euw1.api.riotgames.com/lol/status/v3/shard-data?api_key=RGAPI-KEY"]
            .assert_eq(&client().status());
    }

    #[test]
    fn platform_override() {
        let lol = client().with_platform(Platform::Vn);
        assert_eq!(
            lol.summoner(123).unwrap(),
            "https://tw.api.riotgames.com/lol/summoner/v3/summoners/123?api_key=RGAPI-KEY"
        );
    }

    #[test]
    fn third_party_code_requires_numeric_summoner() {
        assert_eq!(
            client().third_party_code("42").unwrap(),
            "https://euw1.api.riotgames.com/lol/platform/v3/third-party-code/by-summoner/42?api_key=RGAPI-KEY"
        );
        assert_eq!(client().third_party_code("faker"), None);
    }

    #[test]
    fn champion_mastery_links() {
        let lol = client();
        expect!["https://euw1.api.riotgames.com/lol/champion-mastery/v3/champion-masteries/by-summoner/7/by-champion/64?api_key=RGAPI-KEY"]
            .assert_eq(&lol.champion_mastery(7, 64).unwrap());
        assert_eq!(lol.champion_mastery(7, "lee"), None);
        assert_eq!(
            lol.champion_mastery_score(7).unwrap(),
            "https://euw1.api.riotgames.com/lol/champion-mastery/v3/scores/by-summoner/7?api_key=RGAPI-KEY"
        );
    }

    #[test]
    fn league_links() {
        let lol = client();
        assert_eq!(
            lol.challenger_league("RANKED_SOLO_5x5").unwrap(),
            "https://euw1.api.riotgames.com/lol/league/v3/challengerleagues/by-queue/RANKED_SOLO_5x5?api_key=RGAPI-KEY"
        );
        assert_eq!(lol.master_league(""), None);
        assert_eq!(
            lol.league("9a3c0e10-3c5b-11e8-8f0b-c81f66db96d8").unwrap(),
            "https://euw1.api.riotgames.com/lol/league/v3/leagues/9a3c0e10-3c5b-11e8-8f0b-c81f66db96d8?api_key=RGAPI-KEY"
        );
    }

    #[test]
    fn match_links() {
        let lol = client();
        assert_eq!(
            lol.match_timeline(3598521418u64).unwrap(),
            "https://euw1.api.riotgames.com/lol/match/v3/timelines/by-match/3598521418?api_key=RGAPI-KEY"
        );
        assert_eq!(
            lol.matches_by_tournament_code("EUW-TC-1").unwrap(),
            "https://euw1.api.riotgames.com/lol/match/v3/matches/by-tournament-code/EUW-TC-1/ids?api_key=RGAPI-KEY"
        );
        assert_eq!(lol.match_list("acc"), None);
    }

    #[test]
    fn numeric_endpoints_reject_text() {
        let lol = client();
        assert_eq!(lol.champion("ahri"), None);
        assert_eq!(lol.champion_masteries("x"), None);
        assert_eq!(lol.league_positions("x"), None);
        assert_eq!(lol.match_by_id("x"), None);
        assert_eq!(lol.active_game("x"), None);
        assert_eq!(lol.summoner_by_account("x"), None);
        assert_eq!(lol.summoner("x"), None);
        assert_eq!(lol.summoner_by_name(""), None);
    }
}
