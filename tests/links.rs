use game_links::catalog::{self, ENDPOINTS};
use game_links::{
    Blizzard, BlizzardConfig, Config, Error, LeagueOfLegends, Platform, Region, RiotConfig,
};

fn blizzard() -> Blizzard {
    Blizzard::new(BlizzardConfig::new("KEY", "SECRET"))
        .unwrap()
        .with_token("TOKEN")
}

#[test]
fn every_region_falls_back_to_its_default_locale() {
    for region in Region::ALL {
        let client = blizzard().with_region(region).with_locale("tlh_KL");
        let link = client.wow().community().realm_status();
        let expected = format!(
            "{}/wow/realm/status?locale={}&apikey=KEY",
            region.descriptor().hostname,
            region.descriptor().default_locale
        );
        assert_eq!(link, expected);
    }
}

#[test]
fn namespace_follows_region() {
    let cn = blizzard().with_region(Region::Cn);
    // en_GB is served in cn, so the configured locale is kept
    assert_eq!(
        cn.wow().data().realm("tichondrius").unwrap(),
        "https://api.battlenet.com.cn/data/wow/realm/tichondrius?namespace=dynamic-cn&locale=en_GB&access_token=TOKEN"
    );
    assert_eq!(
        cn.with_locale("xx_XX").wow().data().realm("tichondrius").unwrap(),
        "https://api.battlenet.com.cn/data/wow/realm/tichondrius?namespace=dynamic-cn&locale=zh_CN&access_token=TOKEN"
    );
}

#[test]
fn construction_fails_fast_without_credentials() {
    assert_eq!(
        Blizzard::new(BlizzardConfig::new("", "")).unwrap_err(),
        Error::MissingKey
    );
    assert_eq!(
        Blizzard::new(BlizzardConfig::new("KEY", "")).unwrap_err(),
        Error::MissingSecret
    );
    assert_eq!(
        LeagueOfLegends::new(RiotConfig::new("")).unwrap_err(),
        Error::MissingKey
    );
}

#[test]
fn builders_are_pure() {
    let client = blizzard();
    let lol = LeagueOfLegends::new(RiotConfig::new("RGAPI")).unwrap();
    for endpoint in ENDPOINTS {
        let args: Vec<&str> = endpoint
            .args
            .iter()
            .filter(|a| !a.ends_with('?') && !a.ends_with("..."))
            .map(|a| if *a == "bracket" { "rbg" } else { "7" })
            .collect();
        let first = catalog::link(Some(&client), Some(&lol), endpoint.name, &args).unwrap();
        let second = catalog::link(Some(&client), Some(&lol), endpoint.name, &args).unwrap();
        assert_eq!(first, second, "{}", endpoint.name);
    }
}

#[test]
fn numeric_arguments_reject_text() {
    let client = blizzard();
    let lol = LeagueOfLegends::new(RiotConfig::new("RGAPI")).unwrap();
    let numeric = |arg: &str| arg.ends_with("_id") || arg == "id" || arg == "period";
    for endpoint in ENDPOINTS {
        // slug-and-id and UUID arguments are free text
        let positions: Vec<usize> = endpoint
            .args
            .iter()
            .enumerate()
            .filter(|(_, a)| numeric(a) && **a != "item_slug_and_id" && **a != "league_id")
            .map(|(i, _)| i)
            .collect();
        for position in positions {
            let args: Vec<&str> = endpoint
                .args
                .iter()
                .enumerate()
                .filter(|(_, a)| !a.ends_with('?') && !a.ends_with("..."))
                .map(|(i, _)| if i == position { "not-a-number" } else { "7" })
                .collect();
            let link = catalog::link(Some(&client), Some(&lol), endpoint.name, &args).unwrap();
            assert_eq!(link, None, "{} accepted text at {}", endpoint.name, position);
        }
    }
}

#[test]
fn riot_platforms() {
    let lol = LeagueOfLegends::new(RiotConfig::new("RGAPI")).unwrap();
    for platform in Platform::ALL {
        let link = lol.clone().with_platform(platform).featured_games();
        assert_eq!(
            link,
            format!("{}/lol/spectator/v3/featured-games?api_key=RGAPI", platform.host())
        );
    }
}

#[test]
fn config_rejects_unknown_platform() {
    let err = Config::from_lookup(|name| match name {
        "RIOT_API_KEY" => Some("RGAPI".to_string()),
        "RIOT_REGION" => Some("pluto1".to_string()),
        _ => None,
    })
    .unwrap_err();
    assert_eq!(err, Error::UnknownPlatform("pluto1".to_string()));
}
