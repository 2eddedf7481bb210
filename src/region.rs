//! Static region tables and the resolver that turns a region plus caller
//! credentials into a [`ConnectionContext`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// A Blizzard API deployment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Us,
    #[default]
    Eu,
    Sea,
    Kr,
    Tw,
    Cn,
}

#[derive(Debug, Serialize)]
pub struct RegionDescriptor {
    pub region: Region,
    pub hostname: &'static str,
    pub credential_host: &'static str,
    pub default_locale: &'static str,
    pub locales: &'static [&'static str],
}

static REGIONS: [RegionDescriptor; 6] = [
    RegionDescriptor {
        region: Region::Us,
        hostname: "https://us.api.battle.net",
        credential_host: "https://us.battle.net",
        default_locale: "en_US",
        locales: &["en_US", "es_MX", "pt_BR"],
    },
    RegionDescriptor {
        region: Region::Eu,
        hostname: "https://eu.api.battle.net",
        credential_host: "https://eu.battle.net",
        default_locale: "en_GB",
        locales: &[
            "de_DE", "en_GB", "es_ES", "es_MX", "fr_FR", "it_IT", "ru_RU", "pl_PL", "pt_PT",
        ],
    },
    RegionDescriptor {
        region: Region::Sea,
        hostname: "https://sea.api.battle.net",
        credential_host: "https://eu.battle.net",
        default_locale: "en_US",
        locales: &["en_US"],
    },
    RegionDescriptor {
        region: Region::Kr,
        hostname: "https://kr.api.battle.net",
        credential_host: "https://kr.battle.net",
        default_locale: "ko_KR",
        locales: &["ko_KR", "en_GB", "en_US", "ru_RU"],
    },
    RegionDescriptor {
        region: Region::Tw,
        hostname: "https://tw.api.battle.net",
        credential_host: "https://apac.battle.net",
        default_locale: "zh_TW",
        locales: &["zh_TW", "en_GB", "en_US"],
    },
    RegionDescriptor {
        region: Region::Cn,
        hostname: "https://api.battlenet.com.cn",
        credential_host: "https://www.battlenet.com.cn",
        default_locale: "zh_CN",
        locales: &["zh_CN", "en_GB", "en_US"],
    },
];

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Us,
        Region::Eu,
        Region::Sea,
        Region::Kr,
        Region::Tw,
        Region::Cn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Us => "us",
            Region::Eu => "eu",
            Region::Sea => "sea",
            Region::Kr => "kr",
            Region::Tw => "tw",
            Region::Cn => "cn",
        }
    }

    pub fn descriptor(&self) -> &'static RegionDescriptor {
        let index = match self {
            Region::Us => 0,
            Region::Eu => 1,
            Region::Sea => 2,
            Region::Kr => 3,
            Region::Tw => 4,
            Region::Cn => 5,
        };
        &REGIONS[index]
    }

    /// Returns `locale` if this region serves it, otherwise the region's default.
    pub fn pick_locale(&self, locale: Option<&str>) -> &'static str {
        let descriptor = self.descriptor();
        locale
            .and_then(|wanted| descriptor.locales.iter().find(|l| **l == wanted))
            .copied()
            .unwrap_or(descriptor.default_locale)
    }

    pub fn resolve(&self, locale: Option<&str>, credentials: Credentials) -> ConnectionContext {
        let descriptor = self.descriptor();
        ConnectionContext {
            region: *self,
            root: descriptor.hostname,
            credential_host: descriptor.credential_host,
            locale: self.pick_locale(locale),
            key: non_empty(credentials.key),
            secret: non_empty(credentials.secret),
            token: non_empty(credentials.token),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            "sea" => Ok(Region::Sea),
            "kr" => Ok(Region::Kr),
            "tw" => Ok(Region::Tw),
            "cn" => Ok(Region::Cn),
            _ => Err(Error::UnknownRegion(code.to_string())),
        }
    }
}

/// Caller-supplied credentials to overlay on a region. Empty strings count as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Credentials<'a> {
    pub key: Option<&'a str>,
    pub secret: Option<&'a str>,
    pub token: Option<&'a str>,
}

impl<'a> Credentials<'a> {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn key(key: &'a str) -> Self {
        Credentials {
            key: Some(key),
            ..Self::default()
        }
    }

    pub fn token(token: Option<&'a str>) -> Self {
        Credentials {
            token,
            ..Self::default()
        }
    }

    pub fn key_and_secret(key: &'a str, secret: &'a str) -> Self {
        Credentials {
            key: Some(key),
            secret: Some(secret),
            token: None,
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Everything one link needs: hosts, the locale actually served, and the
/// credentials that go into the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionContext {
    pub region: Region,
    pub root: &'static str,
    pub credential_host: &'static str,
    pub locale: &'static str,
    pub key: Option<String>,
    pub secret: Option<String>,
    pub token: Option<String>,
}

impl ConnectionContext {
    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    pub fn secret(&self) -> &str {
        self.secret.as_deref().unwrap_or_default()
    }

    pub fn token(&self) -> &str {
        self.token.as_deref().unwrap_or_default()
    }
}

/// Resolves a region code given as text. Unknown codes are a configuration error.
pub fn resolve(code: &str, locale: Option<&str>, credentials: Credentials) -> Result<ConnectionContext> {
    let region: Region = code.parse()?;
    Ok(region.resolve(locale, credentials))
}

/// A League of Legends platform routing value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ru,
    Kr,
    Tw,
    Vn,
    Br1,
    Id1,
    Oc1,
    Jp1,
    Na1,
    Eun1,
    Th,
    #[default]
    Euw1,
    Tr1,
    Ph,
    Sg,
    La1,
    La2,
}

impl Platform {
    pub const ALL: [Platform; 17] = [
        Platform::Ru,
        Platform::Kr,
        Platform::Tw,
        Platform::Vn,
        Platform::Br1,
        Platform::Id1,
        Platform::Oc1,
        Platform::Jp1,
        Platform::Na1,
        Platform::Eun1,
        Platform::Th,
        Platform::Euw1,
        Platform::Tr1,
        Platform::Ph,
        Platform::Sg,
        Platform::La1,
        Platform::La2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Ru => "ru",
            Platform::Kr => "kr",
            Platform::Tw => "tw",
            Platform::Vn => "vn",
            Platform::Br1 => "br1",
            Platform::Id1 => "id1",
            Platform::Oc1 => "oc1",
            Platform::Jp1 => "jp1",
            Platform::Na1 => "na1",
            Platform::Eun1 => "eun1",
            Platform::Th => "th",
            Platform::Euw1 => "euw1",
            Platform::Tr1 => "tr1",
            Platform::Ph => "ph",
            Platform::Sg => "sg",
            Platform::La1 => "la1",
            Platform::La2 => "la2",
        }
    }

    pub fn host(&self) -> &'static str {
        match self {
            // vn is served from the tw shard
            Platform::Tw | Platform::Vn => "https://tw.api.riotgames.com",
            Platform::Ru => "https://ru.api.riotgames.com",
            Platform::Kr => "https://kr.api.riotgames.com",
            Platform::Br1 => "https://br1.api.riotgames.com",
            Platform::Id1 => "https://id1.api.riotgames.com",
            Platform::Oc1 => "https://oc1.api.riotgames.com",
            Platform::Jp1 => "https://jp1.api.riotgames.com",
            Platform::Na1 => "https://na1.api.riotgames.com",
            Platform::Eun1 => "https://eun1.api.riotgames.com",
            Platform::Th => "https://th.api.riotgames.com",
            Platform::Euw1 => "https://euw1.api.riotgames.com",
            Platform::Tr1 => "https://tr1.api.riotgames.com",
            Platform::Ph => "https://ph.api.riotgames.com",
            Platform::Sg => "https://sg.api.riotgames.com",
            Platform::La1 => "https://la1.api.riotgames.com",
            Platform::La2 => "https://la2.api.riotgames.com",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        let wanted = code.trim().to_ascii_lowercase();
        Platform::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| Error::UnknownPlatform(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_locale_falls_back_to_default() {
        for region in Region::ALL {
            let context = region.resolve(Some("xx_XX"), Credentials::none());
            assert_eq!(context.locale, region.descriptor().default_locale);
        }
    }

    #[test]
    fn missing_locale_uses_default() {
        assert_eq!(Region::Kr.pick_locale(None), "ko_KR");
    }

    #[test]
    fn permitted_locale_is_kept() {
        assert_eq!(Region::Eu.pick_locale(Some("fr_FR")), "fr_FR");
        assert_eq!(Region::Us.pick_locale(Some("fr_FR")), "en_US");
    }

    #[test]
    fn descriptors_line_up_with_variants() {
        for region in Region::ALL {
            assert_eq!(region.descriptor().region, region);
        }
    }

    #[test]
    fn absent_credentials_resolve_to_none() {
        let context = Region::Us.resolve(None, Credentials::key(""));
        assert_eq!(context.key, None);
        assert_eq!(context.secret, None);
        assert_eq!(context.token, None);
        assert_eq!(context.key(), "");
    }

    #[test]
    fn credentials_are_carried_over() {
        let context = Region::Tw.resolve(Some("en_US"), Credentials::key_and_secret("k", "s"));
        assert_eq!(context.root, "https://tw.api.battle.net");
        assert_eq!(context.credential_host, "https://apac.battle.net");
        assert_eq!(context.locale, "en_US");
        assert_eq!(context.key.as_deref(), Some("k"));
        assert_eq!(context.secret.as_deref(), Some("s"));
    }

    #[test]
    fn unknown_region_code_is_an_error() {
        assert_eq!(
            resolve("mars", None, Credentials::none()),
            Err(Error::UnknownRegion("mars".to_string()))
        );
        assert_eq!(resolve("CN", None, Credentials::none()).unwrap().locale, "zh_CN");
    }

    #[test]
    fn platform_codes_round_trip() {
        for platform in Platform::ALL {
            assert_eq!(platform.as_str().parse::<Platform>(), Ok(platform));
        }
        assert!("atlantis".parse::<Platform>().is_err());
    }

    #[test]
    fn vietnam_uses_taiwan_host() {
        assert_eq!(Platform::Vn.host(), "https://tw.api.riotgames.com");
        assert_eq!(Platform::Na1.host(), "https://na1.api.riotgames.com");
    }

    #[test]
    fn defaults() {
        assert_eq!(Region::default(), Region::Eu);
        assert_eq!(Platform::default(), Platform::Euw1);
    }
}
