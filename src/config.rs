use crate::error::{Error, Result};
use crate::region::{Platform, Region};
use std::env;

/// Options shared by every Blizzard builder. `region` and `locale` are the
/// defaults a call falls back to when it does not override them.
#[derive(Debug, Clone)]
pub struct BlizzardConfig {
    pub key: String,
    pub secret: String,
    pub token: Option<String>,
    pub region: Region,
    pub locale: String,
}

impl BlizzardConfig {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        BlizzardConfig {
            key: key.into(),
            secret: secret.into(),
            token: None,
            region: Region::default(),
            locale: "en_GB".to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.key.is_empty() {
            return Err(Error::MissingKey);
        }
        if self.secret.is_empty() {
            return Err(Error::MissingSecret);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RiotConfig {
    pub api_key: String,
    pub platform: Platform,
}

impl RiotConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        RiotConfig {
            api_key: api_key.into(),
            platform: Platform::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::MissingKey);
        }
        Ok(())
    }
}

/// Everything the environment (and `.env`) provides. Either side may be absent.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub blizzard: Option<BlizzardConfig>,
    pub riot: Option<RiotConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source. Region codes are
    /// parsed here so a typo stops the program before any link is built.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let blizzard = match lookup("BLIZZARD_CLIENT_ID") {
            Some(key) => {
                let secret = lookup("BLIZZARD_CLIENT_SECRET").ok_or(Error::MissingSecret)?;
                let mut config = BlizzardConfig::new(key, secret);
                config.token = lookup("BLIZZARD_ACCESS_TOKEN").filter(|t| !t.is_empty());
                if let Some(region) = lookup("BLIZZARD_REGION") {
                    config.region = region.parse()?;
                }
                if let Some(locale) = lookup("BLIZZARD_LOCALE") {
                    config.locale = locale;
                }
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        let riot = match lookup("RIOT_API_KEY") {
            Some(api_key) => {
                let mut config = RiotConfig::new(api_key);
                if let Some(region) = lookup("RIOT_REGION") {
                    config.platform = region.parse()?;
                }
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        if blizzard.is_none() && riot.is_none() {
            return Err(Error::Config(
                "neither BLIZZARD_CLIENT_ID nor RIOT_API_KEY is set".to_string(),
            ));
        }

        Ok(Config { blizzard, riot })
    }
}
