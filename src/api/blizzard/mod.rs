pub mod diablo;
pub mod oauth;
pub mod sc2;
pub mod wow;

use tracing::trace;

use crate::config::BlizzardConfig;
use crate::error::Result;
use crate::region::{ConnectionContext, Credentials, Region};
use crate::validate;

use self::diablo::Diablo;
use self::oauth::{OAuthCredentials, OAuthProfile};
use self::sc2::StarCraft;
use self::wow::Wow;

/// Entry point for every Blizzard link. Construction checks the client id and
/// secret; the per-call region, locale and token are set with the `with_*`
/// methods, which hand back a new client.
#[derive(Debug, Clone)]
pub struct Blizzard {
    config: BlizzardConfig,
}

impl Blizzard {
    pub fn new(config: BlizzardConfig) -> Result<Self> {
        config.validate()?;
        Ok(Blizzard { config })
    }

    pub fn config(&self) -> &BlizzardConfig {
        &self.config
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.config.region = region;
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.config.locale = locale.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(token.into());
        self
    }

    pub fn credentials(&self) -> OAuthCredentials<'_> {
        OAuthCredentials { client: self }
    }

    pub fn oauth(&self) -> OAuthProfile<'_> {
        OAuthProfile { client: self }
    }

    pub fn wow(&self) -> Wow<'_> {
        Wow { client: self }
    }

    pub fn diablo(&self) -> Diablo<'_> {
        Diablo { client: self }
    }

    pub fn sc2(&self) -> StarCraft<'_> {
        StarCraft { client: self }
    }

    /// Context for key-authenticated Community endpoints.
    pub(crate) fn community(&self) -> ConnectionContext {
        self.resolve(Credentials::key(&self.config.key))
    }

    /// Context for token-authenticated endpoints, `None` without a token.
    pub(crate) fn data(&self) -> Option<ConnectionContext> {
        let token = validate::token(self.config.token.as_deref())?;
        Some(self.resolve(Credentials::token(Some(token))))
    }

    pub(crate) fn client_credentials(&self) -> ConnectionContext {
        self.resolve(Credentials::key_and_secret(
            &self.config.key,
            &self.config.secret,
        ))
    }

    fn resolve(&self, credentials: Credentials) -> ConnectionContext {
        let context = self
            .config
            .region
            .resolve(Some(self.config.locale.as_str()), credentials);
        trace!(region = %context.region, locale = context.locale, "resolved connection context");
        context
    }
}

/// Community query suffix shared by WoW, Diablo and StarCraft.
pub(crate) fn community_query(context: &ConnectionContext) -> String {
    format!("locale={}&apikey={}", context.locale, context.key())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn client() -> Blizzard {
        Blizzard::new(BlizzardConfig::new("KEY", "SECRET")).unwrap()
    }

    pub fn with_token() -> Blizzard {
        client().with_token("TOKEN")
    }
}
