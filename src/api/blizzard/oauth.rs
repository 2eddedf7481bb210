use super::Blizzard;
use crate::validate;

/// Client-credentials token endpoints on the region's credential host.
pub struct OAuthCredentials<'a> {
    pub(crate) client: &'a Blizzard,
}

impl OAuthCredentials<'_> {
    pub fn fetch_token(&self) -> String {
        let context = self.client.client_credentials();
        format!(
            "{}/oauth/token?grant_type=client_credentials&client_id={}&client_secret={}",
            context.credential_host,
            context.key(),
            context.secret()
        )
    }

    /// Checks `token`, or the client's configured token when `None`.
    pub fn check_token(&self, token: Option<&str>) -> Option<String> {
        let configured = self.client.config().token.as_deref();
        let token = validate::token(token.or(configured))?;
        let context = self.client.community();
        Some(format!(
            "{}/oauth/check_token?token={}",
            context.credential_host, token
        ))
    }
}

/// Endpoints for the user behind an authorization-code access token.
pub struct OAuthProfile<'a> {
    pub(crate) client: &'a Blizzard,
}

impl OAuthProfile<'_> {
    pub fn user(&self) -> Option<String> {
        self.link("account/user")
    }

    pub fn sc2_profile(&self) -> Option<String> {
        self.link("sc2/profile/user")
    }

    pub fn wow_profile(&self) -> Option<String> {
        self.link("wow/user/characters")
    }

    fn link(&self, path: &str) -> Option<String> {
        let context = self.client.data()?;
        Some(format!(
            "{}/{}?access_token={}",
            context.root,
            path,
            context.token()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{client, with_token};
    use crate::region::Region;

    #[test]
    fn fetch_token_uses_credential_host() {
        assert_eq!(
            client().credentials().fetch_token(),
            "https://eu.battle.net/oauth/token?grant_type=client_credentials&client_id=KEY&client_secret=SECRET"
        );
        assert_eq!(
            client().with_region(Region::Sea).credentials().fetch_token(),
            "https://eu.battle.net/oauth/token?grant_type=client_credentials&client_id=KEY&client_secret=SECRET"
        );
        assert_eq!(
            client().with_region(Region::Tw).credentials().fetch_token(),
            "https://apac.battle.net/oauth/token?grant_type=client_credentials&client_id=KEY&client_secret=SECRET"
        );
    }

    #[test]
    fn check_token_prefers_argument() {
        let blizzard = with_token();
        assert_eq!(
            blizzard.credentials().check_token(Some("OTHER")).unwrap(),
            "https://eu.battle.net/oauth/check_token?token=OTHER"
        );
        assert_eq!(
            blizzard.credentials().check_token(None).unwrap(),
            "https://eu.battle.net/oauth/check_token?token=TOKEN"
        );
        assert_eq!(client().credentials().check_token(None), None);
    }

    #[test]
    fn profile_links() {
        let profile = with_token().with_region(Region::Us);
        assert_eq!(
            profile.oauth().user().unwrap(),
            "https://us.api.battle.net/account/user?access_token=TOKEN"
        );
        assert_eq!(
            profile.oauth().sc2_profile().unwrap(),
            "https://us.api.battle.net/sc2/profile/user?access_token=TOKEN"
        );
        assert_eq!(
            profile.oauth().wow_profile().unwrap(),
            "https://us.api.battle.net/wow/user/characters?access_token=TOKEN"
        );
        assert_eq!(client().oauth().user(), None);
    }
}
