use std::fmt::Display;

use crate::api::blizzard::{community_query, Blizzard};
use crate::validate;

pub struct DiabloCommunity<'a> {
    pub(crate) client: &'a Blizzard,
}

impl DiabloCommunity<'_> {
    pub fn act_index(&self) -> String {
        self.link("data/act")
    }

    pub fn act(&self, act_id: impl Display) -> Option<String> {
        let act_id = validate::numeric("act_id", act_id)?;
        Some(self.link(&format!("data/act/{act_id}")))
    }

    pub fn artisan(&self, artisan_slug: &str) -> Option<String> {
        let artisan_slug = validate::slug("artisan_slug", artisan_slug)?;
        Some(self.link(&format!("data/artisan/{artisan_slug}")))
    }

    pub fn recipe(&self, artisan_slug: &str, recipe_slug: &str) -> Option<String> {
        let artisan_slug = validate::slug("artisan_slug", artisan_slug)?;
        let recipe_slug = validate::slug("recipe_slug", recipe_slug)?;
        Some(self.link(&format!(
            "data/artisan/{artisan_slug}/recipe/{recipe_slug}"
        )))
    }

    pub fn follower(&self, follower_slug: &str) -> Option<String> {
        let follower_slug = validate::slug("follower_slug", follower_slug)?;
        Some(self.link(&format!("data/follower/{follower_slug}")))
    }

    pub fn character_class(&self, class_slug: &str) -> Option<String> {
        let class_slug = validate::slug("class_slug", class_slug)?;
        Some(self.link(&format!("data/hero/{class_slug}")))
    }

    pub fn skill(&self, class_slug: &str, skill_slug: &str) -> Option<String> {
        let class_slug = validate::slug("class_slug", class_slug)?;
        let skill_slug = validate::slug("skill_slug", skill_slug)?;
        Some(self.link(&format!("data/hero/{class_slug}/skill/{skill_slug}")))
    }

    pub fn item_type_index(&self) -> String {
        self.link("data/item-type")
    }

    pub fn item_type(&self, item_type_slug: &str) -> Option<String> {
        let item_type_slug = validate::slug("item_type_slug", item_type_slug)?;
        Some(self.link(&format!("data/item-type/{item_type_slug}")))
    }

    /// `item_slug_and_id` is the `slug-id` pair, e.g. `corrupted-ashbringer-Unique_Sword_2H_104_x1`.
    pub fn item(&self, item_slug_and_id: &str) -> Option<String> {
        let item = validate::slug("item_slug_and_id", item_slug_and_id)?;
        Some(self.link(&format!("data/item/{item}")))
    }

    /// Career profile. A BattleTag like `Name#1234` is sent as `Name-1234`.
    pub fn account(&self, battle_tag: &str) -> Option<String> {
        let account = battle_tag_path(battle_tag)?;
        Some(self.link(&format!("profile/{account}/")))
    }

    pub fn hero(&self, battle_tag: &str, hero_id: impl Display) -> Option<String> {
        let account = battle_tag_path(battle_tag)?;
        let hero_id = validate::numeric("hero_id", hero_id)?;
        Some(self.link(&format!("profile/{account}/hero/{hero_id}")))
    }

    pub fn hero_items(&self, battle_tag: &str, hero_id: impl Display) -> Option<String> {
        let account = battle_tag_path(battle_tag)?;
        let hero_id = validate::numeric("hero_id", hero_id)?;
        Some(self.link(&format!("profile/{account}/hero/{hero_id}/items")))
    }

    pub fn follower_items(&self, battle_tag: &str, hero_id: impl Display) -> Option<String> {
        let account = battle_tag_path(battle_tag)?;
        let hero_id = validate::numeric("hero_id", hero_id)?;
        Some(self.link(&format!(
            "profile/{account}/hero/{hero_id}/follower-items"
        )))
    }

    fn link(&self, path: &str) -> String {
        let context = self.client.community();
        format!("{}/d3/{}?{}", context.root, path, community_query(&context))
    }
}

fn battle_tag_path(battle_tag: &str) -> Option<String> {
    Some(validate::slug("battle_tag", battle_tag)?.replacen('#', "-", 1))
}

#[cfg(test)]
mod tests {
    use crate::api::blizzard::test_support::client;

    const Q: &str = "locale=en_GB&apikey=KEY";

    #[test]
    fn profile_links_rewrite_battle_tag() {
        let blizzard = client();
        let d3 = blizzard.diablo().community();
        assert_eq!(
            d3.account("Zeus#1234").unwrap(),
            format!("https://eu.api.battle.net/d3/profile/Zeus-1234/?{Q}")
        );
        assert_eq!(
            d3.hero("Zeus#1234", 93036384).unwrap(),
            format!("https://eu.api.battle.net/d3/profile/Zeus-1234/hero/93036384?{Q}")
        );
        assert_eq!(
            d3.hero_items("Zeus#1234", "93036384").unwrap(),
            format!("https://eu.api.battle.net/d3/profile/Zeus-1234/hero/93036384/items?{Q}")
        );
        assert_eq!(
            d3.follower_items("Zeus#1234", 1).unwrap(),
            format!("https://eu.api.battle.net/d3/profile/Zeus-1234/hero/1/follower-items?{Q}")
        );
        assert_eq!(d3.hero("Zeus#1234", "barb"), None);
        assert_eq!(d3.account(""), None);
    }

    #[test]
    fn data_links() {
        let blizzard = client();
        let d3 = blizzard.diablo().community();
        assert_eq!(d3.act_index(), format!("https://eu.api.battle.net/d3/data/act?{Q}"));
        assert_eq!(d3.act(1).unwrap(), format!("https://eu.api.battle.net/d3/data/act/1?{Q}"));
        assert_eq!(
            d3.recipe("blacksmith", "apprentice-flamberge").unwrap(),
            format!("https://eu.api.battle.net/d3/data/artisan/blacksmith/recipe/apprentice-flamberge?{Q}")
        );
        assert_eq!(
            d3.skill("barbarian", "bash").unwrap(),
            format!("https://eu.api.battle.net/d3/data/hero/barbarian/skill/bash?{Q}")
        );
        assert_eq!(
            d3.item_type_index(),
            format!("https://eu.api.battle.net/d3/data/item-type?{Q}")
        );
        assert_eq!(
            d3.follower("templar").unwrap(),
            format!("https://eu.api.battle.net/d3/data/follower/templar?{Q}")
        );
        assert_eq!(d3.recipe("blacksmith", ""), None);
        assert_eq!(d3.act("one"), None);
    }
}
