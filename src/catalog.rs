//! Every endpoint by dotted name, so links can be built from plain text
//! arguments (the CLI's `link` command).
//!
//! Argument names ending in `?` are optional; a trailing `...` takes any
//! number of values.

use crate::api::blizzard::wow::{CharacterField, PetStatsQuery};
use crate::api::blizzard::Blizzard;
use crate::api::riot::LeagueOfLegends;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Blizzard,
    Riot,
}

impl Api {
    pub fn as_str(&self) -> &'static str {
        match self {
            Api::Blizzard => "Blizzard",
            Api::Riot => "Riot",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub name: &'static str,
    pub api: Api,
    pub args: &'static [&'static str],
}

impl Endpoint {
    fn variadic(&self) -> bool {
        self.args.last().is_some_and(|a| a.ends_with("..."))
    }

    fn required(&self) -> usize {
        self.args
            .iter()
            .filter(|a| !a.ends_with('?') && !a.ends_with("..."))
            .count()
    }

    fn accepts(&self, count: usize) -> bool {
        count >= self.required() && (self.variadic() || count <= self.args.len())
    }
}

const fn blizzard(name: &'static str, args: &'static [&'static str]) -> Endpoint {
    Endpoint {
        name,
        api: Api::Blizzard,
        args,
    }
}

const fn riot(name: &'static str, args: &'static [&'static str]) -> Endpoint {
    Endpoint {
        name,
        api: Api::Riot,
        args,
    }
}

const CHARACTER: &[&str] = &["realm", "character", "fields..."];
const GUILD: &[&str] = &["realm", "guild", "fields..."];

pub const ENDPOINTS: &[Endpoint] = &[
    blizzard("oauth.token", &[]),
    blizzard("oauth.check", &["token?"]),
    blizzard("oauth.user", &[]),
    blizzard("oauth.sc2", &[]),
    blizzard("oauth.wow", &[]),
    blizzard("wow.achievement", &["id"]),
    blizzard("wow.auction", &["realm"]),
    blizzard("wow.boss.list", &[]),
    blizzard("wow.boss", &["boss_id"]),
    blizzard("wow.challenge.realm", &["realm"]),
    blizzard("wow.challenge.region", &[]),
    blizzard("wow.character.profile", CHARACTER),
    blizzard("wow.character.achievements", CHARACTER),
    blizzard("wow.character.appearance", CHARACTER),
    blizzard("wow.character.feed", CHARACTER),
    blizzard("wow.character.guild", CHARACTER),
    blizzard("wow.character.hunterPets", CHARACTER),
    blizzard("wow.character.items", CHARACTER),
    blizzard("wow.character.mounts", CHARACTER),
    blizzard("wow.character.pets", CHARACTER),
    blizzard("wow.character.petSlots", CHARACTER),
    blizzard("wow.character.professions", CHARACTER),
    blizzard("wow.character.progression", CHARACTER),
    blizzard("wow.character.pvp", CHARACTER),
    blizzard("wow.character.quests", CHARACTER),
    blizzard("wow.character.reputation", CHARACTER),
    blizzard("wow.character.statistics", CHARACTER),
    blizzard("wow.character.stats", CHARACTER),
    blizzard("wow.character.talents", CHARACTER),
    blizzard("wow.character.titles", CHARACTER),
    blizzard("wow.character.audit", CHARACTER),
    blizzard("wow.guild.profile", GUILD),
    blizzard("wow.guild.members", GUILD),
    blizzard("wow.guild.achievements", GUILD),
    blizzard("wow.guild.news", GUILD),
    blizzard("wow.guild.challenge", GUILD),
    blizzard("wow.item", &["item_id"]),
    blizzard("wow.item.set", &["set_id"]),
    blizzard("wow.mounts", &[]),
    blizzard("wow.pet.list", &[]),
    blizzard("wow.pet.ability", &["ability_id"]),
    blizzard("wow.pet.species", &["species_id"]),
    blizzard(
        "wow.pet.stats",
        &["species_id", "level?", "breed_id?", "quality_id?"],
    ),
    blizzard("wow.pvp", &["bracket"]),
    blizzard("wow.quest", &["quest_id"]),
    blizzard("wow.realm.status", &[]),
    blizzard("wow.recipe", &["recipe_id"]),
    blizzard("wow.spell", &["spell_id"]),
    blizzard("wow.resources.battlegroups", &[]),
    blizzard("wow.resources.character_races", &[]),
    blizzard("wow.resources.character_classes", &[]),
    blizzard("wow.resources.character_achievements", &[]),
    blizzard("wow.resources.guild_rewards", &[]),
    blizzard("wow.resources.guild_perks", &[]),
    blizzard("wow.resources.guild_achievements", &[]),
    blizzard("wow.resources.item_classes", &[]),
    blizzard("wow.resources.talents", &[]),
    blizzard("wow.resources.pet_types", &[]),
    blizzard("wow.zone.list", &[]),
    blizzard("wow.zone", &["zone_id"]),
    blizzard("wow.data.connected_realm.index", &[]),
    blizzard("wow.data.connected_realm", &["connected_realm_id"]),
    blizzard("wow.data.keystone.index", &["connected_realm_id"]),
    blizzard(
        "wow.data.keystone.leaderboard",
        &["connected_realm_id", "dungeon_id", "period"],
    ),
    blizzard("wow.data.raid", &["raid", "faction"]),
    blizzard("wow.data.mythic_challenge", &[]),
    blizzard("wow.data.class.index", &[]),
    blizzard("wow.data.class", &["class_id"]),
    blizzard("wow.data.realm.index", &[]),
    blizzard("wow.data.realm", &["realm_slug"]),
    blizzard("wow.data.region.index", &[]),
    blizzard("wow.data.region", &["region_id"]),
    blizzard("wow.data.specialization.index", &[]),
    blizzard("wow.data.specialization", &["spec_id"]),
    blizzard("wow.data.token", &[]),
    blizzard("d3.act.index", &[]),
    blizzard("d3.act", &["act_id"]),
    blizzard("d3.artisan", &["artisan_slug"]),
    blizzard("d3.recipe", &["artisan_slug", "recipe_slug"]),
    blizzard("d3.follower", &["follower_slug"]),
    blizzard("d3.class", &["class_slug"]),
    blizzard("d3.skill", &["class_slug", "skill_slug"]),
    blizzard("d3.item_type.index", &[]),
    blizzard("d3.item_type", &["item_type_slug"]),
    blizzard("d3.item", &["item_slug_and_id"]),
    blizzard("d3.profile", &["battle_tag"]),
    blizzard("d3.profile.hero", &["battle_tag", "hero_id"]),
    blizzard("d3.profile.hero_items", &["battle_tag", "hero_id"]),
    blizzard("d3.profile.follower_items", &["battle_tag", "hero_id"]),
    blizzard("d3.data.season.index", &[]),
    blizzard("d3.data.season", &["id"]),
    blizzard("d3.data.season.leaderboard", &["id", "leaderboard"]),
    blizzard("d3.data.era.index", &[]),
    blizzard("d3.data.era", &["id"]),
    blizzard("d3.data.era.leaderboard", &["id", "leaderboard"]),
    blizzard("sc2.profile", &["id", "profile_region", "name"]),
    blizzard("sc2.profile.ladders", &["id", "profile_region", "name"]),
    blizzard("sc2.profile.matches", &["id", "profile_region", "name"]),
    blizzard("sc2.ladder", &["id"]),
    blizzard("sc2.achievements", &[]),
    blizzard("sc2.rewards", &[]),
    riot("lol.status", &[]),
    riot("lol.third_party_code", &["summoner_id"]),
    riot("lol.champion_mastery.all", &["summoner_id"]),
    riot("lol.champion_mastery", &["summoner_id", "champion_id"]),
    riot("lol.champion_mastery.score", &["summoner_id"]),
    riot("lol.champion.rotations", &[]),
    riot("lol.champion.all", &[]),
    riot("lol.champion", &["champion_id"]),
    riot("lol.league.challenger", &["queue"]),
    riot("lol.league.master", &["queue"]),
    riot("lol.league", &["league_id"]),
    riot("lol.league.positions", &["summoner_id"]),
    riot("lol.match", &["match_id"]),
    riot("lol.match.list", &["account_id"]),
    riot("lol.match.timeline", &["match_id"]),
    riot("lol.match.tournament_code", &["tournament_code"]),
    riot("lol.spectator.active_game", &["summoner_id"]),
    riot("lol.spectator.featured", &[]),
    riot("lol.summoner.by_account", &["account_id"]),
    riot("lol.summoner.by_name", &["summoner_name"]),
    riot("lol.summoner", &["summoner_id"]),
];

pub fn find(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

/// Builds the link for `name`. Unknown names, a wrong argument count or a
/// missing client are errors; arguments that fail validation give `Ok(None)`.
pub fn link(
    blizzard: Option<&Blizzard>,
    riot: Option<&LeagueOfLegends>,
    name: &str,
    args: &[&str],
) -> Result<Option<String>> {
    let endpoint = find(name).ok_or_else(|| Error::UnknownEndpoint(name.to_string()))?;
    if !endpoint.accepts(args.len()) {
        return Err(Error::Arguments {
            endpoint: name.to_string(),
            expected: endpoint.args.join(" "),
        });
    }

    match endpoint.api {
        Api::Blizzard => {
            let client = blizzard.ok_or(Error::NotConfigured(Api::Blizzard.as_str()))?;
            Ok(blizzard_link(client, name, args))
        }
        Api::Riot => {
            let client = riot.ok_or(Error::NotConfigured(Api::Riot.as_str()))?;
            Ok(riot_link(client, name, args))
        }
    }
}

fn blizzard_link(client: &Blizzard, name: &str, args: &[&str]) -> Option<String> {
    let wow = client.wow().community();
    let data = client.wow().data();
    let d3 = client.diablo().community();
    let d3_data = client.diablo().data();
    let sc2 = client.sc2();

    if let Some(section) = name.strip_prefix("wow.character.") {
        let field = CharacterField::ALL
            .into_iter()
            .find(|f| f.as_str() == section)?;
        return match args {
            [realm, character, extra @ ..] => wow.character().get(field, realm, character, extra),
            _ => None,
        };
    }

    match (name, args) {
        ("oauth.token", []) => Some(client.credentials().fetch_token()),
        ("oauth.check", []) => client.credentials().check_token(None),
        ("oauth.check", [token]) => client.credentials().check_token(Some(*token)),
        ("oauth.user", []) => client.oauth().user(),
        ("oauth.sc2", []) => client.oauth().sc2_profile(),
        ("oauth.wow", []) => client.oauth().wow_profile(),
        ("wow.achievement", [id]) => wow.achievement(id),
        ("wow.auction", [realm]) => wow.auction(realm),
        ("wow.boss.list", []) => Some(wow.boss().list()),
        ("wow.boss", [id]) => wow.boss().get(id),
        ("wow.challenge.realm", [realm]) => wow.challenge().realm(realm),
        ("wow.challenge.region", []) => Some(wow.challenge().region()),
        ("wow.guild.profile", [realm, guild, extra @ ..]) => wow.guild().profile(realm, guild, extra),
        ("wow.guild.members", [realm, guild, extra @ ..]) => wow.guild().members(realm, guild, extra),
        ("wow.guild.achievements", [realm, guild, extra @ ..]) => {
            wow.guild().achievements(realm, guild, extra)
        }
        ("wow.guild.news", [realm, guild, extra @ ..]) => wow.guild().news(realm, guild, extra),
        ("wow.guild.challenge", [realm, guild, extra @ ..]) => {
            wow.guild().challenge(realm, guild, extra)
        }
        ("wow.item", [id]) => wow.item().get(id),
        ("wow.item.set", [id]) => wow.item().set(id),
        ("wow.mounts", []) => Some(wow.mounts()),
        ("wow.pet.list", []) => Some(wow.pet().list()),
        ("wow.pet.ability", [id]) => wow.pet().ability(id),
        ("wow.pet.species", [id]) => wow.pet().species(id),
        ("wow.pet.stats", [species, rest @ ..]) => {
            let query = pet_stats_query(rest)?;
            wow.pet().stats(species, query)
        }
        ("wow.pvp", [bracket]) => wow.pvp(bracket),
        ("wow.quest", [id]) => wow.quest(id),
        ("wow.realm.status", []) => Some(wow.realm_status()),
        ("wow.recipe", [id]) => wow.recipe(id),
        ("wow.spell", [id]) => wow.spell(id),
        ("wow.resources.battlegroups", []) => Some(wow.resources().battlegroups()),
        ("wow.resources.character_races", []) => Some(wow.resources().character_races()),
        ("wow.resources.character_classes", []) => Some(wow.resources().character_classes()),
        ("wow.resources.character_achievements", []) => {
            Some(wow.resources().character_achievements())
        }
        ("wow.resources.guild_rewards", []) => Some(wow.resources().guild_rewards()),
        ("wow.resources.guild_perks", []) => Some(wow.resources().guild_perks()),
        ("wow.resources.guild_achievements", []) => Some(wow.resources().guild_achievements()),
        ("wow.resources.item_classes", []) => Some(wow.resources().item_classes()),
        ("wow.resources.talents", []) => Some(wow.resources().talents()),
        ("wow.resources.pet_types", []) => Some(wow.resources().pet_types()),
        ("wow.zone.list", []) => Some(wow.zone().list()),
        ("wow.zone", [id]) => wow.zone().get(id),
        ("wow.data.connected_realm.index", []) => data.connected_realm_index(),
        ("wow.data.connected_realm", [id]) => data.connected_realm(id),
        ("wow.data.keystone.index", [id]) => data.mythic_keystone_index(id),
        ("wow.data.keystone.leaderboard", [id, dungeon, period]) => {
            data.mythic_keystone_leaderboard(id, dungeon, period)
        }
        ("wow.data.raid", [raid, faction]) => data.raid_leaderboard(raid, faction),
        ("wow.data.mythic_challenge", []) => data.mythic_challenge_mode(),
        ("wow.data.class.index", []) => data.playable_class_index(),
        ("wow.data.class", [id]) => data.playable_class(id),
        ("wow.data.realm.index", []) => data.realm_index(),
        ("wow.data.realm", [slug]) => data.realm(slug),
        ("wow.data.region.index", []) => data.region_index(),
        ("wow.data.region", [id]) => data.region(id),
        ("wow.data.specialization.index", []) => data.specialization_index(),
        ("wow.data.specialization", [id]) => data.specialization(id),
        ("wow.data.token", []) => data.token(),
        ("d3.act.index", []) => Some(d3.act_index()),
        ("d3.act", [id]) => d3.act(id),
        ("d3.artisan", [slug]) => d3.artisan(slug),
        ("d3.recipe", [artisan, recipe]) => d3.recipe(artisan, recipe),
        ("d3.follower", [slug]) => d3.follower(slug),
        ("d3.class", [slug]) => d3.character_class(slug),
        ("d3.skill", [class, skill]) => d3.skill(class, skill),
        ("d3.item_type.index", []) => Some(d3.item_type_index()),
        ("d3.item_type", [slug]) => d3.item_type(slug),
        ("d3.item", [slug]) => d3.item(slug),
        ("d3.profile", [tag]) => d3.account(tag),
        ("d3.profile.hero", [tag, hero]) => d3.hero(tag, hero),
        ("d3.profile.hero_items", [tag, hero]) => d3.hero_items(tag, hero),
        ("d3.profile.follower_items", [tag, hero]) => d3.follower_items(tag, hero),
        ("d3.data.season.index", []) => d3_data.season_index(),
        ("d3.data.season", [id]) => d3_data.season(id),
        ("d3.data.season.leaderboard", [id, board]) => d3_data.season_leaderboard(id, board),
        ("d3.data.era.index", []) => d3_data.era_index(),
        ("d3.data.era", [id]) => d3_data.era(id),
        ("d3.data.era.leaderboard", [id, board]) => d3_data.era_leaderboard(id, board),
        ("sc2.profile", [id, region, name]) => sc2.profile(id, region, name),
        ("sc2.profile.ladders", [id, region, name]) => sc2.ladders(id, region, name),
        ("sc2.profile.matches", [id, region, name]) => sc2.match_history(id, region, name),
        ("sc2.ladder", [id]) => sc2.ladder(id),
        ("sc2.achievements", []) => Some(sc2.achievements()),
        ("sc2.rewards", []) => Some(sc2.rewards()),
        _ => None,
    }
}

fn pet_stats_query(args: &[&str]) -> Option<PetStatsQuery> {
    let mut query = PetStatsQuery::default();
    let slots = [&mut query.level, &mut query.breed_id, &mut query.quality_id];
    for (slot, value) in slots.into_iter().zip(args) {
        *slot = value.parse().ok()?;
    }
    Some(query)
}

fn riot_link(client: &LeagueOfLegends, name: &str, args: &[&str]) -> Option<String> {
    match (name, args) {
        ("lol.status", []) => Some(client.status()),
        ("lol.third_party_code", [id]) => client.third_party_code(id),
        ("lol.champion_mastery.all", [id]) => client.champion_masteries(id),
        ("lol.champion_mastery", [id, champion]) => client.champion_mastery(id, champion),
        ("lol.champion_mastery.score", [id]) => client.champion_mastery_score(id),
        ("lol.champion.rotations", []) => Some(client.champion_rotations()),
        ("lol.champion.all", []) => Some(client.champions()),
        ("lol.champion", [id]) => client.champion(id),
        ("lol.league.challenger", [queue]) => client.challenger_league(queue),
        ("lol.league.master", [queue]) => client.master_league(queue),
        ("lol.league", [id]) => client.league(id),
        ("lol.league.positions", [id]) => client.league_positions(id),
        ("lol.match", [id]) => client.match_by_id(id),
        ("lol.match.list", [id]) => client.match_list(id),
        ("lol.match.timeline", [id]) => client.match_timeline(id),
        ("lol.match.tournament_code", [code]) => client.matches_by_tournament_code(code),
        ("lol.spectator.active_game", [id]) => client.active_game(id),
        ("lol.spectator.featured", []) => Some(client.featured_games()),
        ("lol.summoner.by_account", [id]) => client.summoner_by_account(id),
        ("lol.summoner.by_name", [name]) => client.summoner_by_name(name),
        ("lol.summoner", [id]) => client.summoner(id),
        _ => None,
    }
}
