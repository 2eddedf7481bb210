mod display;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use display::output::{
    display_context, display_endpoints, display_error, display_info, display_link,
    display_regions,
};
use game_links::catalog::{self, ENDPOINTS};
use game_links::logging::init_tracing;
use game_links::{Blizzard, Config, Credentials, Error, LeagueOfLegends, Platform, Region};

#[derive(Parser, Debug)]
#[command(name = "game_links")]
#[command(about = "Build Blizzard and Riot API request links", long_about = None)]
struct Cli {
    /// Log rejected arguments and resolved contexts to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the Blizzard region table and League of Legends platforms
    Regions,

    /// List every endpoint name with its arguments
    Endpoints {
        /// Only show endpoints whose name starts with this prefix (e.g. wow.data)
        prefix: Option<String>,
    },

    /// Resolve a Blizzard region code and locale to hosts and credentials
    Resolve {
        /// Region code (us, eu, sea, kr, tw, cn)
        region: String,

        /// Requested locale; falls back to the region default when unsupported
        #[arg(short, long)]
        locale: Option<String>,

        /// Print the context as JSON, credentials included
        #[arg(long)]
        json: bool,
    },

    /// Build one link, e.g. `link wow.character.items Medivh Uther stats`
    Link {
        /// Dotted endpoint name (see `endpoints`)
        endpoint: String,

        /// Endpoint arguments in order
        args: Vec<String>,

        /// Blizzard region override (default: BLIZZARD_REGION or eu)
        #[arg(short, long)]
        region: Option<String>,

        /// Blizzard locale override (default: BLIZZARD_LOCALE or en_GB)
        #[arg(short, long)]
        locale: Option<String>,

        /// Access token override for Game Data and OAuth profile endpoints
        #[arg(short, long)]
        token: Option<String>,

        /// League of Legends platform override (default: RIOT_REGION or euw1)
        #[arg(short, long)]
        platform: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Regions => display_regions(),
        Command::Endpoints { prefix } => {
            let endpoints: Vec<_> = ENDPOINTS
                .iter()
                .filter(|e| prefix.as_deref().map_or(true, |p| e.name.starts_with(p)))
                .copied()
                .collect();
            display_endpoints(&endpoints);
        }
        Command::Resolve {
            region,
            locale,
            json,
        } => resolve(&region, locale.as_deref(), json)?,
        Command::Link {
            endpoint,
            args,
            region,
            locale,
            token,
            platform,
        } => {
            let config = Config::from_env()?;

            let blizzard = match config.blizzard {
                Some(blizzard_config) => {
                    let mut client = Blizzard::new(blizzard_config)?;
                    if let Some(region) = region {
                        client = client.with_region(region.parse::<Region>()?);
                    }
                    if let Some(locale) = locale {
                        client = client.with_locale(locale);
                    }
                    if let Some(token) = token {
                        client = client.with_token(token);
                    }
                    Some(client)
                }
                None => None,
            };

            let riot = match config.riot {
                Some(riot_config) => {
                    let mut client = LeagueOfLegends::new(riot_config)?;
                    if let Some(platform) = platform {
                        client = client.with_platform(platform.parse::<Platform>()?);
                    }
                    Some(client)
                }
                None => None,
            };

            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let link = catalog::link(blizzard.as_ref(), riot.as_ref(), &endpoint, &args)?;
            display_link(&endpoint, link.as_deref());
            if link.is_none() {
                return Err(anyhow!("could not build a link for {}", endpoint));
            }
        }
    }

    Ok(())
}

fn resolve(region: &str, locale: Option<&str>, json: bool) -> anyhow::Result<()> {
    // Credentials are optional here: resolving works without any configured.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(Error::Config(_)) => {
            display_info("No credentials configured, resolving hosts only");
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    let credentials = config
        .blizzard
        .as_ref()
        .map(|b| Credentials {
            key: Some(b.key.as_str()),
            secret: Some(b.secret.as_str()),
            token: b.token.as_deref(),
        })
        .unwrap_or_default();

    let context = game_links::resolve(region, locale, credentials)?;
    if json {
        let out = serde_json::to_string_pretty(&context).context("serializing context")?;
        println!("{}", out);
    } else {
        display_context(&context);
    }
    Ok(())
}
