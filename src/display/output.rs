use colored::*;
use game_links::catalog::Endpoint;
use game_links::{ConnectionContext, Platform, Region};
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RegionRow {
    region: String,
    host: String,
    credentials: String,
    #[tabled(rename = "default locale")]
    default_locale: String,
    locales: String,
}

#[derive(Tabled)]
struct PlatformRow {
    platform: String,
    host: String,
}

#[derive(Tabled)]
struct EndpointRow {
    api: String,
    endpoint: String,
    arguments: String,
}

#[derive(Tabled)]
struct ContextRow {
    field: String,
    value: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    eprintln!("{} {}", "ℹ️".cyan(), message);
}

/// The link goes to stdout bare so it can be piped; everything else is decoration on stderr.
pub fn display_link(endpoint: &str, link: Option<&str>) {
    match link {
        Some(link) => println!("{}", link),
        None => eprintln!(
            "{} {} rejected its arguments, no link built",
            "⚠️".yellow(),
            endpoint.bold()
        ),
    }
}

pub fn display_regions() {
    println!("\n{}", "🌍 Blizzard regions".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<RegionRow> = Region::ALL
        .iter()
        .map(|region| {
            let descriptor = region.descriptor();
            RegionRow {
                region: region.to_string(),
                host: descriptor.hostname.to_string(),
                credentials: descriptor.credential_host.to_string(),
                default_locale: descriptor.default_locale.to_string(),
                locales: descriptor.locales.join(", "),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!("\n{}", "🎮 League of Legends platforms".bold().cyan());
    println!("{}\n", "=".repeat(60).cyan());

    let rows: Vec<PlatformRow> = Platform::ALL
        .iter()
        .map(|platform| PlatformRow {
            platform: platform.to_string(),
            host: platform.host().to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_endpoints(endpoints: &[Endpoint]) {
    let rows: Vec<EndpointRow> = endpoints
        .iter()
        .map(|endpoint| EndpointRow {
            api: endpoint.api.as_str().to_string(),
            endpoint: endpoint.name.to_string(),
            arguments: endpoint.args.join(" "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
    println!(
        "\n{}",
        "Arguments ending in ? are optional, ... takes any number of values".yellow()
    );
}

pub fn display_context(context: &ConnectionContext) {
    println!(
        "\n{}",
        format!("🔗 Connection context for {}", context.region)
            .bold()
            .cyan()
    );
    println!("{}\n", "=".repeat(60).cyan());

    let rows = vec![
        ContextRow {
            field: "root".to_string(),
            value: context.root.to_string(),
        },
        ContextRow {
            field: "credentials".to_string(),
            value: context.credential_host.to_string(),
        },
        ContextRow {
            field: "locale".to_string(),
            value: context.locale.to_string(),
        },
        ContextRow {
            field: "key".to_string(),
            value: mask(context.key.as_deref()),
        },
        ContextRow {
            field: "secret".to_string(),
            value: mask(context.secret.as_deref()),
        },
        ContextRow {
            field: "token".to_string(),
            value: mask(context.token.as_deref()),
        },
    ];

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

fn mask(value: Option<&str>) -> String {
    match value {
        None => "(none)".dimmed().to_string(),
        Some(v) if v.chars().count() <= 4 => "****".to_string(),
        Some(v) => format!("{}****", v.chars().take(4).collect::<String>()),
    }
}
