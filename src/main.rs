use std::path::Path;

use clap::Parser;
use futures::stream::StreamExt;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use clash_api::api_models::{Clan, Player};
use clash_api::{decode, ClashClient, Config};
use cli::{Cli, Command, Kind};

mod cli;

// Max number of API requests to have in flight at once.
const CONCURRENT_REQUESTS: usize = 10;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Player { tags } => fetch_players(tags).await?,
        Command::Clan { tag } => fetch_clan(&tag).await?,
        Command::Decode { kind, file } => decode_file(kind, &file)?,
    }

    Ok(())
}

fn client_from_env() -> anyhow::Result<ClashClient> {
    let config = Config::from_env()?;
    let client = ClashClient::new(&config)?;
    info!(
        "✅ Client ready for {} with {} token(s).",
        config.api_url,
        config.api_keys.len()
    );

    Ok(client)
}

async fn fetch_players(tags: Vec<String>) -> anyhow::Result<()> {
    let client = client_from_env()?;

    futures::stream::iter(tags)
        .for_each_concurrent(CONCURRENT_REQUESTS, |tag| {
            let client = client.clone();

            async move {
                info!("-> Fetching tag: {}", tag);
                match client.get_player(&tag).await {
                    Ok(player) => info!("   {}", player_summary(&player)),
                    Err(e) => error!("   ❌ API Error for tag {}: {}", tag, e),
                }
            }
        })
        .await;

    Ok(())
}

async fn fetch_clan(tag: &str) -> anyhow::Result<()> {
    let client = client_from_env()?;
    let clan = client.get_clan(tag).await?;

    info!(
        "{} ({}) level {}, {} members",
        clan.name().unwrap_or("?"),
        clan.tag().unwrap_or(tag),
        show(clan.clan_level()),
        show(clan.members()),
    );

    for member in clan.member_list().unwrap_or_default() {
        info!(
            "  #{:<2} {:<16} {:<8} {} trophies",
            show(member.clan_rank()),
            member.name().unwrap_or("?"),
            member.role().map(|role| role.as_str()).unwrap_or("-"),
            show(member.trophies()),
        );
    }

    Ok(())
}

fn decode_file(kind: Kind, file: &Path) -> anyhow::Result<()> {
    let bytes = std::fs::read(file)?;

    let pretty = match kind {
        Kind::Player => serde_json::to_string_pretty(&decode::from_slice::<Player>(&bytes)?)?,
        Kind::Clan => serde_json::to_string_pretty(&decode::from_slice::<Clan>(&bytes)?)?,
    };
    println!("{pretty}");

    Ok(())
}

fn player_summary(player: &Player) -> String {
    let clan = player
        .clan()
        .and_then(|clan| clan.name())
        .unwrap_or("no clan");

    format!(
        "{} ({}) TH{} {} trophies, BH{} {} versus trophies, {}",
        player.name().unwrap_or("?"),
        player.tag().unwrap_or("?"),
        show(player.town_hall_level()),
        show(player.trophies()),
        show(player.builder_hall_level()),
        show(player.versus_trophies()),
        clan,
    )
}

fn show(value: Option<i32>) -> String {
    value.map_or_else(|| "-".to_string(), |value| value.to_string())
}
