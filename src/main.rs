use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};

use stylespace_lib::database::wardrobe_repo;
use stylespace_lib::{
    connect_database, generate_outfits, load_settings, settings_from_env, DisabledImageProvider,
    GenerationRequest, HttpImageProvider, HttpOutfitProvider, WardrobeItem,
};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "stylespace")]
#[command(version, about = "Suggest outfits from a wardrobe")]
struct Args {
    /// JSON file holding an array of wardrobe items
    wardrobe: Option<PathBuf>,

    #[arg(default_value = "casual")]
    occasion: String,

    #[arg(default_value = "day")]
    time_of_day: String,

    #[arg(default_value = "mild")]
    weather: String,

    /// SQLite database for settings overrides and stored wardrobes
    #[arg(long)]
    db: Option<PathBuf>,

    /// Load the wardrobe of this owner from --db instead of a file
    #[arg(long)]
    owner: Option<String>,

    #[arg(long)]
    premium: bool,

    /// `en` or `tr`
    #[arg(long)]
    language: Option<String>,

    #[arg(long)]
    gender: Option<String>,
}

fn read_wardrobe(path: &Path) -> anyhow::Result<Vec<WardrobeItem>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read wardrobe file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("{} is not a JSON array of wardrobe items", path.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let pool = match &args.db {
        Some(path) => Some(connect_database(path).await?),
        None => None,
    };
    let settings = match &pool {
        Some(pool) => load_settings(pool).await,
        None => settings_from_env(),
    };

    let wardrobe_items = match (&args.wardrobe, &args.owner, &pool) {
        (Some(path), _, _) => read_wardrobe(path)?,
        (None, Some(owner), Some(pool)) => wardrobe_repo::list_items_for_owner(pool, owner).await?,
        (None, Some(_), None) => anyhow::bail!("--owner needs --db"),
        (None, None, _) => anyhow::bail!("Pass a wardrobe file or --db with --owner"),
    };

    let request = GenerationRequest {
        wardrobe_items,
        occasion: args.occasion,
        time_of_day: args.time_of_day,
        weather: args.weather,
        user_gender: args.gender,
        is_premium: args.premium,
        language: args.language,
    };

    let text = HttpOutfitProvider::from_settings(&settings)?;
    let response = if settings.image_generation {
        let images = HttpImageProvider::from_settings(&settings)?;
        generate_outfits(&request, &settings, &text, &images).await?
    } else {
        generate_outfits(&request, &settings, &text, &DisabledImageProvider).await?
    };

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
