use clap::Parser;
use rankcard_rs::{Captions, CardConfig, CardRenderer, FontConfig, HttpImageFetcher, Status};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// rankcard: Render a profile rank card to a PNG file
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to output PNG file to be created
    #[clap(short, long)]
    pub output: String,

    /// Avatar image URL (http, https, file or data)
    #[clap(long)]
    pub avatar: Option<String>,

    /// Username, truncated past 11 characters
    #[clap(long)]
    pub username: Option<String>,

    /// Discriminator, drawn after the username with a leading '#'
    #[clap(long)]
    pub discriminator: Option<String>,

    #[clap(long)]
    pub rank: Option<u64>,

    #[clap(long)]
    pub level: Option<u64>,

    #[clap(long)]
    pub current_xp: Option<u64>,

    #[clap(long)]
    pub required_xp: Option<u64>,

    /// Presence status. One of online, idle, dnd, offline, invisible
    #[clap(long, default_value = "online")]
    pub status: Status,

    /// Card width in pixels
    #[clap(long, default_value_t = 930)]
    pub width: u32,

    /// Card height in pixels
    #[clap(long, default_value_t = 280)]
    pub height: u32,

    #[clap(long)]
    pub background_color: Option<String>,

    #[clap(long)]
    pub overlay_color: Option<String>,

    #[clap(long)]
    pub progressbar_color: Option<String>,

    #[clap(long)]
    pub progressbar_track_color: Option<String>,

    #[clap(long)]
    pub rank_color: Option<String>,

    #[clap(long)]
    pub rank_text_color: Option<String>,

    #[clap(long)]
    pub level_color: Option<String>,

    #[clap(long)]
    pub level_text_color: Option<String>,

    #[clap(long)]
    pub current_xp_color: Option<String>,

    #[clap(long)]
    pub required_xp_color: Option<String>,

    #[clap(long)]
    pub username_color: Option<String>,

    #[clap(long)]
    pub discriminator_color: Option<String>,

    /// Draw the progress bar as complete
    #[clap(long)]
    pub maxed: bool,

    /// Comma-separated colors for the completed bar gradient
    #[clap(long, value_delimiter = ',')]
    pub gradient: Vec<String>,

    /// Badge image URL, drawn in place of the XP text when maxed
    #[clap(long)]
    pub badge: Option<String>,

    /// Caption drawn before the rank number
    #[clap(long, default_value = "Rank")]
    pub rank_caption: String,

    /// Caption drawn before the level number
    #[clap(long, default_value = "Level")]
    pub level_caption: String,

    /// Font file to register (repeatable)
    #[clap(long)]
    pub font_file: Vec<PathBuf>,

    /// Additional directory to scan for fonts (repeatable)
    #[clap(long)]
    pub font_dir: Vec<PathBuf>,

    /// Don't load system fonts
    #[clap(long)]
    pub no_system_fonts: bool,

    /// Timeout in seconds for each image request
    #[clap(long)]
    pub timeout: Option<u64>,

    /// Log render phases at debug level
    #[clap(short, long)]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args: Args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Invalid card options: {err}");
            process::exit(1);
        }
    };

    let fonts = match font_config(&args) {
        Ok(fonts) => fonts,
        Err(err) => {
            eprintln!("Failed to load fonts: {err}");
            process::exit(1);
        }
    };

    let mut fetcher = HttpImageFetcher::new();
    if let Some(secs) = args.timeout {
        fetcher = fetcher.with_timeout(Duration::from_secs(secs));
    }
    let renderer = CardRenderer::with_fetcher(fonts.resolve(), fetcher);

    let captions = Captions {
        rank: args.rank_caption.clone(),
        level: args.level_caption.clone(),
    };
    let png = match renderer.render(&config, &captions).await {
        Ok(png) => png,
        Err(err) => {
            eprintln!("Card rendering failed: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = std::fs::write(&args.output, png) {
        eprintln!("Failed to write card to {}\n{}", args.output, err);
        process::exit(1);
    }
    log::info!("wrote {}", args.output);
}

fn build_config(args: &Args) -> Result<CardConfig, rankcard_rs::CardError> {
    let mut config = CardConfig::new();
    config
        .set_size(args.width, args.height)
        .set_status(args.status);

    if let Some(color) = &args.background_color {
        config.set_background_color(color);
    }
    if let Some(color) = &args.overlay_color {
        config.set_overlay_color(color);
    }
    if let Some(color) = &args.progressbar_color {
        config.set_progressbar_color(color);
    }
    if let Some(color) = &args.progressbar_track_color {
        config.set_progressbar_track_color(color);
    }
    if let Some(avatar) = &args.avatar {
        config.set_avatar(avatar)?;
    }
    if let Some(rank) = args.rank {
        config.set_rank(
            rank,
            args.rank_color.as_deref(),
            args.rank_text_color.as_deref(),
        );
    }
    if let Some(level) = args.level {
        config.set_level(
            level,
            args.level_color.as_deref(),
            args.level_text_color.as_deref(),
        );
    }
    if let Some(xp) = args.current_xp {
        config.set_current_xp(xp, args.current_xp_color.as_deref());
    }
    if let Some(xp) = args.required_xp {
        config.set_required_xp(xp, args.required_xp_color.as_deref());
    }
    if let Some(name) = &args.username {
        config.set_username(name, args.username_color.as_deref());
    }
    if let Some(discriminator) = &args.discriminator {
        config.set_discriminator(discriminator, args.discriminator_color.as_deref());
    }

    let stops = (!args.gradient.is_empty()).then(|| args.gradient.clone());
    if args.maxed || stops.is_some() || args.badge.is_some() {
        config.set_maxed(args.maxed, stops, args.badge.as_deref())?;
    }
    Ok(config)
}

fn font_config(args: &Args) -> std::io::Result<FontConfig> {
    let mut fonts = FontConfig {
        load_system_fonts: !args.no_system_fonts,
        font_dirs: args.font_dir.clone(),
        ..Default::default()
    };
    for path in &args.font_file {
        fonts.add_font_file(path)?;
    }
    Ok(fonts)
}
