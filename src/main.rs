use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use playlist_gather::gather::{FsCopier, SourceBase};
use playlist_gather::playlist::UrlDecoding;
use playlist_gather::{GatherConfig, GatherPipeline};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Where relative track locations are looked up
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SourceBaseArg {
    /// Directory of the playlist-gather executable
    Program,
    /// Directory of the playlist file
    Playlist,
}

#[derive(Parser, Debug)]
#[command(name = "playlist-gather")]
#[command(about = "Copy the tracks of an XSPF/M3U/M3U8 playlist into one folder", long_about = None)]
struct Args {
    /// Playlist name without extension (prompted for when omitted)
    name: Option<String>,

    /// Directory searched for the playlist
    #[arg(short = 'd', long, default_value = ".")]
    dir: String,

    /// Directory the playlist folder is created in
    #[arg(short = 'o', long, default_value = ".")]
    output: String,

    /// Anchor for relative track locations
    #[arg(long, value_enum, default_value = "program")]
    source_base: SourceBaseArg,

    /// Explicit anchor for relative track locations (overrides --source-base)
    #[arg(long)]
    base_dir: Option<String>,

    /// Percent-decode XSPF locations fully instead of only %20
    #[arg(long)]
    full_url_decode: bool,

    /// Check every copy against its source after the run
    #[arg(long)]
    verify: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

/// Ask the operator for a playlist name on stdin
fn prompt_for_name() -> Result<String> {
    print!("Playlist name (without extension): ");
    io::stdout().flush()?;

    let mut name = String::new();
    io::stdin()
        .lock()
        .read_line(&mut name)
        .context("Failed to read playlist name")?;
    Ok(name.trim().to_string())
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let name = match args.name {
        Some(name) => name,
        None => prompt_for_name()?,
    };

    let source_base = match (&args.base_dir, args.source_base) {
        (Some(dir), _) => SourceBase::Explicit(expand(dir)),
        (None, SourceBaseArg::Program) => SourceBase::ProgramDir,
        (None, SourceBaseArg::Playlist) => SourceBase::PlaylistDir,
    };
    if source_base == SourceBase::ProgramDir {
        log::debug!(
            "Relative track locations resolve against the executable's directory, \
             not the playlist's; pass --source-base playlist to change this"
        );
    }

    let url_decoding = if args.full_url_decode {
        UrlDecoding::Full
    } else {
        UrlDecoding::SpacesOnly
    };

    let config = GatherConfig::new(expand(&args.dir))
        .with_output_root(expand(&args.output))
        .with_source_base(source_base)
        .with_url_decoding(url_decoding)
        .with_verify(args.verify);

    let pipeline = GatherPipeline::new(config, FsCopier::new());
    let report = pipeline.run(&name)?;

    log::info!(
        "{}: {} copied, {} failed, {} entries skipped",
        report.format,
        report.copies.copied_count(),
        report.copies.failed_count(),
        report.skipped.len()
    );
    if report.verification.is_some() {
        log::info!("✅ Verification passed!");
    }
    log::info!("Tracks gathered in: {:?}", report.destination);

    Ok(())
}
