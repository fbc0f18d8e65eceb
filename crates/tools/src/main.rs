use anyhow::{Context, Result};
use clap::Parser;
use keyroom::room::generate_runtime_seed;
use keyroom::{FieldGenerator, KeyAddressing, RoomConfig};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate an ASCII dungeon room with doors and a key", long_about = None)]
struct Args {
    /// Number of rows (default 20, or the config value)
    #[arg(short, long)]
    rows: Option<usize>,
    /// Number of columns (default 40, or the config value)
    #[arg(short, long)]
    cols: Option<usize>,
    /// Seed for a reproducible run; a runtime seed is used otherwise
    #[arg(short, long)]
    seed: Option<u64>,
    /// Key addressing mode: `cell` or `flattened`
    #[arg(short, long)]
    addressing: Option<KeyAddressing>,
    /// JSON room profile; explicit flags take precedence over its values
    #[arg(long)]
    config: Option<PathBuf>,
    /// Text dump target
    #[arg(short, long, default_value = "field.txt")]
    output: PathBuf,
    /// Print the room written to the file instead of a freshly generated one
    #[arg(long)]
    same_room: bool,
    /// Save the resolved profile, seed included, so the run can be replayed with `--config`
    #[arg(long)]
    save_config: Option<PathBuf>,
}

fn resolve_config(args: &Args) -> Result<RoomConfig> {
    let mut config = match &args.config {
        Some(path) => RoomConfig::load(path)?,
        None => RoomConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if let Some(addressing) = args.addressing {
        config.addressing = addressing;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

/// Resolves the profile, pins its seed, and saves it when `--save-config` is given.
fn prepare_config(args: &Args) -> Result<RoomConfig> {
    let mut config = resolve_config(args)?;
    let seed = *config.seed.get_or_insert_with(generate_runtime_seed);
    info!("Rng seed: {seed}");

    if let Some(path) = &args.save_config {
        config
            .write_atomic(path)
            .with_context(|| format!("Failed to save room config: {}", path.display()))?;
        info!("Saved room config to {}", path.display());
    }
    Ok(config)
}

fn write_room_atomic(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("txt.tmp");
    fs::write(&tmp_path, text)
        .with_context(|| format!("Failed to write room file: {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path)
        .with_context(|| format!("Failed to move room file into place: {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = prepare_config(&args)?;
    let mut generator = FieldGenerator::from_config(&config).with_context(|| {
        format!("Invalid room settings: {}x{} ({})", config.rows, config.cols, config.addressing)
    })?;

    let room = generator.generate();
    write_room_atomic(&args.output, &room.to_text())?;
    info!(
        "Wrote {}x{} room to {} (doors={}, fingerprint={:016x})",
        room.rows(),
        room.cols(),
        args.output.display(),
        room.door_count(),
        room.fingerprint()
    );

    let shown = if args.same_room { room.to_text() } else { generator.generate_text() };
    print!("{shown}");

    Ok(())
}
