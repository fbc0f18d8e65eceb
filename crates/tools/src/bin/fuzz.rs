use anyhow::{Result, bail};
use clap::Parser;
use keyroom::room::{MAX_DOORS, MIN_SIDE, classify};
use keyroom::{CellKind, FieldGenerator, GeneratedRoom, Glyph, KeyAddressing, Pos};
use log::{debug, info};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    runs: u32,
    #[arg(long, default_value_t = 30)]
    max_rows: usize,
    #[arg(long, default_value_t = 60)]
    max_cols: usize,
    #[arg(short, long, default_value_t = KeyAddressing::Cell)]
    addressing: KeyAddressing,
}

#[derive(Serialize, Default)]
struct FuzzReport {
    runs: u32,
    skipped_shapes: u32,
    door_histogram: [u32; MAX_DOORS as usize + 1],
    interior_cells: u64,
    decorations: u64,
    decoration_ratio: f64,
    key_targets: BTreeMap<&'static str, u32>,
}

fn pick_side(rng: &mut ChaCha8Rng, max_side: usize) -> usize {
    MIN_SIDE + (rng.next_u64() as usize % (max_side - MIN_SIDE + 1))
}

fn check_room(room: &GeneratedRoom, addressing: KeyAddressing) -> Result<()> {
    let (rows, cols) = (room.rows(), room.cols());
    let text = room.to_text();
    let key_cell = room.key().cell(rows, cols);

    if room.door_count() > MAX_DOORS {
        bail!("Invariant failed: {} doors", room.door_count());
    }
    if room.count(Glyph::Door) != usize::from(room.door_count()) {
        bail!(
            "Invariant failed: door_count {} but {} doors drawn\n{text}",
            room.door_count(),
            room.count(Glyph::Door)
        );
    }
    if text.matches('K').count() != 1 {
        bail!("Invariant failed: expected one key in\n{text}");
    }
    if addressing == KeyAddressing::Flattened {
        let pick = room.key().pick;
        let expected = pick.y as usize * rows + pick.x as usize;
        if text.find('K') != Some(expected) {
            bail!("Invariant failed: flattened key not at offset {expected}\n{text}");
        }
    }

    for row in 0..rows {
        for col in 0..cols {
            let pos = Pos::from_row_col(row, col);
            let Some(glyph) = room.glyph_at(pos) else {
                bail!("Invariant failed: missing cell {pos:?}");
            };
            if Some(pos) == key_cell {
                continue;
            }
            let allowed = match classify(rows, cols, row, col) {
                CellKind::Corner => glyph == Glyph::Wall,
                CellKind::Border => matches!(glyph, Glyph::Wall | Glyph::Door),
                CellKind::Interior => matches!(glyph, Glyph::Empty | Glyph::Decoration),
            };
            if !allowed {
                bail!("Invariant failed: {glyph:?} at {pos:?} in {rows}x{cols} room\n{text}");
            }
        }
    }

    let key_is_interior = key_cell.is_some_and(|pos| {
        classify(rows, cols, pos.y as usize, pos.x as usize) == CellKind::Interior
    });
    if addressing == KeyAddressing::Cell && !key_is_interior {
        bail!("Invariant failed: cell-addressed key at {key_cell:?}");
    }
    Ok(())
}

fn key_target(room: &GeneratedRoom) -> &'static str {
    let (rows, cols) = (room.rows(), room.cols());
    match room.key().cell(rows, cols) {
        None => "line_break",
        Some(pos) => match classify(rows, cols, pos.y as usize, pos.x as usize) {
            CellKind::Corner => "corner",
            CellKind::Border => "border",
            CellKind::Interior => "interior",
        },
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.max_rows < MIN_SIDE || args.max_cols < MIN_SIDE {
        bail!("--max-rows and --max-cols must be at least {MIN_SIDE}");
    }

    info!("Starting room fuzz on seed {} for {} runs ({})", args.seed, args.runs, args.addressing);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut report = FuzzReport::default();

    while report.runs < args.runs {
        let rows = pick_side(&mut rng, args.max_rows);
        let cols = pick_side(&mut rng, args.max_cols);
        let room_seed = rng.next_u64();

        let generator = FieldGenerator::with_seed(rows, cols, room_seed)
            .and_then(|generator| generator.with_addressing(args.addressing));
        let mut generator = match generator {
            Ok(generator) => generator,
            Err(err) => {
                debug!("Skipping shape: {err}");
                report.skipped_shapes += 1;
                if report.skipped_shapes > args.runs.saturating_mul(10) {
                    bail!("No usable shapes for {} addressing", args.addressing);
                }
                continue;
            }
        };

        let room = generator.generate();
        check_room(&room, args.addressing)?;

        report.runs += 1;
        report.door_histogram[usize::from(room.door_count())] += 1;
        report.interior_cells += ((rows - 2) * (cols - 2)) as u64;
        report.decorations += room.count(Glyph::Decoration) as u64;
        *report.key_targets.entry(key_target(&room)).or_default() += 1;
    }

    if report.interior_cells > 0 {
        report.decoration_ratio = report.decorations as f64 / report.interior_cells as f64;
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    info!("Fuzzing completed successfully.");
    Ok(())
}
