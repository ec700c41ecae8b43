use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tilefit", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Lay out a JSON array of tiles and print the layout as JSON.
    Layout(LayoutArgs),
    /// Time repeated layouts of a synthetic tile set.
    Bench(BenchArgs),
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input tiles JSON (array of tiles).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Viewport width in pixels.
    #[arg(long)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long)]
    height: f64,

    /// Crop floor for croppable tiles.
    #[arg(long, default_value_t = tilefit::MIN_ASPECT_RATIO_DEFAULT)]
    min_aspect_ratio: f64,

    /// Row counts searched exhaustively before local search.
    #[arg(long, default_value_t = tilefit::DEFAULT_EXHAUSTIVE_ROW_LIMIT)]
    exhaustive_rows: usize,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BenchArgs {
    /// Number of tiles in the synthetic set.
    #[arg(long, default_value_t = 25)]
    tiles: usize,

    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1920.0)]
    width: f64,

    /// Viewport height in pixels.
    #[arg(long, default_value_t = 1080.0)]
    height: f64,

    /// Number of timed layouts.
    #[arg(long, default_value_t = 200)]
    iterations: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Layout(args) => cmd_layout(args),
        Command::Bench(args) => cmd_bench(args),
    }
}

fn read_tiles_json(path: &Path) -> anyhow::Result<Vec<tilefit::InputTile>> {
    let f = File::open(path).with_context(|| format!("open tiles '{}'", path.display()))?;
    let r = BufReader::new(f);
    let tiles: Vec<tilefit::InputTile> =
        serde_json::from_reader(r).with_context(|| "parse tiles JSON")?;
    Ok(tiles)
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let tiles = read_tiles_json(&args.in_path)?;
    let engine = tilefit::LayoutEngine::new(tilefit::LayoutConfig {
        min_aspect_ratio: args.min_aspect_ratio,
        exhaustive_row_limit: args.exhaustive_rows,
    })?;
    let layout = engine.compute_layout(&tiles, args.width, args.height)?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            let f = File::create(path)
                .with_context(|| format!("create layout '{}'", path.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &layout).with_context(|| "write layout JSON")?;
            w.flush()?;
            eprintln!(
                "wrote {} ({} rows, viewport use {:.3})",
                path.display(),
                layout.rows,
                layout.viewport_use
            );
        }
        None => {
            let stdout = std::io::stdout();
            let mut w = stdout.lock();
            serde_json::to_writer_pretty(&mut w, &layout).with_context(|| "write layout JSON")?;
            writeln!(w)?;
        }
    }
    Ok(())
}

fn synthetic_tiles(n: usize) -> Vec<tilefit::InputTile> {
    const RATIOS: [f64; 4] = [16.0 / 9.0, 4.0 / 3.0, 1.0, 9.0 / 16.0];
    (0..n)
        .map(|i| {
            tilefit::InputTile::new(format!("tile-{i}"), RATIOS[i % RATIOS.len()])
                .croppable(i % 3 != 2)
                .focused(i == 0)
                .with_video(i % 5 != 4)
        })
        .collect()
}

fn cmd_bench(args: BenchArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.iterations > 0, "--iterations must be > 0");
    let tiles = synthetic_tiles(args.tiles);
    let engine = tilefit::LayoutEngine::default();

    let mut last = None;
    let start = Instant::now();
    for _ in 0..args.iterations {
        last = Some(engine.compute_layout(&tiles, args.width, args.height)?);
    }
    let elapsed = start.elapsed();
    let layout = last.context("no layout computed")?;

    eprintln!(
        "{} tiles in {}x{}: {} rows, viewport use {:.3}",
        args.tiles, args.width, args.height, layout.rows, layout.viewport_use
    );
    eprintln!(
        "mean {:.3} ms over {} iterations",
        elapsed.as_secs_f64() * 1000.0 / f64::from(args.iterations),
        args.iterations
    );
    Ok(())
}
