use std::path::PathBuf;

use clap::Parser;
use knight_distance::board::Board;
use knight_distance::coord::Square;
use knight_distance::grid::DistanceGrid;
use knight_distance::oracle::bfs_distances;
use knight_distance::verify::{verify_all, VerifyConfig};

/// Compare the closed-form knight distance against breadth-first search.
///
/// Prints nothing but a summary line when every board agrees.
#[derive(Debug, Parser)]
#[command(name = "knight-verify", version)]
struct Args {
    /// JSON file with `max_rows` / `max_cols`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Largest number of rows to check (overrides the config file).
    #[arg(long)]
    max_rows: Option<u32>,

    /// Largest number of columns to check (overrides the config file).
    #[arg(long)]
    max_cols: Option<u32>,

    /// Emit the summary as JSON.
    #[arg(long)]
    json: bool,

    /// Print closed-form and BFS grids for one board and source instead:
    /// `--show R C Gr Gc`.
    #[arg(long, num_args = 4, value_names = ["R", "C", "GR", "GC"])]
    show: Option<Vec<u32>>,
}

fn show(values: &[u32]) -> Result<bool, String> {
    let [rows, cols, row, col] = values else {
        return Err("--show takes exactly 4 values".to_string());
    };
    let board = Board::new(*rows, *cols).map_err(|e| e.to_string())?;
    let source = Square::new(*row, *col);
    board.check_square(source).map_err(|e| e.to_string())?;

    let calc = DistanceGrid::closed_form(&board, source);
    let map = bfs_distances(&board, source);
    let bfs = DistanceGrid::from_oracle(&map);
    println!(
        "board {} from {}: {} reachable, eccentricity calc={}, bfs={}",
        calc.board(),
        calc.source(),
        map.reachable_count(),
        calc.eccentricity(),
        bfs.eccentricity()
    );
    print!("{}", calc.side_by_side(&bfs, "calc", "BFS true distance"));
    let diff = calc.differences(&bfs);
    Ok(diff.is_empty())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Some(values) = &args.show {
        match show(values) {
            Ok(true) => return,
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Invalid --show arguments: {e}");
                std::process::exit(2);
            }
        }
    }

    let mut config = match &args.config {
        Some(path) => match VerifyConfig::from_json_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Invalid config: {e}");
                std::process::exit(2);
            }
        },
        None => VerifyConfig::default(),
    };
    if let Some(r) = args.max_rows {
        config.max_rows = r;
    }
    if let Some(c) = args.max_cols {
        config.max_cols = c;
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {e}");
        std::process::exit(2);
    }

    let summary = verify_all(&config);

    if args.json {
        let out = serde_json::json!({
            "config": config,
            "summary": summary,
        });
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("Failed to encode summary: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for report in &summary.reports {
            println!();
            print!("{report}");
        }
        println!(
            "checked {} boards up to {}x{}: {} mismatches",
            summary.boards,
            config.max_rows,
            config.max_cols,
            summary.mismatch_count()
        );
    }

    if !summary.is_clean() {
        std::process::exit(1);
    }
}
