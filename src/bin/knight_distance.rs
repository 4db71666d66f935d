use std::io::{self, BufWriter};

use knight_distance::query::run_batch;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let stdout = BufWriter::new(io::stdout().lock());
    if let Err(e) = run_batch(stdin.lock(), stdout) {
        eprintln!("knight-distance: {e}");
        std::process::exit(2);
    }
}
