use anyhow::Result;
use clap::Parser;
use impsort_import_order::Config;
use log::{debug, info};
use std::io::BufWriter;
use std::time::Instant;

fn main() -> Result<()> {
    env_logger::init();

    // stdout is line-buffered; a BufWriter keeps per-violation writes cheap.
    let mut stdout = BufWriter::new(std::io::stdout());

    let cfg = Config::parse();
    debug!("Parsed CLI arguments: {:?}", cfg);

    let start = Instant::now();

    let result = impsort_import_order::run_import_order_check(cfg)?;

    impsort_import_order::print_report(&mut stdout, &result)?;

    info!(
        "Finished in {}ms on {} files",
        start.elapsed().as_millis(),
        result.files_checked
    );

    // Diagnostics are informational; a completed run always exits cleanly.
    Ok(())
}
