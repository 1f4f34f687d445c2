// ABOUTME: CLI binary that harvests Russian first names and writes parsed_names.json.
// ABOUTME: Prints per-gender counts on stdout; logs go to stderr.

use std::process::ExitCode;

use clap::Parser;
use randgen_harvest::app::{init_logging, CommonArgs};
use randgen_harvest::{harvest_names, save_json, NAMES_FILE};

#[derive(Parser, Debug)]
#[command(name = "parse-names")]
#[command(about = "Collect Russian male and female names from public pages")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.common.log_level);

    let catalog = match args.common.catalog() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error loading sources: {}", e);
            return ExitCode::from(1);
        }
    };

    let harvester = args.common.harvester();
    let dataset = harvest_names(&harvester, &catalog.names).await;

    let path = args.common.output_path(NAMES_FILE);
    if let Err(e) = save_json(&path, &dataset) {
        eprintln!("error writing {:?}: {}", path, e);
        return ExitCode::from(1);
    }

    println!("saved {}", path.display());
    println!("male names: {}", dataset.total_male);
    println!("female names: {}", dataset.total_female);
    println!("total names: {}", dataset.total_names);
    ExitCode::SUCCESS
}
