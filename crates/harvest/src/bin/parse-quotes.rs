// ABOUTME: CLI binary that harvests Russian quotes and writes parsed_quotes.json.
// ABOUTME: Prints the quote count on stdout; logs go to stderr.

use std::process::ExitCode;

use clap::Parser;
use randgen_harvest::app::{init_logging, CommonArgs};
use randgen_harvest::{harvest_quotes, save_json, QUOTES_FILE};

#[derive(Parser, Debug)]
#[command(name = "parse-quotes")]
#[command(about = "Collect Russian quotes with their authors from public pages")]
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
    let dataset = harvest_quotes(&harvester, &catalog.quotes).await;

    let path = args.common.output_path(QUOTES_FILE);
    if let Err(e) = save_json(&path, &dataset) {
        eprintln!("error writing {:?}: {}", path, e);
        return ExitCode::from(1);
    }

    println!("saved {}", path.display());
    println!("quotes: {}", dataset.total_quotes);
    ExitCode::SUCCESS
}
