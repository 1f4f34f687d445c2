// ABOUTME: CLI binary that harvests Russian common nouns and writes parsed_words.json.
// ABOUTME: Prints word and category counts on stdout; logs go to stderr.

use std::process::ExitCode;

use clap::Parser;
use randgen_harvest::app::{init_logging, CommonArgs};
use randgen_harvest::filters::Category;
use randgen_harvest::{harvest_words, save_json, WORDS_FILE};

#[derive(Parser, Debug)]
#[command(name = "parse-words")]
#[command(about = "Collect Russian words from dictionaries and sort them into categories")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Do not merge the built-in list of common words
    #[arg(long = "skip-common")]
    skip_common: bool,
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
    let dataset = harvest_words(&harvester, &catalog.words, !args.skip_common).await;

    let path = args.common.output_path(WORDS_FILE);
    if let Err(e) = save_json(&path, &dataset) {
        eprintln!("error writing {:?}: {}", path, e);
        return ExitCode::from(1);
    }

    println!("saved {}", path.display());
    println!("words: {}", dataset.total_words);
    println!("categories: {}", Category::ALL.len());
    ExitCode::SUCCESS
}
