use cinerec::dataset;
use cinerec::heatmap;
use cinerec_core::{Catalog, Error, Recommender};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A small content-based movie recommender
#[derive(Parser, Debug)]
#[command(name = "cinerec")]
#[command(about = "Recommend movies by genre tag similarity", long_about = None)]
struct Args {
    /// Path to a JSON catalog file (array of items); built-in sample when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Number of recommendations per query
    #[arg(long, default_value_t = 3)]
    top_n: usize,

    /// Print the pairwise similarity grid before the prompt loop
    #[arg(long)]
    heatmap: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    anyhow::ensure!(args.top_n >= 1, "--top-n must be at least 1");

    let catalog = match &args.catalog {
        Some(path) => {
            info!("Loading catalog from {:?}", path);
            let file = File::open(path)?;
            Catalog::from_json_reader(BufReader::new(file))?
        }
        None => dataset::sample_catalog(),
    };
    info!("Catalog loaded: {} items", catalog.len());

    let recommender = Recommender::new(catalog)?;
    info!("Score matrix built for {} items", recommender.scores().len());

    if args.heatmap {
        println!("{}", heatmap::render(recommender.catalog(), recommender.scores()));
    }

    println!("Welcome to the movie recommender.");
    println!("Type a movie title to get recommendations.");
    println!("Type 'quit' or 'exit' to end.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Enter movie title: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF on stdin ends the loop like an explicit quit
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        if query.eq_ignore_ascii_case("quit") || query.eq_ignore_ascii_case("exit") {
            break;
        }

        match recommender.recommend(query, args.top_n) {
            Ok(results) => {
                println!("\nRecommendations for '{query}':");
                for rec in results {
                    println!("  {:.2}  {}", rec.score, rec.title);
                }
                println!();
            }
            Err(Error::TitleNotFound(_)) => {
                println!("Movie not found in the catalog. Please try another title.\n");
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("Goodbye.");
    Ok(())
}
