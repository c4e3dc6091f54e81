use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;
use std::fmt::Write;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ygo_test_hand::card::{CardDatabase, MemoryNameCache};
use ygo_test_hand::deck::{PartitionTargets, HAND_SIZE, MAX_DECK_SIZE, MIN_DECK_SIZE};
use ygo_test_hand::decklist::{load_deck, load_deck_file, LoadedDeck};
use ygo_test_hand::probability::{DeckProbabilities, NextCardOdds};
use ygo_test_hand::report::{self, ProbabilityReport};
use ygo_test_hand::rng::DrawRng;
use ygo_test_hand::simulation::{analyze_hand, draw_test_hand, sample_hands, simulate_next_card};

#[derive(Parser)]
#[command(name = "ygo-test-hand")]
#[command(about = "Yu-Gi-Oh! test hand simulator and opening hand probabilities", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Card ID to name table (JSON)
    #[arg(long, default_value = "cards.json", global = true)]
    names: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args)]
struct DeckSource {
    /// .ydk deck file
    #[arg(short, long, required_unless_present = "ydke", conflicts_with = "ydke")]
    deck: Option<String>,

    /// ydke:// deck URL
    #[arg(long)]
    ydke: Option<String>,
}

#[derive(Args)]
struct Counts {
    /// Cards you don't want to draw
    #[arg(short, long, default_value = "0")]
    bricks: usize,

    /// Handtraps and board breakers
    #[arg(short, long, default_value = "0")]
    non_engine: usize,

    /// Combo pieces (starters and extenders)
    #[arg(short, long, default_value = "0")]
    engine: usize,

    /// Cards in the opening hand
    #[arg(
        long,
        default_value_t = HAND_SIZE,
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_DECK_SIZE as u64)
    )]
    hand_size: usize,
}

impl Counts {
    fn targets(&self) -> PartitionTargets {
        PartitionTargets::new(self.bricks, self.non_engine, self.engine)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Opening hand probabilities plus one test hand
    Stats {
        #[command(flatten)]
        source: DeckSource,

        #[command(flatten)]
        counts: Counts,

        /// Seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Draw test hands
    Draw {
        #[command(flatten)]
        source: DeckSource,

        #[command(flatten)]
        counts: Counts,

        /// Seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of hands to draw
        #[arg(long, default_value = "1")]
        hands: usize,
    },

    /// Compare sampled hands against the exact probabilities
    Sample {
        #[command(flatten)]
        source: DeckSource,

        #[command(flatten)]
        counts: Counts,

        /// Seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of hands to sample
        #[arg(short, long, default_value = "100000")]
        trials: usize,
    },

    /// Print the resolved deck list
    List {
        #[command(flatten)]
        source: DeckSource,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let db = load_names(&cli.names);

    let result = match cli.command {
        Commands::Stats {
            source,
            counts,
            seed,
            json,
        } => show_stats(&db, &source, &counts, seed, json),
        Commands::Draw {
            source,
            counts,
            seed,
            hands,
        } => draw_hands(&db, &source, &counts, seed, hands),
        Commands::Sample {
            source,
            counts,
            seed,
            trials,
        } => sample(&db, &source, &counts, seed, trials),
        Commands::List { source } => list_deck(&db, &source),
    };

    if let Err(e) = result {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Missing or broken name tables are not fatal; IDs fall back to `Card_<id>`
fn load_names(path: &str) -> CardDatabase {
    match CardDatabase::from_file(path) {
        Ok(db) => {
            eprintln!("✓ Loaded {} card names from {}", db.card_count(), path);
            db
        }
        Err(e) => {
            warn!("could not load card names from {}: {}", path, e);
            eprintln!("! No card names loaded, using card IDs");
            CardDatabase::empty()
        }
    }
}

fn load(db: &CardDatabase, source: &DeckSource) -> Result<LoadedDeck, Box<dyn Error>> {
    let mut cache = MemoryNameCache::new();
    let loaded = match (&source.deck, &source.ydke) {
        (_, Some(url)) => load_deck(url, db, &mut cache)?,
        (Some(path), None) => load_deck_file(path, db, &mut cache)?,
        (None, None) => return Err("either --deck or --ydke is required".into()),
    };

    let size = loaded.deck.deck_size();
    if !(MIN_DECK_SIZE..=MAX_DECK_SIZE).contains(&size) {
        warn!(
            "deck has {} cards, outside the usual {}-{}",
            size, MIN_DECK_SIZE, MAX_DECK_SIZE
        );
    }
    Ok(loaded)
}

fn load_categorized(
    db: &CardDatabase,
    source: &DeckSource,
    counts: &Counts,
) -> Result<LoadedDeck, Box<dyn Error>> {
    let mut loaded = load(db, source)?;
    let targets = counts.targets();
    loaded.deck.partition(targets)?;

    info!(
        bricks = targets.brick,
        non_engine = targets.non_engine,
        engine = targets.engine,
        "deck categorized"
    );
    Ok(loaded)
}

fn show_stats(
    db: &CardDatabase,
    source: &DeckSource,
    counts: &Counts,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let loaded = load_categorized(db, source, counts)?;
    let deck = &loaded.deck;
    let probs = DeckProbabilities::calculate(deck, counts.hand_size);

    let mut rng = DrawRng::new(seed);
    let hand = draw_test_hand(deck, counts.hand_size, &mut rng);
    let analysis = analyze_hand(deck, &hand);
    let next = simulate_next_card(deck, &hand, &mut rng);
    let odds = NextCardOdds::calculate(deck, &hand);

    if json {
        let report = ProbabilityReport::new(
            rng.seed(),
            counts.targets(),
            &probs,
            &hand,
            analysis,
            next.as_ref(),
            odds,
        );
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!(
        "\nDeck configured: {} engine, {} non-engine, {} bricks (seed {})\n",
        counts.engine,
        counts.non_engine,
        counts.bricks,
        rng.seed()
    );
    let mut out = String::new();
    report::write_probabilities(&mut out, &probs)?;
    writeln!(out)?;
    report::write_hand(&mut out, &hand, &analysis, next.as_ref(), &odds)?;
    println!("{}", out);
    Ok(())
}

fn draw_hands(
    db: &CardDatabase,
    source: &DeckSource,
    counts: &Counts,
    seed: Option<u64>,
    hands: usize,
) -> Result<(), Box<dyn Error>> {
    let loaded = load_categorized(db, source, counts)?;
    let deck = &loaded.deck;
    let mut rng = DrawRng::new(seed);

    println!("\nSeed: {}\n", rng.seed());
    for _ in 0..hands {
        let hand = draw_test_hand(deck, counts.hand_size, &mut rng);
        let analysis = analyze_hand(deck, &hand);
        let next = simulate_next_card(deck, &hand, &mut rng);
        let odds = NextCardOdds::calculate(deck, &hand);
        let mut out = String::new();
        report::write_hand(&mut out, &hand, &analysis, next.as_ref(), &odds)?;
        println!("{}", out);
    }
    Ok(())
}

fn sample(
    db: &CardDatabase,
    source: &DeckSource,
    counts: &Counts,
    seed: Option<u64>,
    trials: usize,
) -> Result<(), Box<dyn Error>> {
    let loaded = load_categorized(db, source, counts)?;
    let deck = &loaded.deck;
    let probs = DeckProbabilities::calculate(deck, counts.hand_size);
    let mut rng = DrawRng::new(seed);

    println!("\nSampling {} hands (seed {})\n", trials, rng.seed());

    let bar = ProgressBar::new(trials as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} hands ({eta})") {
        bar.set_style(style);
    }

    let start = std::time::Instant::now();
    let summary = sample_hands(deck, counts.hand_size, trials, &mut rng, Some(&bar));
    let elapsed = start.elapsed();

    let mut out = String::new();
    report::write_sample_comparison(&mut out, &summary, &probs)?;
    println!("\n{}", out);
    println!(
        "Sampling completed in {:.2?} ({:.0} hands/sec)",
        elapsed,
        trials as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn list_deck(db: &CardDatabase, source: &DeckSource) -> Result<(), Box<dyn Error>> {
    let loaded = load(db, source)?;
    let mut out = String::new();
    report::write_deck_list(&mut out, &loaded.deck, &loaded.card_ids)?;
    println!("\n{}", out);
    Ok(())
}
