//! Pangram query tool
//!
//! Command-line front end over the phrase store. Results are printed to
//! stdout as JSON; logs go to stderr.
//!
//! ## Usage
//!
//! ```bash
//! # Classify one phrase
//! pangram check "Jovem craque belga prediz falhas no xote do güiçaw"
//!
//! # Verdict counts over the configured phrase store
//! pangram stats
//!
//! # Every stored phrase, in order
//! pangram all
//!
//! # Every phrase of one kind (perfect, pangram, not-pangram)
//! pangram list perfect
//!
//! # A random phrase, optionally of one kind
//! pangram random pangram
//!
//! # Case-insensitive substring search over the raw phrases
//! pangram search raposa
//!
//! # Throughput of the analyze pipeline over a text file, one phrase per line
//! pangram bench /path/to/phrases.txt
//! ```
//!
//! The phrase store is `data_file` from `pangram.toml` (default
//! `pangramas.txt`), overridable with `PANGRAM_DATA`. Set `PANGRAM_LOG` to
//! change the log filter.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use pangram_core::analyzer::analyze;
use pangram_core::config::PangramConfig;
use pangram_core::corpus::{aggregate, PhraseCorpus};
use pangram_core::logging;
use pangram_core::store::JsonFileStore;
use pangram_core::{PhraseKind, ALPHABET, ALPHABET_LEN};
use serde_json::json;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

const USAGE: &str = "Usage: pangram <command> [args]

Commands:
  info                 alphabet and available commands
  check <phrase...>    classify one phrase
  stats                verdict counts over the phrase store
  all                  every stored phrase, in order
  list <kind>          phrases of one kind
  random [kind]        a random phrase, optionally of one kind
  search <query...>    phrases containing the query, ignoring case
  bench <path>         analyze throughput over a file, one phrase per line

Kinds: perfect, pangram, not-pangram";

enum Command {
    Info,
    Check(String),
    Stats,
    All,
    List(PhraseKind),
    Random(Option<PhraseKind>),
    Search(String),
    Bench(PathBuf),
}

fn main() -> ExitCode {
    let (config, fallback) = match PangramConfig::try_load(&PangramConfig::default_path()) {
        Ok(config) => (config, None),
        Err(fallback) => (PangramConfig::default(), Some(fallback)),
    };
    let config = config.with_env_overrides();
    logging::init_tracing(&config.log_filter);
    if let Some(fallback) = fallback {
        fallback.log();
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("{message}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(&config, command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<Command, String> {
    let Some((name, rest)) = args.split_first() else {
        return Err("no command given".to_string());
    };

    let parse_kind = |s: &str| s.parse::<PhraseKind>().map_err(|e| e.to_string());

    match name.as_str() {
        "info" => Ok(Command::Info),
        "check" => {
            let phrase = rest.join(" ");
            if phrase.is_empty() {
                return Err("no phrase given".to_string());
            }
            Ok(Command::Check(phrase))
        }
        "stats" => Ok(Command::Stats),
        "all" => Ok(Command::All),
        "list" => match rest.first() {
            Some(kind) => Ok(Command::List(parse_kind(kind.as_str())?)),
            None => Err("no kind given".to_string()),
        },
        "random" => {
            let kind = rest.first().map(|k| parse_kind(k.as_str())).transpose()?;
            Ok(Command::Random(kind))
        }
        "search" => {
            let query = rest.join(" ");
            if query.is_empty() {
                return Err("no search query given".to_string());
            }
            Ok(Command::Search(query))
        }
        "bench" => match rest.first() {
            Some(path) => Ok(Command::Bench(PathBuf::from(path))),
            None => Err("no input file given".to_string()),
        },
        other => Err(format!("unknown command {other:?}")),
    }
}

fn run(config: &PangramConfig, command: Command) -> Result<ExitCode> {
    match command {
        Command::Info => print_json(&json!({
            "alphabet": ALPHABET,
            "alphabetLength": ALPHABET_LEN,
            "commands": ["info", "check", "stats", "all", "list", "random", "search", "bench"],
        })),
        Command::Check(phrase) => {
            let analysis = analyze(&phrase);
            print_json(&json!({
                "phrase": phrase,
                "type": analysis.kind(),
                "isPangram": analysis.classification.is_pangram(),
                "isPerfect": analysis.classification.is_perfect(),
                "analysis": analysis,
            }))
        }
        Command::Stats => {
            let corpus = load_corpus(config)?;
            let stats = corpus.stats();
            tracing::info!(
                perfect = stats.perfect,
                pangram = stats.pangram,
                not_pangram = stats.not_pangram,
                total = stats.total,
                "phrase store statistics"
            );
            print_json(&stats)
        }
        Command::All => {
            let corpus = load_corpus(config)?;
            let phrases: Vec<&str> = corpus.phrases().collect();
            print_json(&phrases)
        }
        Command::List(kind) => {
            let corpus = load_corpus(config)?;
            let phrases = corpus.by_kind(kind);
            print_json(&json!({
                "type": kind,
                "count": phrases.len(),
                "phrases": phrases,
            }))
        }
        Command::Random(kind) => {
            let corpus = load_corpus(config)?;
            let Some(phrase) = corpus.random(kind, &mut rand::rng()) else {
                eprintln!("no phrase found");
                return Ok(ExitCode::FAILURE);
            };
            let analysis = analyze(phrase);
            print_json(&json!({
                "phrase": phrase,
                "type": analysis.kind(),
                "analysis": analysis,
            }))
        }
        Command::Search(query) => {
            let corpus = load_corpus(config)?;
            let results = corpus.search(&query);
            print_json(&json!({
                "query": query,
                "count": results.len(),
                "results": results,
            }))
        }
        Command::Bench(path) => {
            bench(&path)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_corpus(config: &PangramConfig) -> Result<PhraseCorpus> {
    let store = JsonFileStore::new(&config.data_file);
    PhraseCorpus::from_source(&store)
        .with_context(|| format!("loading phrases from {}", config.data_file.display()))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<ExitCode> {
    let out = serde_json::to_string_pretty(value).context("serializing output")?;
    println!("{out}");
    Ok(ExitCode::SUCCESS)
}

fn bench(path: &Path) -> Result<()> {
    println!("Loading file...");
    let input = fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let phrases: Vec<&str> = input.lines().collect();

    println!("File size: {}", fmt_bytes(input.len() as u64));
    println!("Phrases:   {}\n", fmt_count(phrases.len() as u64));

    println!("=== Aggregate ===");

    warmup(|| {
        std::hint::black_box(aggregate(&phrases));
    });

    let elapsed = measure(|| {
        std::hint::black_box(aggregate(&phrases));
    });

    print_perf("Aggregate", input.len(), elapsed, phrases.len() as u64);
    Ok(())
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, phrases: u64) {
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} MiB/s", mib / secs);
    println!("Phrases     : {}", fmt_count(phrases));
    println!("Phrases/sec : {}", fmt_count((phrases as f64 / secs) as u64));
    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
