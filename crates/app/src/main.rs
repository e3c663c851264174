use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use comfy_table::{Cell, Table};

use quiz_core::model::QuizRound;
use quiz_core::summary::SummaryRow;
use services::QuizService;
use storage::{JsonFileRepository, load_catalog};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidExploration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidExploration { raw } => {
                write!(f, "invalid --exploration value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct Args {
    catalog_path: PathBuf,
    state_path: PathBuf,
    exploration_rate: Option<f64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <csv>] [--state <json>] [--exploration <rate>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --catalog data/countries.csv");
    eprintln!("  --state performance.json");
    eprintln!("  --exploration 0.1");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CATALOG, QUIZ_STATE");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut catalog_path = std::env::var("QUIZ_CATALOG")
            .ok()
            .map_or_else(|| PathBuf::from("data/countries.csv"), PathBuf::from);
        let mut state_path = std::env::var("QUIZ_STATE")
            .ok()
            .map_or_else(|| PathBuf::from("performance.json"), PathBuf::from);
        let mut exploration_rate = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    catalog_path = PathBuf::from(require_value(args, "--catalog")?);
                }
                "--state" => {
                    state_path = PathBuf::from(require_value(args, "--state")?);
                }
                "--exploration" => {
                    let value = require_value(args, "--exploration")?;
                    let parsed: f64 = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidExploration { raw: value.clone() })?;
                    exploration_rate = Some(parsed);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            catalog_path,
            state_path,
            exploration_rate,
        })
    }
}

fn flag_url(round: &QuizRound) -> String {
    format!(
        "https://flagcdn.com/w320/{}.png",
        round.item().code().to_lowercase()
    )
}

fn print_round(round: &QuizRound) {
    println!();
    println!("Which country is this flag from?");
    println!("  {}", flag_url(round));
    for (index, name) in round.choices().iter().enumerate() {
        println!("  {}) {name}", index + 1);
    }
    println!("(1-3 to answer, n = next flag, s = stats, q = quit)");
}

fn print_summary(rows: &[SummaryRow]) {
    if rows.is_empty() {
        println!("You haven't answered any flags yet.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Name", "Correct", "Wrong", "Total", "Accuracy (%)"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(&row.name),
            Cell::new(row.correct),
            Cell::new(row.wrong),
            Cell::new(row.total),
            Cell::new(format!("{:.1}", row.accuracy)),
        ]);
    }
    println!("{table}");
}

fn run_quiz(service: &mut QuizService) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let mut round = service.start_round()?;
    print_round(&round);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;

        match input.trim() {
            "q" | "quit" => break,
            "s" | "stats" => print_summary(&service.summary()),
            "n" | "next" | "" => {
                round = service.start_round()?;
                print_round(&round);
            }
            choice @ ("1" | "2" | "3") => {
                let index = match choice {
                    "1" => 0,
                    "2" => 1,
                    _ => 2,
                };
                let guess = round.choices()[index].clone();
                match service.submit_guess(&mut round, &guess)? {
                    Some(outcome) if outcome.is_correct => println!("Correct!"),
                    Some(outcome) => {
                        println!("Incorrect. It was {}.", outcome.correct_name);
                    }
                    None => println!("Already answered; n for the next flag."),
                }
            }
            other => println!("unrecognized input: {other}"),
        }
    }

    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let catalog = load_catalog(&args.catalog_path)?;
    tracing::info!(
        items = catalog.len(),
        catalog = %args.catalog_path.display(),
        "catalog loaded"
    );

    let store = JsonFileRepository::new(&args.state_path);
    let mut service = QuizService::open(catalog, Box::new(store))?;
    if let Some(rate) = args.exploration_rate {
        service = service.with_exploration_rate(rate)?;
    }

    run_quiz(&mut service)?;

    print_summary(&service.summary());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
