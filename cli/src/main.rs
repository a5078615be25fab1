use std::{path::PathBuf, time::SystemTime};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use knn_vote::{Execution, Prediction};
use knn_vote_cli::{Problem, Report};
use nanoserde::SerJson;
use tracing::{debug, info, instrument};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = cli.level();
    let timer = time::format_description::parse("[hour]:[minute]:[second]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = tracing_subscriber::fmt::time::OffsetTime::new(time_offset, timer);
    tracing_subscriber::registry()
        .with(level)
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(timer)
                .with_writer(std::io::stderr),
        )
        .init();
    debug!(?level, "Logging");
    cli.command.exec()?;
    Ok(())
}

#[instrument(skip_all)]
fn run(problem: &Problem, single_threaded: bool) -> Result<Prediction<i64>> {
    let execution = if single_threaded {
        Execution::Sequential
    } else {
        Execution::Parallel
    };
    let classifier = problem.classifier(execution)?;

    info!(
        k = classifier.k(),
        size = classifier.dataset().size(),
        ?execution,
        "Classifying"
    );
    let start = SystemTime::now();
    let prediction = classifier.nearest_neighbors()?;
    info!(
        "Classification time: {:?}",
        start.elapsed().unwrap_or_default()
    );

    Ok(prediction)
}

fn print_prediction(prediction: Prediction<i64>, json: bool) {
    if json {
        println!("{}", Report::from(prediction).serialize_json());
        return;
    }

    println!("Row : Distance : Label");
    for ((key, distance), label) in prediction
        .keys
        .iter()
        .zip(prediction.distances.iter())
        .zip(prediction.labels.iter())
    {
        println!("{key} : {distance} : {label}");
    }
    println!("Nearest labels: {:?}", prediction.labels);
    println!("Predicted label: {}", prediction.predicted);
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Log level selected by the `-v`/`-q` flags.
    fn level(&self) -> LevelFilter {
        match self.verbose.log_level_filter() {
            clap_verbosity_flag::LevelFilter::Off => LevelFilter::OFF,
            clap_verbosity_flag::LevelFilter::Error => LevelFilter::ERROR,
            clap_verbosity_flag::LevelFilter::Warn => LevelFilter::WARN,
            clap_verbosity_flag::LevelFilter::Info => LevelFilter::INFO,
            clap_verbosity_flag::LevelFilter::Debug => LevelFilter::DEBUG,
            clap_verbosity_flag::LevelFilter::Trace => LevelFilter::TRACE,
        }
    }
}

trait Action {
    fn act(self) -> Result<()>;
}

#[derive(Subcommand)]
enum Commands {
    Demo(Demo),
    Classify(Classify),
}

impl Commands {
    fn exec(self) -> Result<()> {
        match self {
            Self::Demo(a) => a.act(),
            Self::Classify(a) => a.act(),
        }
    }
}

/// Does a 33 year old like pineapple on pizza? Classify against a built-in
/// dataset of ages
#[derive(Args, Debug)]
struct Demo {
    /// Number of nearest neighbors that vote
    #[arg(short, default_value_t = knn_vote_cli::DEFAULT_K)]
    k: usize,

    /// Compute distances on a single thread
    #[arg(short = 'S', long, default_value_t = false)]
    single_threaded: bool,
}

impl Action for Demo {
    fn act(self) -> Result<()> {
        let problem = Problem {
            k: Some(self.k),
            ..Problem::pineapple()
        };
        let prediction = run(&problem, self.single_threaded)?;
        print_prediction(prediction, false);

        Ok(())
    }
}

/// Classify the query of a JSON problem file
#[derive(Args, Debug)]
struct Classify {
    /// JSON file with `rows` of `[feature..., label]`, a `query` and optionally `k`
    #[arg(short, long)]
    datafile: PathBuf,

    /// Number of nearest neighbors that vote, overrides the file
    #[arg(short)]
    k: Option<usize>,

    /// Comma separated query features, overrides the file
    #[arg(short = 'Q', long, value_delimiter = ',', allow_negative_numbers = true)]
    query: Option<Vec<f64>>,

    /// Compute distances on a single thread
    #[arg(short = 'S', long, default_value_t = false)]
    single_threaded: bool,

    /// Print the result as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,
}

impl Classify {
    fn problem(&self) -> Result<Problem> {
        info!(path = ?self.datafile, "Opening");
        let mut problem = Problem::open(&self.datafile)?;

        if let Some(k) = self.k {
            problem.k = Some(k);
        }
        if let Some(query) = &self.query {
            problem.query = query.clone();
        }

        Ok(problem)
    }
}

impl Action for Classify {
    fn act(self) -> Result<()> {
        let problem = self.problem()?;
        let prediction = run(&problem, self.single_threaded)?;
        print_prediction(prediction, self.json);

        Ok(())
    }
}
