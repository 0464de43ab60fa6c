use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, EnvFilter};

use rt_feasibility::{catalog, config::Config, report::Report, report::Test};

/// Environment variable overriding the log filter.
const LOG_ENV: &str = "RT_FEASIBILITY_LOG";

/// Feasibility tests for fixed-priority periodic task sets.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Log analysis details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze the built-in example task sets.
    Examples {
        /// Tests to run (default: all tests suited to each set's policy).
        #[arg(short, long = "test", value_enum)]
        tests: Vec<TestArg>,
    },
    /// Analyze the task sets listed in a TOML file.
    Check {
        file: PathBuf,

        /// Tests to run (default: all tests suited to each set's policy).
        #[arg(short, long = "test", value_enum)]
        tests: Vec<TestArg>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TestArg {
    Lub,
    CompletionTime,
    SchedulingPoint,
    Utilization100,
    DmQuick,
}

impl From<TestArg> for Test {
    fn from(arg: TestArg) -> Test {
        match arg {
            TestArg::Lub => Test::UtilizationBound,
            TestArg::CompletionTime => Test::CompletionTime,
            TestArg::SchedulingPoint => Test::SchedulingPoint,
            TestArg::Utilization100 => Test::Utilization100,
            TestArg::DmQuick => Test::DmQuick,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "rt_feasibility=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (task_sets, tests) = match cli.command {
        Command::Examples { tests } => {
            let examples = catalog::all().context("building the example catalog")?;
            let sets = examples
                .into_iter()
                .map(|e| (e.name.to_string(), e.task_set))
                .collect::<Vec<_>>();
            (sets, tests)
        }
        Command::Check { file, tests } => {
            let config = Config::load_from_file(&file)?;
            let sets = config
                .task_sets()
                .with_context(|| format!("in {}", file.display()))?;
            if sets.is_empty() {
                anyhow::bail!("{} defines no task sets", file.display());
            }
            (sets, tests)
        }
    };

    let tests: Vec<Test> = tests.into_iter().map(Test::from).collect();
    for (name, task_set) in task_sets {
        println!("{}", Report::new(name, task_set, &tests));
    }
    Ok(())
}
