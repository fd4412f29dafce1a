use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use simbench::{
    algorithm, Config, CpuModel, ExperimentRunner, JsonLinesReporter, OutputFormat, TableReporter,
};

#[derive(Parser, Debug, Clone)]
#[command(name = "simbench", about = "Benchmark algorithms against simulated CPU models")]
struct Args {
    /// Trials per experiment (overrides SIMBENCH_RUNS)
    #[arg(long)]
    runs: Option<usize>,
    /// Seed for input generation (overrides SIMBENCH_SEED)
    #[arg(long)]
    seed: Option<u64>,
    /// Input sizes to run, comma separated
    #[arg(long, value_delimiter = ',', default_value = "100,500,1000")]
    sizes: Vec<usize>,
    /// Output format: table|json
    #[arg(long, default_value = "table")]
    format: OutputFormat,
}

fn main() -> ExitCode {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "benchmark run failed");
            eprintln!("simbench: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> simbench::Result<()> {
    let mut config = Config::default().from_env();
    if let Some(runs) = args.runs {
        config.runs = runs;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let runner = ExperimentRunner::with_config(config);
    let algorithms = algorithm::reference_algorithms();
    let cpus = CpuModel::reference_models();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        OutputFormat::Table => {
            let mut reporter = TableReporter::new(&mut out);
            reporter.write_header()?;
            runner.run_grid(&algorithms, &cpus, &args.sizes, &mut reporter)?;
        }
        OutputFormat::Json => {
            let mut reporter = JsonLinesReporter::new(&mut out);
            runner.run_grid(&algorithms, &cpus, &args.sizes, &mut reporter)?;
        }
    }
    out.flush()?;
    Ok(())
}
