use std::io::Write;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use tracing::info;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

mod generate;
mod output;
mod randomizer;
mod template;

/// Print a random combination of flag assignments for use as a test fixture
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the random source for a reproducible run
    #[arg(long, env = "FLAGGEN_SEED")]
    seed: Option<u64>,
    /// Flag template such as `--enabled=bool`, replacing the built-in list
    #[arg(
        long = "template",
        env = "FLAGGEN_TEMPLATES",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    templates: Vec<String>,
    /// Only print the final combination
    #[arg(long)]
    no_trace: bool,
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();
    info!(?cli);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut stdout = std::io::stdout().lock();
    run(&cli, &mut rng, &mut stdout)?;
    stdout.flush().context("flushing stdout")?;

    Ok(())
}

#[instrument(skip_all)]
fn run(cli: &Cli, rng: &mut impl Rng, out: &mut impl Write) -> anyhow::Result<()> {
    let output = if cli.templates.is_empty() {
        randomize(&template::TEMPLATES, rng, cli, out)
    } else {
        randomize(&cli.templates, rng, cli, out)
    };
    let output = output.context("writing trace")?;
    info!(assignments = output.assignments().len(), "generated combination");
    writeln!(out, "{output}").context("writing combination")?;
    Ok(())
}

fn randomize(
    templates: &[impl AsRef<str>],
    rng: &mut impl Rng,
    cli: &Cli,
    out: &mut impl Write,
) -> std::io::Result<output::Output> {
    let trace: Option<&mut dyn Write> = if cli.no_trace { None } else { Some(out) };
    randomizer::randomize(templates, rng, trace)
}
