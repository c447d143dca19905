use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use hold_cli::{render_svg, Config, OutputFormat, RenderConfig, Session};
use hold_core::{compute_hold, HoldSolution, InputField, RawInputs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Holding pattern entry calculator", long_about = None)]
struct Cli {
    /// JSON file overriding the built-in rules
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a hold once and print it
    Compute(ComputeArgs),
    /// Read `field=value` lines from stdin and recompute after each
    Session(SessionArgs),
}

/// Raw text inputs; anything unparseable is treated as empty.
#[derive(Args, Debug)]
struct InputArgs {
    /// Altitude to compute the wind for (ft)
    #[arg(long)]
    target_alt: Option<String>,
    /// Lower forecast altitude (ft)
    #[arg(long)]
    low_alt: Option<String>,
    /// Lower forecast wind, DIR/SPEED
    #[arg(long)]
    low_wind: Option<String>,
    /// Upper forecast altitude (ft)
    #[arg(long)]
    high_alt: Option<String>,
    /// Upper forecast wind, DIR/SPEED
    #[arg(long)]
    high_wind: Option<String>,
    /// Magnetic variation, east positive
    #[arg(long, allow_hyphen_values = true)]
    mag_var: Option<String>,
    /// Inbound course (magnetic)
    #[arg(long)]
    course: Option<String>,
    /// True airspeed (kt)
    #[arg(long)]
    tas: Option<String>,
    /// Base outbound time (s)
    #[arg(long)]
    base_time: Option<String>,
}

impl InputArgs {
    fn to_raw(&self) -> RawInputs {
        let mut raw = RawInputs::default();
        let values = [
            (InputField::TargetAlt, &self.target_alt),
            (InputField::LowAlt, &self.low_alt),
            (InputField::LowWind, &self.low_wind),
            (InputField::HighAlt, &self.high_alt),
            (InputField::HighWind, &self.high_wind),
            (InputField::MagVar, &self.mag_var),
            (InputField::Course, &self.course),
            (InputField::Tas, &self.tas),
            (InputField::BaseTime, &self.base_time),
        ];
        for (field, value) in values {
            if let Some(value) = value {
                raw.set(field, value);
            }
        }
        raw
    }
}

#[derive(Args, Debug)]
struct ComputeArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Output format (defaults to HOLDCALC_FORMAT, then text)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the pattern diagram to this SVG file
    #[arg(long)]
    svg: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SessionArgs {
    #[command(flatten)]
    inputs: InputArgs,

    /// Rewrite this SVG file after every change
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holdcalc=info,hold_core=info,hold_cli=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    let rules = config.load_rules(cli.rules.as_deref())?;
    let render = RenderConfig {
        size: config.canvas_size,
    };

    match cli.command {
        Command::Compute(args) => {
            let solution = compute_hold(&args.inputs.to_raw().to_inputs(), &rules);
            let format = args.format.unwrap_or(config.format);
            print_solution(&solution, format)?;
            if let Some(path) = args.svg {
                let svg = render_svg(&solution, &render)?;
                std::fs::write(&path, svg)
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::info!(path = %path.display(), "wrote diagram");
            }
        }
        Command::Session(args) => {
            let mut session = Session::new(args.inputs.to_raw(), rules);
            if let Some(path) = args.svg {
                session = session.with_svg(path, render);
            }
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            session.run(stdin.lock(), &mut stdout)?;
        }
    }
    Ok(())
}

fn print_solution(solution: &HoldSolution, format: OutputFormat) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    match format {
        OutputFormat::Text => writeln!(out, "{}", solution.display())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, solution)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
