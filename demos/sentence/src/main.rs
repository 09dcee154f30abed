//! `sentence`: lay out a sentence as glyph targets and swarm agents onto it.
//!
//! ```text
//! sentence "HELLO WORLD" --agents 300 --output ./out
//! RUST_LOG=sw_sim=trace sentence HI --agents 40 --no-canvas
//! ```

mod input;

#[cfg(test)]
mod tests;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sw_core::{RunConfig, Step, SwarmParams, Vec2};
use sw_layout::{BitmapFont, SentenceLayout, TargetSet, load_targets_csv};
use sw_output::{AsciiCanvas, CsvWriter, FrameStats, FrameWriter, SwarmOutputObserver};
use sw_sim::{Frame, RunOutcome, SwarmBuilder, SwarmObserver};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::input::{parse_agent_count, prompt};

/// Widest canvas printed before the layout is scaled down.
const MAX_CANVAS_COLS: usize = 160;

#[derive(Parser, Debug)]
#[command(name = "sentence")]
#[command(version, about = "Swarm agents onto the glyphs of a sentence", long_about = None)]
pub(crate) struct Cli {
    /// Sentence to render (prompted for on stdin when absent)
    text: Option<String>,

    /// Number of agents (prompted for when absent; empty answer = one per target)
    #[arg(short, long)]
    agents: Option<String>,

    /// Seed for initial placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Step limit; 0 disables the limit
    #[arg(long)]
    max_steps: Option<u64>,

    /// Lattice cells per font pixel (scales the target shape)
    #[arg(long, default_value = "1")]
    cell_size: u32,

    /// Emit a frame every N steps
    #[arg(long, default_value = "1")]
    frame_interval: u64,

    /// JSON file with update-law parameters (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// CSV file of `x,y` target points, used instead of a sentence
    #[arg(short, long)]
    targets: Option<PathBuf>,

    /// Directory for positions.csv and step_summaries.csv
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not print the final formation
    #[arg(long)]
    no_canvas: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub(crate) fn run_config(&self) -> RunConfig {
        let defaults = RunConfig::default();
        RunConfig {
            seed:           self.seed.unwrap_or(defaults.seed),
            max_steps:      match self.max_steps {
                Some(0) => None,
                Some(n) => Some(n),
                None => defaults.max_steps,
            },
            frame_interval: self.frame_interval,
        }
    }
}

/// Logs frame statistics and forwards frames to the optional CSV observer.
struct DemoObserver {
    csv: Option<SwarmOutputObserver<CsvWriter>>,
    threshold: f64,
}

impl SwarmObserver for DemoObserver {
    fn on_frame(&mut self, step: Step, frame: &Frame<'_>) {
        let stats = FrameStats::from_frame(frame, self.threshold);
        debug!(
            %step,
            converged = stats.converged_agents,
            agents = stats.agents,
            mean = stats.mean_distance,
            max = stats.max_distance,
            "frame"
        );
        if let Some(csv) = self.csv.as_mut() {
            csv.on_frame(step, frame);
        }
    }

    fn on_run_end(&mut self, outcome: RunOutcome) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_run_end(outcome);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

pub(crate) fn load_params(path: &Path) -> Result<SwarmParams> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let params: SwarmParams = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(params)
}

fn load_targets(cli: &Cli) -> Result<TargetSet> {
    if let Some(path) = &cli.targets {
        return load_targets_csv(path)
            .with_context(|| format!("loading targets from {}", path.display()));
    }

    let text = match &cli.text {
        Some(text) => text.clone(),
        None => prompt("Enter a sentence: ")?,
    };
    let font = BitmapFont::new(cli.cell_size, 1);
    let laid_out = SentenceLayout::default().lay_out(&font, &text);
    info!(
        words = laid_out.words,
        width = laid_out.width,
        height = font.line_height(),
        "sentence laid out"
    );
    Ok(laid_out.targets)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let params = match &cli.config {
        Some(path) => load_params(path)?,
        None => SwarmParams::default(),
    };

    let targets = load_targets(&cli)?;
    if targets.is_empty() {
        bail!("no target points to swarm onto");
    }
    let recommended = targets.len();
    println!("Recommended number of agents: {recommended}");

    let answer = match &cli.agents {
        Some(a) => a.clone(),
        None => prompt("Number of agents (empty for recommended): ")?,
    };
    let agents = parse_agent_count(&answer, recommended)?;

    let extent = targets.bounds_max().unwrap_or(Vec2::ZERO) + Vec2::new(1.0, 1.0);
    let mut swarm = SwarmBuilder::new(targets.into_points())
        .agent_count(agents)
        .params(params)
        .config(cli.run_config())
        .build()
        .context("building swarm")?;

    let csv = match &cli.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir).context("opening CSV output")?;
            Some(SwarmOutputObserver::new(writer, &swarm.params))
        }
        None => None,
    };
    let mut observer = DemoObserver { csv, threshold: swarm.params.closeness_threshold };

    let outcome = swarm.run(&mut observer);

    if let Some(mut csv) = observer.csv.take() {
        if let Some(err) = csv.take_error() {
            return Err(err).context("writing CSV output");
        }
        info!(frames = csv.frames_written(), "CSV output written");
        csv.into_writer().finish().context("flushing CSV output")?;
    }

    if !cli.no_canvas {
        let canvas = AsciiCanvas::for_extent(extent, MAX_CANVAS_COLS);
        println!("{}", canvas.render(&swarm.frame()));
    }

    match outcome {
        RunOutcome::Converged { steps } => {
            println!("All {agents} agents reached their targets after {steps} steps.");
            Ok(ExitCode::SUCCESS)
        }
        RunOutcome::StepLimitReached { steps } => {
            warn!(unconverged = swarm.unconverged_count(), "step limit reached");
            println!(
                "Did not converge within {steps} steps ({} of {agents} agents still away).",
                swarm.unconverged_count()
            );
            Ok(ExitCode::from(2))
        }
    }
}
