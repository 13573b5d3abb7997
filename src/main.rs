//! ferrite-mlp command-line driver.
//!
//! Generates one of the toy datasets, trains a network on it, reports the
//! held-out score and optionally saves the trained model.
//!
//! Run with:
//!   cargo run --release -- multiply --epochs 5000 --save model.json
//!   cargo run --release -- predict --model model.json --input 0.13,0.3

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use ferrite_mlp::data::{synthetic, Dataset};
use ferrite_mlp::train::{mean_absolute_error, threshold_accuracy};
use ferrite_mlp::{train_loop, Network, Topology, TrainConfig};

#[derive(Parser)]
#[command(name = "ferrite-mlp")]
#[command(about = "Train and query a sigmoid multilayer perceptron", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn x * y on [0, 1) and report mean absolute error
    Multiply(TrainArgs),

    /// Classify points inside / outside the unit circle and report accuracy
    Circle(TrainArgs),

    /// Run a saved model on one input vector
    Predict {
        /// Path to a model written with --save
        #[arg(short, long)]
        model: String,

        /// Comma-separated input values
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        input: Vec<f64>,
    },
}

#[derive(Args)]
struct TrainArgs {
    /// Total samples generated before the train/test split
    #[arg(long, default_value = "1000")]
    samples: usize,

    /// Fraction of samples held out for testing
    #[arg(long, default_value = "0.2")]
    test_fraction: f64,

    /// Hidden layer width
    #[arg(long, default_value = "10")]
    hidden: usize,

    /// Gradient-descent step size
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Topology JSON file; overrides --hidden and --learning-rate
    #[arg(long)]
    topology: Option<String>,

    /// Number of passes over the training set
    #[arg(long, default_value = "5000")]
    epochs: usize,

    /// Seed for dataset generation and weight initialisation
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Log progress every N epochs (0 disables)
    #[arg(long, default_value = "500")]
    log_every: usize,

    /// Write the trained model to this JSON file
    #[arg(long)]
    save: Option<String>,
}

#[derive(Clone, Copy)]
enum Task {
    Multiply,
    Circle,
}

impl Task {
    fn default_learning_rate(self) -> f64 {
        match self {
            Task::Multiply => 0.4,
            Task::Circle => 0.1,
        }
    }

    fn generate(self, n: usize, rng: &mut StdRng) -> Dataset {
        match self {
            Task::Multiply => synthetic::multiplication(n, rng),
            Task::Circle => synthetic::circle(n, rng),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Multiply(args) => run_training(Task::Multiply, args),
        Commands::Circle(args) => run_training(Task::Circle, args),
        Commands::Predict { model, input } => run_predict(&model, &input),
    }
}

fn run_training(task: Task, args: TrainArgs) -> Result<()> {
    let topology = match &args.topology {
        Some(path) => Topology::load_json(path)
            .with_context(|| format!("failed to load topology from {path}"))?,
        None => Topology::new(
            2,
            args.hidden,
            1,
            args.learning_rate.unwrap_or_else(|| task.default_learning_rate()),
        ),
    };
    if topology.input_size != 2 || topology.output_size != 1 {
        bail!(
            "toy datasets need a 2 -> N -> 1 topology, got {} -> {} -> {}",
            topology.input_size, topology.hidden_size, topology.output_size
        );
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let (train, test) = task.generate(args.samples, &mut rng).split(args.test_fraction);
    info!(train = train.len(), test = test.len(), "generated dataset");

    let mut network = Network::from_topology(&topology, &mut rng)?;
    let config = TrainConfig::new(args.epochs).with_log_every(args.log_every);
    let loss = train_loop(&mut network, train.inputs(), train.targets(), &config)
        .context("training failed")?;
    if let Some(loss) = loss {
        info!("final training mse: {loss:.6}");
    }

    match task {
        Task::Multiply => {
            let mae = mean_absolute_error(&mut network, test.inputs(), test.targets())?;
            info!("test mean absolute error: {mae:.6}");
        }
        Task::Circle => {
            let accuracy = threshold_accuracy(&mut network, test.inputs(), test.targets(), 0.5)?;
            info!("test accuracy: {:.2}%", accuracy * 100.0);
        }
    }

    if let Some(path) = &args.save {
        network.save_json(path)
            .with_context(|| format!("failed to save model to {path}"))?;
    }
    Ok(())
}

fn run_predict(model: &str, input: &[f64]) -> Result<()> {
    let mut network = Network::load_json(model)
        .with_context(|| format!("failed to load model from {model}"))?;
    let output = network.forward(input)?;
    info!("{input:?} -> {output:?}");
    Ok(())
}
