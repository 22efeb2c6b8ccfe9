//! # Vector3D Command Line Entry Point
//!
//! Parses one operation and its vector arguments, evaluates it and prints the
//! result.

use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;
use std::process::ExitCode;
use vector3d::{config, Vector3D, VectorError, VectorResult};

/// Command line arguments for the vector calculator.
#[derive(Parser, Debug)]
#[command(name = "vector3d")]
#[command(about = "Evaluate 3D vector operations on x,y,z arguments")]
#[command(version)]
struct Args {
    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, default_value = config::DEFAULT_LOG_LEVEL)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

/// Supported operations. Vectors are written as `x,y,z` and may start with
/// a minus sign.
#[derive(Subcommand, Debug)]
enum Command {
    /// Euclidean length of a vector
    Magnitude {
        #[arg(allow_hyphen_values = true)]
        v: Vector3D,
    },
    /// Unit vector in the same direction
    Normalize {
        #[arg(allow_hyphen_values = true)]
        v: Vector3D,
    },
    /// Componentwise sum
    Add {
        #[arg(allow_hyphen_values = true)]
        a: Vector3D,
        #[arg(allow_hyphen_values = true)]
        b: Vector3D,
    },
    /// Componentwise difference a - b
    Subtract {
        #[arg(allow_hyphen_values = true)]
        a: Vector3D,
        #[arg(allow_hyphen_values = true)]
        b: Vector3D,
    },
    /// Scale a vector
    Multiply {
        #[arg(allow_hyphen_values = true)]
        v: Vector3D,
        #[arg(allow_hyphen_values = true)]
        scalar: f64,
    },
    /// Dot product
    Dot {
        #[arg(allow_hyphen_values = true)]
        a: Vector3D,
        #[arg(allow_hyphen_values = true)]
        b: Vector3D,
    },
    /// Cross product a × b
    Cross {
        #[arg(allow_hyphen_values = true)]
        a: Vector3D,
        #[arg(allow_hyphen_values = true)]
        b: Vector3D,
    },
    /// Distance between two points
    Distance {
        #[arg(allow_hyphen_values = true)]
        a: Vector3D,
        #[arg(allow_hyphen_values = true)]
        b: Vector3D,
    },
}

/// Result of evaluating a command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Output {
    Scalar(f64),
    Vector(Vector3D),
}

fn main() -> ExitCode {
    let args = Args::parse();

    initialize_logging(&args.log_level);
    info!("Starting vector3d v{}", vector3d::VERSION);

    match run(&args) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Evaluation failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initializes env_logger, letting `RUST_LOG` override the flag.
fn initialize_logging(log_level: &str) {
    let env = env_logger::Env::default().default_filter_or(log_level);
    env_logger::Builder::from_env(env)
        .format_target(false)
        .init();
}

/// Evaluates the command and renders its result.
fn run(args: &Args) -> VectorResult<String> {
    debug!("Evaluating {:?}", args.command);
    let output = evaluate(&args.command)?;
    render(&output, args.json)
}

fn evaluate(command: &Command) -> VectorResult<Output> {
    let output = match *command {
        Command::Magnitude { v } => Output::Scalar(v.magnitude()),
        Command::Normalize { v } => Output::Vector(v.normalize()?),
        Command::Add { a, b } => Output::Vector(a.add(b)),
        Command::Subtract { a, b } => Output::Vector(a.subtract(b)),
        Command::Multiply { v, scalar } => Output::Vector(v.multiply(scalar)),
        Command::Dot { a, b } => Output::Scalar(a.dot_product(b)),
        Command::Cross { a, b } => Output::Vector(a.cross_product(b)),
        Command::Distance { a, b } => Output::Scalar(a.distance(b)),
    };
    Ok(output)
}

impl Output {
    fn is_finite(&self) -> bool {
        match self {
            Output::Scalar(value) => value.is_finite(),
            Output::Vector(v) => v.x.is_finite() && v.y.is_finite() && v.z.is_finite(),
        }
    }
}

/// Renders the result. JSON has no encoding for NaN or infinities, so those
/// results are refused in JSON mode rather than written as `null`.
fn render(output: &Output, json: bool) -> VectorResult<String> {
    if json {
        if !output.is_finite() {
            return Err(VectorError::NonFinite(format!("{:?}", output)));
        }
        return Ok(serde_json::to_string(output)?);
    }
    Ok(match output {
        Output::Scalar(value) => value.to_string(),
        Output::Vector(vector) => vector.to_string(),
    })
}
