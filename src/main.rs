//! ALFA_PASSHASH - CLI
//!
//! Hash, verify and inspect Argon2id password hashes.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use indicatif::ProgressBar;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use alfa_passhash::{decode, HashParams, PasswordPolicy, ALGORITHM_TAG, ARGON2_VERSION};

#[derive(Parser)]
#[command(name = "alfa-passhash")]
#[command(version = alfa_passhash::VERSION)]
#[command(about = "ALFA_PASSHASH - Argon2id password hashing")]
struct Cli {
    /// JSON policy file (min_length, max_length, params)
    #[arg(short, long, global = true)]
    policy: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Hash a password
    Hash {
        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Parameter preset, overrides the policy file
        #[arg(long, value_enum)]
        preset: Option<Preset>,

        /// Tune memory and lanes for this machine
        #[arg(long)]
        tuned: bool,
    },

    /// Verify a password against a stored hash (exit code 2 on mismatch)
    Verify {
        /// Stored hash
        hash: String,

        /// Password (prompted when omitted)
        #[arg(long)]
        password: Option<String>,

        /// Print stored parameters and whether a rehash is due
        #[arg(long)]
        details: bool,
    },

    /// Decode a hash and print its parameters (no derivation)
    Inspect {
        /// Stored hash
        hash: String,
    },

    /// Print parameters tuned for this machine
    #[cfg(feature = "auto-tune")]
    Tune,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Lambda,
    Interactive,
    LowMemory,
}

impl Preset {
    fn params(self) -> HashParams {
        match self {
            Preset::Lambda => HashParams::LAMBDA,
            Preset::Interactive => HashParams::INTERACTIVE,
            Preset::LowMemory => HashParams::LOW_MEMORY,
        }
    }
}

#[derive(Serialize)]
struct InspectReport<'a> {
    algorithm: &'a str,
    version: u32,
    params: HashParams,
    salt_hex: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").red().bold(), e);
            ExitCode::from(1)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut policy = match &cli.policy {
        Some(path) => PasswordPolicy::load(path)
            .with_context(|| format!("loading policy {}", path.display()))?,
        None => PasswordPolicy::default(),
    };

    match cli.command {
        Commands::Hash { password, preset, tuned } => {
            if let Some(preset) = preset {
                policy.params = preset.params();
            }
            if tuned {
                policy.params = tune(policy.params)?;
            }
            hash_command(&policy, password)
        }

        Commands::Verify { hash, password, details } => {
            let password = read_password(password)?;
            let spinner = spinner("Verifying...");
            let result = policy.verify_detailed(password.expose_secret(), &hash);
            spinner.finish_and_clear();
            let verification = result?;

            if details {
                println!("{}", serde_json::to_string_pretty(&verification)?);
                if verification.matched && verification.needs_rehash(&policy.params) {
                    println!("{} stored parameters differ from policy, rehash recommended", style("!").yellow());
                }
            }

            if verification.matched {
                println!("{}", style("MATCH").green().bold());
                Ok(ExitCode::SUCCESS)
            } else {
                println!("{}", style("NO MATCH").red().bold());
                Ok(ExitCode::from(2))
            }
        }

        Commands::Inspect { hash } => {
            let decoded = decode(&hash)?;
            let report = InspectReport {
                algorithm: ALGORITHM_TAG,
                version: ARGON2_VERSION,
                params: decoded.params,
                salt_hex: hex::encode(&decoded.salt),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(ExitCode::SUCCESS)
        }

        #[cfg(feature = "auto-tune")]
        Commands::Tune => {
            let tuned = tune(policy.params)?;
            println!("{}", serde_json::to_string_pretty(&tuned)?);
            println!("estimated: ~{} ms per hash", tuned.estimated_time_ms());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn hash_command(policy: &PasswordPolicy, password: Option<String>) -> Result<ExitCode> {
    policy.validate()?;
    let password = read_password(password)?;

    let spinner = spinner("Hashing...");
    let result = policy.hash(password.expose_secret());
    spinner.finish_and_clear();

    println!("{}", result?);
    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "auto-tune")]
fn tune(params: HashParams) -> Result<HashParams> {
    Ok(params.tuned_for_host())
}

#[cfg(not(feature = "auto-tune"))]
fn tune(_params: HashParams) -> Result<HashParams> {
    anyhow::bail!("built without the auto-tune feature")
}

fn read_password(password: Option<String>) -> Result<SecretString> {
    let password = match password {
        Some(p) => p,
        None => rpassword::prompt_password("Password: ").context("reading password")?,
    };
    Ok(SecretString::from(password))
}

fn spinner(message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
