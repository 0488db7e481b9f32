use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use hsg_core::ast::{self, ApiSpec};
use hsg_core::synthesize;

#[derive(Parser)]
#[command(name = "hsg", about = "Servant stub-server descriptor synthesizer", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize and print the operation/model descriptors for a spec
    Inspect {
        /// Path to the OpenAPI spec file (YAML or JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Parse a spec and report synthesis failures and diagnostics
    Validate {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "hsg", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn load_spec(path: &PathBuf) -> Result<ApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let spec = match ext {
        "json" => ast::from_json(&content)?,
        _ => ast::from_yaml(&content)?,
    };
    Ok(spec)
}

fn cmd_inspect(input: &PathBuf, format: InspectFormat) -> Result<()> {
    let spec = load_spec(input)?;
    let synthesis = synthesize(&spec);

    let rendered = match format {
        InspectFormat::Yaml => serde_yaml_ng::to_string(&synthesis)?,
        InspectFormat::Json => serde_json::to_string_pretty(&synthesis)?,
    };
    println!("{rendered}");
    Ok(())
}

fn cmd_validate(input: &PathBuf) -> Result<()> {
    let spec = load_spec(input)?;
    let synthesis = synthesize(&spec);

    println!(
        "{}: {} operation(s), {} model(s), {} status code(s)",
        input.display(),
        synthesis.operations.len(),
        synthesis.models.len(),
        synthesis.status_codes.len()
    );

    for diag in &synthesis.diagnostics {
        println!("warning: {diag}");
    }
    for failure in &synthesis.failures {
        println!("error: {} {}: {}", failure.method, failure.path, failure.error);
    }

    if synthesis.failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} operation(s) failed to synthesize", synthesis.failures.len())
    }
}
