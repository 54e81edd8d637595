use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use readme_gen_core::{compose, ProjectDescription};
use readme_gen_export::GitHubExporter;

/// Entry point for CLI execution. Returns the desired exit code.
pub fn run() -> Result<i32> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => handle_generate(args),
        Command::Export(args) => handle_export(args),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate professional README files from a project description",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a README from a project description file
    Generate(GenerateArgs),
    /// Render a README and publish it to a GitHub repository
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Project description file (.json or .toml)
    #[arg(value_name = "FILE")]
    description: PathBuf,

    /// Write the README to this path instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Project description file (.json or .toml)
    #[arg(value_name = "FILE")]
    description: PathBuf,

    /// Target repository URL (defaults to the description's repositoryUrl)
    #[arg(long = "repo", value_name = "URL")]
    repo: Option<String>,

    /// GitHub personal access token
    #[arg(long = "token", env = "GITHUB_TOKEN", hide_env_values = true)]
    token: String,
}

fn handle_generate(args: GenerateArgs) -> Result<i32> {
    let project = load_description(&args.description)?;
    let document = compose(&project)?;

    match args.output {
        Some(path) => {
            fs::write(&path, &document)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
        None => print!("{document}"),
    }

    Ok(0)
}

fn handle_export(args: ExportArgs) -> Result<i32> {
    let project = load_description(&args.description)?;
    let document = compose(&project)?;

    let repo = args
        .repo
        .or_else(|| project.repository_url.clone())
        .filter(|repo| !repo.trim().is_empty());
    let repo = match repo {
        Some(repo) => repo,
        None => bail!("no repository URL: pass --repo or set repositoryUrl in the description"),
    };

    let exporter = GitHubExporter::new();
    let outcome = exporter.export(&repo, &document, &args.token)?;
    println!("{}", outcome.message);
    Ok(0)
}

fn load_description(path: &Path) -> Result<ProjectDescription> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if is_json {
        serde_json::from_str(&raw)
            .with_context(|| format!("invalid JSON project description in {}", path.display()))
    } else {
        toml::from_str(&raw)
            .with_context(|| format!("invalid TOML project description in {}", path.display()))
    }
}
