use clap::{Parser, Subcommand};
use hn_app::{AppError, AppResult, OutputFormat, calc_service, project_service};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hn-cli")]
#[command(about = "Heat-need calculator - normative building heating demand", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a building file
    Validate {
        /// Path to the building file (.yaml, .yml or .json)
        project_path: PathBuf,
    },
    /// Calculate heat need and compliance for a building file
    Calc {
        /// Path to the building file (.yaml, .yml or .json)
        project_path: PathBuf,
        /// Report format: text or json
        #[arg(long, default_value = "text")]
        format: OutputFormat,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the normative lookup tables
    Tables,
    /// Write a sample building file
    Init {
        /// Destination path (.yaml, .yml or .json)
        project_path: PathBuf,
        /// Building name stored in the file
        #[arg(long, default_value = "Sample building")]
        name: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> AppResult<()> {
    let filter = EnvFilter::try_from_env("HN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Calc {
            project_path,
            format,
            output,
        } => cmd_calc(&project_path, format, output.as_deref()),
        Commands::Tables => cmd_tables(),
        Commands::Init {
            project_path,
            name,
            force,
        } => cmd_init(&project_path, &name, force),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    info!(path = %project_path.display(), "validate");
    println!("Validating building file: {}", project_path.display());
    let project = project_service::load_project(project_path)?;
    project_service::validate_project(&project)?;

    let summary = project_service::summarize(&project);
    println!("✓ Building file is valid");
    println!("  Name: {}", summary.name);
    println!("  Version: {}", summary.version);
    println!(
        "  Category: {}",
        summary.category.as_deref().unwrap_or("(none)")
    );
    println!("  Envelope rows: {}", summary.envelope_rows);
    println!("  Glazed orientations: {}", summary.glazed_orientations);
    Ok(())
}

fn cmd_calc(project_path: &Path, format: OutputFormat, output: Option<&Path>) -> AppResult<()> {
    info!(path = %project_path.display(), ?format, "calc");
    let response = calc_service::calculate_file(project_path)?;
    let rendered = calc_service::format_report(&response.report, format)?;
    let verdict = if response.report.all_compliant() {
        "all checks compliant"
    } else {
        "non-compliant"
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("✓ Report written to {} ({verdict})", path.display());
        }
        None => print!("{rendered}"),
    }

    if format == OutputFormat::Text && output.is_none() {
        println!();
        println!("Fingerprint: {}", response.report.fingerprint()?);
    }
    Ok(())
}

fn cmd_tables() -> AppResult<()> {
    info!("tables");
    print!("{}", hn_report::render_tables());
    Ok(())
}

fn cmd_init(project_path: &Path, name: &str, force: bool) -> AppResult<()> {
    info!(path = %project_path.display(), name, force, "init");
    if project_path.exists() && !force {
        return Err(AppError::Save {
            path: project_path.to_path_buf(),
            message: "file exists (use --force to overwrite)".to_string(),
        });
    }
    let project = project_service::sample_project(name);
    project_service::save_project(project_path, &project)?;
    println!("✓ Wrote sample building to {}", project_path.display());
    Ok(())
}
