use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;

use crate::config::{default_package_name, GeneratorConfig};
use crate::generator::{
    ArtifactAction, ComponentKind, GeneratedArtifact, Generator, InitOptions, ResourceReport,
};
use crate::logging::{init_logging, LogConfig};

/// Command-line interface for the Gin scaffolding tool
#[derive(Parser)]
#[command(name = "gs", version)]
#[command(about = "Scaffold Gin applications from templates", long_about = None)]
pub struct Cli {
    /// Template root (contains `component/` and `project/`); discovered when omitted
    #[arg(long, global = true, env = "GS_TEMPLATES_DIR")]
    pub templates: Option<PathBuf>,

    /// Print generated files as JSON instead of text
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new Gin project from the `project/` template tree
    Init {
        /// Project directory name, or `.` for the current directory
        name: String,

        /// Go module name (defaults to the project name)
        #[arg(short, long, default_value = "")]
        module: String,

        /// Initialize even if the project directory already exists
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Create one component, a full feature, or a resource bundle
    Create {
        /// What to create
        #[arg(value_enum)]
        target: CreateTarget,

        /// Resource name, e.g. `User`
        name: String,

        /// Go package/module path (defaults to the `module` line of ./go.mod)
        #[arg(short, long)]
        package: Option<String>,
    },
}

/// Targets accepted by `gs create`
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CreateTarget {
    Controller,
    Model,
    Route,
    Router,
    Service,
    Test,
    Example,
    /// model, service, controller, route, test and example; stops at the first error
    Feature,
    /// controller, model, router and service; reports every error and keeps going
    Resource,
}

impl CreateTarget {
    fn component(self) -> Option<ComponentKind> {
        match self {
            CreateTarget::Controller => Some(ComponentKind::Controller),
            CreateTarget::Model => Some(ComponentKind::Model),
            CreateTarget::Route => Some(ComponentKind::Route),
            CreateTarget::Router => Some(ComponentKind::Router),
            CreateTarget::Service => Some(ComponentKind::Service),
            CreateTarget::Test => Some(ComponentKind::Test),
            CreateTarget::Example => Some(ComponentKind::Example),
            CreateTarget::Feature | CreateTarget::Resource => None,
        }
    }
}

/// Parse arguments, set up logging and execute the command.
///
/// # Errors
///
/// Returns the first generator error for `init`, single components and
/// `create feature`. `create resource` only fails if writing the report fails.
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config = log_config.verbose();
    }
    init_logging(&log_config)?;

    let config = match &cli.templates {
        Some(dir) => GeneratorConfig::new(dir),
        None => GeneratorConfig::discover(),
    };
    run(&cli, config, &mut std::io::stdout().lock())
}

/// Execute `cli` against `config`, writing the user-facing report to `out`.
pub fn run(cli: &Cli, config: GeneratorConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let generator = Generator::new(config);
    match &cli.command {
        Commands::Init {
            name,
            module,
            force,
        } => {
            let artifacts = generator
                .init_project_with_options(name, module, &InitOptions { force: *force })
                .with_context(|| format!("Failed to initialize project '{name}'"))?;
            report_artifacts(out, &artifacts, cli.json)?;
            if !cli.json {
                writeln!(out, "🎉 Project {name} initialized")?;
            }
            Ok(())
        }
        Commands::Create {
            target,
            name,
            package,
        } => {
            let package = package
                .clone()
                .unwrap_or_else(|| default_package_name(&generator.config().output_root));
            match target.component() {
                Some(kind) => {
                    let artifact = generator
                        .generate(kind, name, &package)
                        .with_context(|| format!("Failed to create {kind} '{name}'"))?;
                    report_artifacts(out, &[artifact], cli.json)
                }
                None if *target == CreateTarget::Feature => {
                    let artifacts = generator
                        .generate_feature(name, &package)
                        .with_context(|| format!("Failed to create feature '{name}'"))?;
                    report_artifacts(out, &artifacts, cli.json)
                }
                None => {
                    let report = generator.generate_resource(name, &package);
                    report_resource(out, &report, cli.json)
                }
            }
        }
    }
}

fn relative(path: &Path) -> &Path {
    path.strip_prefix(".").unwrap_or(path)
}

fn report_artifacts(
    out: &mut dyn Write,
    artifacts: &[GeneratedArtifact],
    as_json: bool,
) -> anyhow::Result<()> {
    if as_json {
        writeln!(out, "{}", serde_json::to_string_pretty(artifacts)?)?;
        return Ok(());
    }
    for artifact in artifacts {
        let path = relative(&artifact.path).display();
        match artifact.action {
            ArtifactAction::Rendered => writeln!(out, "✅ Generated {path}")?,
            ArtifactAction::Copied => writeln!(out, "📄 Copied {path}")?,
        }
    }
    Ok(())
}

fn report_resource(out: &mut dyn Write, report: &ResourceReport, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        let failures: Vec<_> = report
            .failures
            .iter()
            .map(|(kind, err)| json!({ "component": kind.as_str(), "error": err.to_string() }))
            .collect();
        let doc = json!({ "artifacts": report.artifacts, "failures": failures });
        writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        return Ok(());
    }
    report_artifacts(out, &report.artifacts, false)?;
    for (kind, err) in &report.failures {
        writeln!(out, "⚠️  Failed to create {kind}: {err}")?;
    }
    writeln!(
        out,
        "Resource done: {} created, {} failed",
        report.artifacts.len(),
        report.failures.len()
    )?;
    Ok(())
}
