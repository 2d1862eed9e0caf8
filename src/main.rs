//! XSLT Playground CLI
//!
//! Usage:
//!   xslt-playground [OPTIONS] --template <FILE> [SOURCE]
//!
//! Options:
//!   -t, --template <FILE>     XSLT template to apply
//!   -p, --param <NAME=VALUE>  Template parameter (repeatable, last one wins)
//!   -c, --config <FILE>       Configuration file (TOML format)
//!   -s, --save <DIR>          Save the output as a download artifact in DIR
//!   -l, --layout              Print the configured panel widths and exit
//!   -h, --help                Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use xslt_playground::transform::command::program_available;
use xslt_playground::{
    CommandEngine, LayoutState, Parameter, ParameterList, PlaygroundConfig, PlaygroundEvent,
    PlaygroundState, TransformPipeline,
};

/// Pane names in display order
const PANES: [&str; 3] = ["template", "source", "output"];

#[derive(Parser)]
#[command(name = "xslt-playground")]
#[command(about = "Apply an XSLT template to an XML document and pretty-print the result")]
struct Cli {
    /// Source XML document (reads from stdin if not provided)
    source: Option<PathBuf>,

    /// XSLT template to apply
    #[arg(short, long, required_unless_present = "layout")]
    template: Option<PathBuf>,

    /// Print the configured panel widths and exit
    #[arg(short, long)]
    layout: bool,

    /// Template parameter as name=value (repeatable, last one wins)
    #[arg(short, long = "param", value_name = "NAME=VALUE")]
    params: Vec<Parameter>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save the output as a download artifact in this directory
    #[arg(short, long, value_name = "DIR")]
    save: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => match PlaygroundConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PlaygroundConfig::default(),
    };

    if cli.layout {
        let layout = LayoutState::new(config.layout);
        for (index, width) in layout.panels().css_widths().iter().enumerate() {
            let pane = PANES
                .get(index)
                .map(|name| name.to_string())
                .unwrap_or_else(|| format!("panel {}", index + 1));
            println!("{:<8} {}", pane, width);
        }
        return;
    }

    let Some(template_path) = cli.template.as_deref() else {
        eprintln!("Error: --template is required");
        std::process::exit(1);
    };

    if !program_available(&config.engine.program) {
        warn!(program = %config.engine.program, "XSLT processor not found on PATH");
    }

    let template = read_file(template_path);
    let (source_name, source) = match &cli.source {
        Some(path) => (path.display().to_string(), read_file(path)),
        None => {
            if io::stdin().is_terminal() {
                eprintln!("Error: no source document given (pass a file or pipe one on stdin)");
                std::process::exit(1);
            }
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                std::process::exit(1);
            }
            ("<stdin>".to_string(), buffer)
        }
    };

    let pipeline = TransformPipeline::new(CommandEngine::new(config.engine.clone()));
    let parameters: ParameterList = cli.params.into_iter().collect();
    let state = PlaygroundState::new()
        .apply(PlaygroundEvent::ParametersChanged(parameters), &pipeline)
        .apply(PlaygroundEvent::TemplateChanged(template), &pipeline)
        .apply(PlaygroundEvent::SourceChanged(source), &pipeline);

    if let Some(banner) = state.banner() {
        // Nothing earlier to fall back on in a one-shot run
        let template_name = template_path.display().to_string();
        eprintln!("{}", banner.summary());
        eprintln!(
            "{}",
            banner.report(
                (template_name.as_str(), state.template.text.as_str()),
                (source_name.as_str(), state.source.text.as_str()),
                io::stderr().is_terminal(),
            )
        );
        std::process::exit(1);
    }

    if state.output().is_empty() {
        eprintln!("Error: template and source must both be non-empty");
        std::process::exit(1);
    }

    println!("{}", state.output());

    if let Some(dir) = &cli.save {
        if let Some(artifact) = state.artifact(&config.download) {
            match artifact.write_to(dir) {
                Ok(path) => eprintln!("Saved {} ({})", path.display(), artifact.mime_type),
                Err(e) => {
                    eprintln!("Error saving output to '{}': {}", dir.display(), e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn read_file(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading file '{}': {}", path.display(), e);
            std::process::exit(1);
        }
    }
}
