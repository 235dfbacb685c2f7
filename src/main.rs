use clap::Parser;
use quill::core::config::{self, CliOverrides, EnvOverrides, QuillConfig};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "quill", about = "Raw-mode terminal shell for a local Ollama model")]
struct Args {
    /// Model to send prompts to
    #[arg(short, long)]
    model: Option<String>,

    /// Ollama server base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Log level written to quill.log
    #[arg(long, default_value = "debug")]
    log_level: String,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quill.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let level = args.log_level.parse().unwrap_or(LevelFilter::Debug);
    if let Ok(log_file) = File::create("quill.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        QuillConfig::default()
    });
    let resolved = config::resolve(
        &file_config,
        &EnvOverrides::from_env(),
        &CliOverrides {
            model: args.model.as_deref(),
            ollama_base_url: args.base_url.as_deref(),
        },
    );

    log::info!(
        "Quill starting up with model {} at {}",
        resolved.model_name,
        resolved.ollama_base_url
    );

    quill::tui::run(&resolved)
}
