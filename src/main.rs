//! vibe-tweet CLI
//!
//! Generate template-based sample posts from a topic and a style preset,
//! either one-shot on the command line or through the interactive form.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use vibe_tweet::clipboard::SystemClipboard;
use vibe_tweet::config::{default_config_path, default_log_path, load_config, save_config, to_json, Config};
use vibe_tweet::error::Result;
use vibe_tweet::generator::{generate, generate_batch_checked, require_topic};
use vibe_tweet::report::{format_posts, format_styles};
use vibe_tweet::types::{GeneratedPost, OutputFormat, StyleKey, ThemeMode};

#[derive(Parser)]
#[command(name = "vibe-tweet")]
#[command(about = "Generate sample posts in a chosen style")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate three posts (or one with --variant) and print them
    Generate {
        /// What the posts are about
        topic: String,

        /// Style preset: web3-native, explainer, hot-take (default: from config)
        #[arg(short, long)]
        style: Option<String>,

        /// Print only this variant
        #[arg(long)]
        variant: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// List style presets and their guidance rules
    Styles {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Open the interactive form (default)
    Tui {
        /// Initial style preset
        #[arg(short, long)]
        style: Option<String>,

        /// Start in light mode
        #[arg(long, conflicts_with = "dark")]
        light: bool,

        /// Start in dark mode
        #[arg(long)]
        dark: bool,
    },

    /// Manage the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let interactive = matches!(cli.command, None | Some(Commands::Tui { .. }));

    init_logging(cli.verbose, interactive);

    let result = match cli.command {
        Some(Commands::Generate { topic, style, variant, format }) => {
            cmd_generate(&config_path, &topic, style.as_deref(), variant, format.into())
        }
        Some(Commands::Styles { format }) => {
            print!("{}", format_styles(format.into()));
            Ok(())
        }
        Some(Commands::Tui { style, light, dark }) => cmd_tui(&config_path, style.as_deref(), light, dark),
        Some(Commands::Config { command }) => cmd_config(&config_path, command),
        None => cmd_tui(&config_path, None, false, false),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// LOGGING
// ============================================================================

/// CLI commands log to stderr. The TUI owns the terminal, so it logs to a
/// file instead; if that file can't be opened, logging stays off.
fn init_logging(verbose: bool, interactive: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if !interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let path = default_log_path();
    let file = path
        .parent()
        .map_or(Ok(()), fs::create_dir_all)
        .and_then(|()| File::options().create(true).append(true).open(&path));

    if let Ok(file) = file {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn resolve_style(arg: Option<&str>, config: &Config) -> Result<StyleKey> {
    match arg {
        Some(s) => s.parse(),
        None => Ok(config.default_style),
    }
}

fn cmd_generate(
    config_path: &Path,
    topic: &str,
    style: Option<&str>,
    variant: Option<usize>,
    format: OutputFormat,
) -> Result<()> {
    let config = load_config(config_path)?;
    let style = resolve_style(style, &config)?;

    let posts = match variant {
        Some(v) => {
            require_topic(topic)?;
            vec![GeneratedPost {
                variant: v,
                text: generate(topic, style, v),
            }]
        }
        None => generate_batch_checked(topic, style)?,
    };
    debug!(count = posts.len(), "generated posts");

    print!("{}", format_posts(topic, style, &posts, format));
    Ok(())
}

fn cmd_tui(config_path: &Path, style: Option<&str>, light: bool, dark: bool) -> Result<()> {
    let mut config = load_config(config_path)?;
    config.default_style = resolve_style(style, &config)?;
    if light {
        config.theme = ThemeMode::Light;
    } else if dark {
        config.theme = ThemeMode::Dark;
    }

    let mut clipboard = SystemClipboard::new();
    vibe_tweet::tui::run(&config, &mut clipboard)?;
    Ok(())
}

fn cmd_config(config_path: &Path, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", config_path.display());
        }
        ConfigCommands::Show => {
            let config = load_config(config_path)?;
            println!("{}", to_json(&config));
        }
        ConfigCommands::Init { force } => {
            save_config(&Config::default(), config_path, force)?;
            println!("Wrote {}", config_path.display());
        }
    }
    Ok(())
}
