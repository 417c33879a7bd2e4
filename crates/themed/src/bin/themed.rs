//! Command line front end: inspect themes and resolved component styles.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use themed::{resolve, ColorMode, Components, Renderable, Style, Theme, TokenEngine};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Parser)]
#[command(name = "themed", version, about = "Resolve document component styles from a theme")]
struct Cli {
    /// Theme file (.json, .yaml or .yml)
    #[arg(long, global = true, env = "THEMED_THEME")]
    theme: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the default component keys and the element each renders
    Keys,
    /// Print the theme declaration for a component key
    Resolve {
        /// Component key, e.g. h1 or inlineCode
        key: String,
    },
    /// Resolve, merge an instance style and compute theme tokens
    Compute {
        /// Component key, e.g. h1 or inlineCode
        key: String,
        /// Instance style as JSON, merged over the theme declaration
        #[arg(long)]
        sx: Option<String>,
        /// Color mode used for `colors.modes.<mode>` lookups
        #[arg(long, value_enum, default_value_t = ModeArg::Auto)]
        mode: ModeArg,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Auto,
    Light,
    Dark,
    None,
}

impl ModeArg {
    fn color_mode(self) -> Option<ColorMode> {
        match self {
            ModeArg::Auto => Some(ColorMode::detect()),
            ModeArg::Light => Some(ColorMode::Light),
            ModeArg::Dark => Some(ColorMode::Dark),
            ModeArg::None => None,
        }
    }
}

fn init_logging(verbose: u8) {
    let default_directive = match verbose {
        0 => "themed=warn",
        1 => "themed=debug",
        _ => "themed=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .init();
}

fn load_theme(path: Option<&PathBuf>) -> Result<Option<Theme>> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading theme");
            let theme = Theme::from_file(path)
                .with_context(|| format!("loading theme {}", path.display()))?;
            Ok(Some(theme))
        }
        None => Ok(None),
    }
}

/// One `key tag` line per registry entry, in registry order.
fn keys_listing(components: &Components) -> String {
    components
        .iter()
        .map(|(key, renderable)| {
            let target = match renderable {
                Renderable::Tag(name) => name.as_str(),
                Renderable::Component(_) => "<component>",
            };
            format!("{key:<14} {target}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn compute_style(
    key: &str,
    sx: Option<&str>,
    mode: ModeArg,
    theme: Option<&Theme>,
) -> Result<Style> {
    let mut style = resolve(key, theme);
    if let Some(sx) = sx {
        let instance: Style = serde_json::from_str(sx).context("--sx must be a JSON object")?;
        style.merge(&instance);
    }
    let Some(theme) = theme else {
        return Ok(style);
    };
    let engine = TokenEngine::new(theme);
    let engine = match mode.color_mode() {
        Some(mode) => engine.with_mode(mode),
        None => engine,
    };
    Ok(engine.compute(&style))
}

fn run(cli: &Cli) -> Result<String> {
    let theme = load_theme(cli.theme.as_ref())?;

    let output = match &cli.command {
        Command::Keys => keys_listing(&Components::defaults()),
        Command::Resolve { key } => serde_json::to_string_pretty(&resolve(key, theme.as_ref()))?,
        Command::Compute { key, sx, mode } => {
            let style = compute_style(key, sx.as_deref(), *mode, theme.as_ref())?;
            serde_json::to_string_pretty(&style)?
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("{}", run(&cli)?);
    Ok(())
}
