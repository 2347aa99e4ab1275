//! themectl - Bricks theme control utility

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use bricks_theme::widgets::{ColorPicker, ThemeToggle};
use bricks_theme::{
    generate_shades, ColorRole, FileStore, ManualPreference, MemorySurface, ThemeMode,
    ThemeService,
};
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{default_config_path, load_config};

#[derive(Parser)]
#[command(name = "themectl", version, about = "Bricks theme control")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preference store file, overrides the configured path
    #[arg(long)]
    store: Option<PathBuf>,

    /// Report the OS color scheme as dark
    #[arg(long, env = "BRICKS_PREFERS_DARK", value_parser = FalseyValueParser::new())]
    system_dark: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current theme
    Show,
    /// List available theme modes
    Modes,
    /// Set the theme mode
    Mode {
        /// light, dark or system
        mode: ThemeMode,
    },
    /// Flip between light and dark
    Toggle,
    /// Set custom accent colors
    Colors {
        /// Primary color (#RRGGBB)
        #[arg(long)]
        primary: Option<String>,
        /// Secondary color (#RRGGBB)
        #[arg(long)]
        secondary: Option<String>,
    },
    /// Reset mode and colors to defaults
    Reset,
    /// Print the shade ramp for a color
    Shades {
        color: String,
        #[arg(long, value_enum, default_value_t = Role::Primary)]
        role: Role,
    },
    /// Print the resulting root CSS
    Css,
}

#[derive(Clone, Copy, ValueEnum)]
enum Role {
    Primary,
    Secondary,
}

impl From<Role> for ColorRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Primary => ColorRole::Primary,
            Role::Secondary => ColorRole::Secondary,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);
    let config = load_config(&config_path)?;

    let log_level = if cli.debug { "debug" } else { config.logging.level.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let store_path = cli.store.clone().unwrap_or(config.store.path.clone());
    let prefers_dark = cli.system_dark || config.system.prefers_dark;
    debug!(store = %store_path.display(), prefers_dark, "Starting themectl");

    let store = FileStore::open(&store_path)
        .with_context(|| format!("opening preference store {}", store_path.display()))?;
    let surface = MemorySurface::new();
    let system = Arc::new(ManualPreference::new(prefers_dark));
    let service = ThemeService::new(store, surface.clone(), system);

    match cli.command {
        Commands::Show => {
            let theme = service.current_theme();
            println!("Theme");
            println!("=====");
            println!("Mode:      {}", theme.mode);
            println!("Dark:      {}", if theme.is_dark { "yes" } else { "no" });
            println!(
                "Primary:   {}",
                theme.colors.primary_color.as_deref().unwrap_or("(default)")
            );
            println!(
                "Secondary: {}",
                theme.colors.secondary_color.as_deref().unwrap_or("(default)")
            );
        }

        Commands::Modes => {
            for (mode, active) in ThemeToggle::new(&service).options() {
                let marker = if active { "*" } else { " " };
                println!("{} {}", marker, mode);
            }
        }

        Commands::Mode { mode } => {
            ThemeToggle::new(&service).set_theme(mode);
            info!(%mode, "Theme mode changed");
            println!("Theme mode set to {}", mode);
        }

        Commands::Toggle => {
            service.toggle();
            info!(mode = %service.mode(), "Theme mode toggled");
            println!("Theme mode set to {}", service.mode());
        }

        Commands::Colors { primary, secondary } => {
            let mut picker = ColorPicker::new(&service);
            let applied = match (primary, secondary) {
                (Some(primary), Some(secondary)) => {
                    picker.primary_color = primary;
                    picker.secondary_color = secondary;
                    picker.apply()
                }
                (Some(primary), None) => {
                    picker.primary_color = primary;
                    picker.update_primary()
                }
                (None, Some(secondary)) => {
                    picker.secondary_color = secondary;
                    picker.update_secondary()
                }
                (None, None) => bail!("specify --primary and/or --secondary"),
            };
            if !applied {
                bail!("colors must be in #RRGGBB form");
            }
            let colors = service.colors();
            info!(?colors, "Custom colors changed");
            println!("Custom colors updated");
            if let Some(primary) = colors.primary_color {
                println!("  primary:   {}", primary);
            }
            if let Some(secondary) = colors.secondary_color {
                println!("  secondary: {}", secondary);
            }
        }

        Commands::Reset => {
            ColorPicker::new(&service).reset();
            info!("Theme reset");
            println!("Theme reset to defaults");
        }

        Commands::Shades { color, role } => {
            let role = ColorRole::from(role);
            for (name, value) in generate_shades(&color, role).custom_properties(role) {
                println!("{}: {};", name, value);
            }
        }

        Commands::Css => {
            print!("{}", surface.to_css());
        }
    }

    Ok(())
}
