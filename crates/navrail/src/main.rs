//! navrail - Collapsible navigation sidebar demo and tooling

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use navrail_core::ColorScheme;

#[derive(Parser)]
#[command(
    name = "navrail",
    version,
    about = "Collapsible, theme-toggling navigation sidebar for web dashboards",
    long_about = "Renders a collapsible, theme-toggling navigation sidebar built with Leptos.\n\
                  \n\
                  The sidebar ships as a WASM component; this binary serves the demo page,\n\
                  inspects the navigation tables and theme palettes, and manages the\n\
                  persisted theme preference.\n\
                  \n\
                  Examples:\n\
                    navrail                          # Serve the demo (default)\n\
                    navrail serve --port 8080        # Custom port\n\
                    navrail routes                   # Print the navigation tables\n\
                    navrail palette --theme light    # Print the light palette\n\
                    navrail theme dark               # Persist dark as the preference\n\
                  \n\
                  Web Frontend Workflow:\n\
                    cd crates/navrail-web && trunk serve   # Hot-reload dev server\n\
                  \n\
                  Environment Variables:\n\
                    NAVRAIL_THEME                    # Color scheme override: dark|light\n\
                    NAVRAIL_NO_COLOR                 # Disable ANSI colors (log-friendly)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Color scheme override (dark|light)
    #[arg(long, env = "NAVRAIL_THEME", value_parser = ["dark", "light"])]
    theme: Option<String>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "NAVRAIL_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the demo web server (default)
    Serve {
        /// Port for the demo server
        #[arg(long, default_value = "4400")]
        port: u16,
    },
    /// Print the navigation route tables
    Routes {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a scheme's color roles
    Palette {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or persist the preferred color scheme
    Theme {
        /// Scheme to persist; omit to show the current preference
        #[arg(value_parser = ["dark", "light"])]
        scheme: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Flag and env values are pre-validated by clap
    let theme_override: Option<ColorScheme> = cli
        .theme
        .as_deref()
        .map(str::parse)
        .transpose()?;
    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Serve { port: 4400 }) {
        Mode::Serve { port } => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                .init();
            navrail_web::run(cli::effective_scheme(theme_override), port).await?;
        }
        Mode::Routes { json } => {
            println!("{}", cli::format_routes(json, no_color));
        }
        Mode::Palette { json } => {
            let scheme = cli::effective_scheme(theme_override);
            println!("{}", cli::format_palette(scheme, json, no_color));
        }
        Mode::Theme { scheme } => {
            let scheme = scheme.as_deref().map(str::parse).transpose()?;
            println!("{}", cli::run_theme(scheme)?);
        }
    }

    Ok(())
}
