//! Motorspec - engine reference catalog CLI
//!
//! Prints catalog listings and page models as JSON for the site renderer,
//! and exposes the form handlers for manual testing.

use clap::Parser;
use motorspec::{
    config::AppConfig,
    forms::{self, ContactSubmission, NewsletterSubscription},
    load_catalog, log_error, log_info, logging,
    page::PageBuilder,
    related::WindowPolicy,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// List all brands
    Brands,
    /// List a brand's engines in published order
    Engines {
        /// Brand slug
        brand: String,
    },
    /// Print the full page model for an engine
    Show {
        brand: String,
        id: String,
    },
    /// Print the related engines for an engine
    Related {
        brand: String,
        id: String,
        /// Engines wanted before the current one
        #[arg(long)]
        before: Option<usize>,
        /// Engines wanted after the current one
        #[arg(long)]
        after: Option<usize>,
        /// Maximum number of related engines
        #[arg(long)]
        total: Option<usize>,
    },
    /// Submit the contact form
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        message: String,
    },
    /// Subscribe to the newsletter
    Subscribe {
        #[arg(long)]
        email: String,
    },
}

#[derive(Parser, Debug)]
#[command(name = "motorspec")]
#[command(version)]
#[command(
    about = "Engine reference catalog: specs, reliability and SEO page models",
    long_about = None
)]
struct Args {
    /// Configuration file path (overrides defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory with extra brand TOML files
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut app_config = AppConfig::load(args.config.as_deref())?;
    if let Some(dir) = args.data_dir {
        app_config.data_dir = Some(dir);
    }
    app_config.validate()?;

    init_logging(args.verbose, app_config.debug);

    let catalog = match load_catalog(&app_config) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            log_error!("Failed to load catalog: {}", e);
            return Err(e.into());
        }
    };
    let pages = PageBuilder::new(catalog, app_config);

    match args.command {
        Command::Brands => {
            for brand in pages.catalog().brands() {
                println!("{}\t{}\t{} engines", brand.slug, brand.name, brand.engines.len());
            }
        }
        Command::Engines { brand } => {
            let index = pages.brand_index(&brand)?;
            print_json(&index)?;
        }
        Command::Show { brand, id } => {
            let page = pages.build(&brand, &id)?;
            print_json(page.as_ref())?;
        }
        Command::Related {
            brand,
            id,
            before,
            after,
            total,
        } => {
            let defaults = pages.config().related;
            let policy = WindowPolicy::new(
                before.unwrap_or(defaults.before),
                after.unwrap_or(defaults.after),
                total.unwrap_or(defaults.total),
            );
            print_json(&pages.related_with(&brand, &id, policy))?;
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let response = forms::submit_contact(ContactSubmission {
                name,
                email,
                subject,
                message,
            })
            .await?;
            print_json(&response)?;
        }
        Command::Subscribe { email } => {
            let response = forms::subscribe_newsletter(NewsletterSubscription { email }).await?;
            print_json(&response)?;
        }
    }

    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Initialize logging
fn init_logging(verbose: bool, debug_mode: bool) {
    // Stdout carries JSON output, so tracing goes to stderr and the session log to file
    match logging::init_logger() {
        Ok(path) => log_info!("motorspec started, log at {}", path.display()),
        Err(e) => eprintln!("warning: file logging disabled: {}", e),
    }
    logging::set_debug_mode(debug_mode);

    let filter = if verbose || debug_mode {
        "motorspec=debug,info"
    } else {
        "motorspec=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
