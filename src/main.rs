//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::content::query::{ListingQuery, SortOrder};

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(version)]
#[command(about = "Markdown-backed blog content for a personal portfolio site", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, newest first
    #[command(alias = "ls")]
    List {
        /// Only posts with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Only posts whose title, subtitle or summary contain this text
        #[arg(short, long)]
        search: Option<String>,

        /// Oldest posts first
        #[arg(long)]
        oldest: bool,
    },

    /// List tags with post counts
    Tags,

    /// Show a single post
    Show {
        /// Slug of the post
        slug: String,

        /// Print the body rendered as HTML
        #[arg(long)]
        html: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Slug to use instead of one derived from the title
        #[arg(short, long)]
        slug: Option<String>,

        /// Tags for the post
        #[arg(short, long)]
        tag: Vec<String>,
    },

    /// Validate every post
    Check,

    /// Render posts and the listing index into the public directory
    #[command(alias = "b")]
    Build,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let folio = folio_rs::Folio::new(&base_dir)?;
    folio.ensure_content_root()?;

    match cli.command {
        Commands::List {
            tag,
            search,
            oldest,
        } => {
            let query = ListingQuery {
                search,
                tag,
                order: if oldest {
                    SortOrder::Oldest
                } else {
                    SortOrder::Newest
                },
            };
            folio_rs::commands::list::run(&folio, &query)?;
        }

        Commands::Tags => {
            folio_rs::commands::list::tags(&folio)?;
        }

        Commands::Show { slug, html } => {
            folio_rs::commands::show::run(&folio, &slug, html)?;
        }

        Commands::New { title, slug, tag } => {
            let path = folio_rs::commands::new::create_post(&folio, &title, slug.as_deref(), &tag)?;
            println!("Created: {:?}", path);
        }

        Commands::Check => {
            folio_rs::commands::check::run(&folio)?;
        }

        Commands::Build => {
            tracing::info!("Building blog into {:?}", folio.public_dir);
            let count = folio_rs::commands::build::run(&folio)?;
            println!("Built {} posts", count);
        }
    }

    Ok(())
}
