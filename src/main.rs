//! CLI entry point for tech-guides

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "tech-guides")]
#[command(version)]
#[command(about = "Read times, listings and the RSS feed for a markdown tech blog", long_about = None)]
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
    /// Generate the RSS feed
    #[command(alias = "rss")]
    Feed {
        /// Output file (defaults to the configured feed path in the public dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the feed instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// List posts newest first
    #[command(alias = "ls")]
    List {
        /// Collection to list (defaults to all)
        collection: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate markdown files against the post schema
    Check {
        /// Collection root used to derive entry ids
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// Markdown files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Serve the feed and listing over HTTP
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4321")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "tech_guides=debug,info"
    } else {
        "tech_guides=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Feed { output, stdout } => {
            let blog = tech_guides::Blog::new(&base_dir)?;
            tracing::info!("Generating feed...");
            tech_guides::commands::feed::run(&blog, output.as_deref(), stdout)?;
        }

        Commands::List { collection, json } => {
            let blog = tech_guides::Blog::new(&base_dir)?;
            tech_guides::commands::list::run(&blog, collection.as_deref(), json)?;
        }

        Commands::Check { root, files } => {
            tech_guides::commands::check::run(root.as_deref(), &files)?;
        }

        Commands::Serve { port, ip } => {
            let blog = tech_guides::Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            tech_guides::server::start(&blog, &ip, port).await?;
        }

        Commands::Version => {
            println!("tech-guides version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
