//! CLI entry point for blogpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogpress::decorate::SharePlatform;
use blogpress::Blog;

#[derive(Parser)]
#[command(name = "blogpress")]
#[command(version)]
#[command(about = "Render a markdown blog: listings, post pages and share links", long_about = None)]
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
    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List posts, newest first
    List {
        /// Show at most this many posts
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Render one post page to stdout
    Post {
        /// Slug of the post
        slug: String,
    },

    /// Print share links for a post
    Share {
        /// Slug of the post
        slug: String,

        /// Only this platform (twitter, linkedin)
        #[arg(short, long)]
        platform: Option<SharePlatform>,

        /// Copy the post URL to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Clean the public folder
    Clean,

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogpress=debug,info"
    } else {
        "blogpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Generate { watch } => {
            let blog = Blog::new(&base_dir)?;
            tracing::info!("Generating static files...");

            blog.generate().await?;
            println!("Generated successfully!");

            if watch {
                blogpress::commands::generate::watch(&blog).await?;
            }
        }

        Commands::Server { port, ip } => {
            let blog = Blog::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blogpress::server::start(blog, &ip, port).await?;
        }

        Commands::List { limit } => {
            let blog = Blog::new(&base_dir)?;
            blogpress::commands::list::run(&blog, limit)?;
        }

        Commands::Post { slug } => {
            let blog = Blog::new(&base_dir)?;
            blogpress::commands::post::run(&blog, &slug).await?;
        }

        Commands::Share {
            slug,
            platform,
            copy,
        } => {
            let blog = Blog::new(&base_dir)?;
            blogpress::commands::share::run(&blog, &slug, platform, copy).await?;
        }

        Commands::Clean => {
            let blog = Blog::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Version => {
            println!("blogpress version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
