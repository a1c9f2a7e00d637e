use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use pp_core::{categories, ArticleStore, FeedQuery, FeedView, SectionView};
use pp_web::AppState;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "patchpoint", author, version, about = "PatchPoint news feed", long_about = None)]
pub struct Cli {
    /// Article store backend: memory (bundled sample stories) or json
    #[arg(long, env = "PATCHPOINT_STORAGE", default_value = pp_storage::DEFAULT_STORAGE)]
    storage: String,
    /// Path to the articles file for the json backend
    #[arg(long, env = "PATCHPOINT_BACKEND_URL")]
    backend_url: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the composed feed
    Feed {
        /// Case-insensitive search over titles and summaries
        #[arg(long, short)]
        query: Option<String>,
        /// Only show this category ("All" for every category)
        #[arg(long, short)]
        category: Option<String>,
        /// Print the feed as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the selectable categories
    Categories,
    /// Serve the feed over HTTP
    Serve {
        #[arg(long, env = "PATCHPOINT_ADDR", default_value = "127.0.0.1:3000")]
        addr: String,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn print_section(section: &SectionView) {
    println!("== {} ({}) ==", section.label, section.variant.as_str());
    for card in &section.cards {
        println!("  [{}] {}", card.article.category, card.article.title);
        if !card.article.summary.is_empty() {
            println!("      {}", card.article.summary);
        }
        println!("      {} · {} · {}", card.article.source, card.age, card.image_url);
    }
    println!();
}

fn print_feed(view: &FeedView) {
    println!("Categories: {}", view.categories.join(" | "));
    println!();
    if view.empty {
        println!("No articles match your search.");
        return;
    }
    for section in &view.sections {
        print_section(section);
    }
}

async fn run_feed(store: Arc<dyn ArticleStore>, query: FeedQuery, json: bool) -> anyhow::Result<()> {
    let articles = store.list_articles().await?;
    info!("📰 Composing feed from {} articles", articles.len());
    let view = FeedView::new(query.compose(&articles), categories(&articles), Utc::now());

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_feed(&view);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let store = pp_storage::create_storage(&cli.storage, cli.backend_url.as_deref())
        .await
        .with_context(|| format!("failed to open {} storage", cli.storage))?;
    info!("💾 Storage ready (using {})", store.name());

    match cli.command {
        Commands::Feed { query, category, json } => {
            run_feed(store, FeedQuery::new(query, category), json).await?;
        }
        Commands::Categories => {
            let articles = store.list_articles().await?;
            for category in categories(&articles) {
                println!("{}", category);
            }
        }
        Commands::Serve { addr } => {
            pp_web::serve(AppState { store }, &addr)
                .await
                .with_context(|| format!("failed to serve on {}", addr))?;
        }
    }

    Ok(())
}
