use anyhow::{Context as AnyhowContext, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

mod corpus_source;
mod http_api;
mod models;
mod render;
mod server_security;
mod service;

pub use corpus_source::{CorpusProvider, CorpusSource};
pub use http_api::{router, HttpState};

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    print_stdout(&serde_json::to_string_pretty(value)?)
}

#[derive(Parser)]
#[command(name = "bible")]
#[command(about = "Look up verses and daily meditations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Corpus JSON file (overrides BIBLE_DATA_PATH; defaults to the bundled sample)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a verse
    Search(SearchArgs),

    /// Show today's meditation
    Today(TodayArgs),

    /// Start meditation on a verse
    Meditate(MeditateArgs),

    /// List every verse in the corpus
    Verses(ListArgs),

    /// List every perspective in the corpus
    Perspectives(ListArgs),

    /// Serve the lookup API over HTTP
    #[command(name = "serve-http")]
    ServeHttp(ServeArgs),
}

#[derive(Args)]
struct SearchArgs {
    /// 검색어 또는 참조(예: 요한복음 3:16)
    query: String,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct MeditateArgs {
    /// 묵상할 본문(예: 로마서 8:28)
    query: String,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TodayArgs {
    /// Date to show instead of today (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg)]
    date: Option<NaiveDate>,

    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ListArgs {
    /// Output JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:8000
    #[arg(long, default_value = "127.0.0.1:8000")]
    bind: String,

    /// Allow binding to non-loopback addresses
    #[arg(long)]
    public: bool,

    /// Re-read the corpus on every request instead of caching it
    #[arg(long)]
    reload: bool,
}

fn parse_date_arg(raw: &str) -> std::result::Result<NaiveDate, String> {
    service::parse_date(raw).map_err(|err| err.to_string())
}

pub async fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers.
    let json_output = match &cli.command {
        Commands::Search(args) => args.json,
        Commands::Today(args) => args.json,
        Commands::Meditate(args) => args.json,
        Commands::Verses(args) | Commands::Perspectives(args) => args.json,
        Commands::ServeHttp(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let source = CorpusSource::resolve(cli.data);
    log::debug!("Corpus source: {}", source.describe());

    match cli.command {
        Commands::Search(args) => run_search(args, &source)?,
        Commands::Today(args) => run_today(args, &source)?,
        Commands::Meditate(args) => run_meditate(args, &source)?,
        Commands::Verses(args) => run_verses(args, &source)?,
        Commands::Perspectives(args) => run_perspectives(args, &source)?,
        Commands::ServeHttp(args) => serve_http(args, source).await?,
    }

    Ok(())
}

fn run_search(args: SearchArgs, source: &CorpusSource) -> Result<()> {
    let query = service::require_query(Some(args.query.as_str()))?;
    let corpus = source.load()?;
    let response = service::search(&corpus, query)?;
    if args.json {
        print_json(&response)
    } else {
        print_stdout(&render::search(&response))
    }
}

fn run_today(args: TodayArgs, source: &CorpusSource) -> Result<()> {
    let corpus = source.load()?;
    let date = args.date.unwrap_or_else(service::local_today);
    let response = service::today(&corpus, date)?;
    if args.json {
        print_json(&response)
    } else {
        print_stdout(&render::today(&response))
    }
}

fn run_meditate(args: MeditateArgs, source: &CorpusSource) -> Result<()> {
    let query = service::require_query(Some(args.query.as_str()))?;
    let corpus = source.load()?;
    let response = service::meditate(&corpus, query);
    if args.json {
        print_json(&response)
    } else {
        print_stdout(&render::meditate(&response))
    }
}

fn run_verses(args: ListArgs, source: &CorpusSource) -> Result<()> {
    let corpus = source.load()?;
    let response = service::verses(&corpus);
    if args.json {
        print_json(&response)
    } else {
        print_stdout(&render::verses(&response))
    }
}

fn run_perspectives(args: ListArgs, source: &CorpusSource) -> Result<()> {
    let corpus = source.load()?;
    let response = service::perspectives(&corpus);
    if args.json {
        print_json(&response)
    } else {
        print_stdout(&render::perspectives(&response))
    }
}

async fn serve_http(args: ServeArgs, source: CorpusSource) -> Result<()> {
    let addrs = server_security::resolve_guarded_bind_addrs(&args.bind, args.public).await?;

    // A bad corpus is a configuration error: fail before accepting connections.
    let provider = CorpusProvider::new(source, args.reload);
    let corpus = provider.get().context("Refusing to serve without a valid corpus")?;
    log::info!(
        "Corpus {} loaded: verses={} meditations={} reload={}",
        provider.source().describe(),
        corpus.verses.len(),
        corpus.meditations.len(),
        args.reload
    );

    let app = router(Arc::new(HttpState::new(provider)));
    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    let local_addr = listener.local_addr()?;
    let base_url = format!("http://{local_addr}");

    print_stdout(&format!("Serving verse API: {base_url}/api"))?;
    if args.public {
        let addrs = addrs
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        print_stdout(&format!(
            "Public bind enabled (--public). Resolved addresses: {addrs}"
        ))?;
    }
    print_stdout(&format!("Try: curl {base_url}/api/health"))?;
    print_stdout(&format!("Try: curl '{base_url}/api/today'"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
