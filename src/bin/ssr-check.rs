use clap::Parser;
use serde::Serialize;

use ssr_server::client::Hydrator;
use ssr_server::config::{load_config, ServerConfig};
use ssr_server::render::DocumentShell;
use ssr_server::routes::app_routes;
use ssr_server::upstream::HttpItemSource;

/// Fetches a page from a running render server and hydrates it the way the
/// browser bundle would, reporting whether the hand-off worked.
#[derive(Parser)]
#[command(name = "ssr-check")]
#[command(about = "Verify server markup hydrates without refetching", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Page path to check.
    #[arg(short, long, default_value = "/")]
    path: String,

    /// Configuration shared with the server (document ids, upstream).
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,
}

#[derive(Serialize)]
struct Report {
    path: String,
    status: u16,
    route: Option<String>,
    hydrated: bool,
    refetched: bool,
    error: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };

    let routes = app_routes()?;
    let source = HttpItemSource::new(&config.upstream)?;
    let shell = DocumentShell::new(&config.document, &config.assets);

    // Query and fragment go to the server; hydration matches on the path alone.
    let page_url = url::Url::parse(&cli.url)?.join(&cli.path)?;
    let res = reqwest::get(page_url.clone()).await?;
    let status = res.status();
    let html = res.text().await?;

    let report = match Hydrator::new(&routes, &source)
        .hydrate_document(&shell, page_url.path(), &html)
        .await
    {
        Ok(hydrated) => Report {
            path: cli.path,
            status: status.as_u16(),
            route: hydrated.route,
            hydrated: true,
            refetched: hydrated.fetched,
            error: None,
        },
        Err(e) => Report {
            path: cli.path,
            status: status.as_u16(),
            route: None,
            hydrated: false,
            refetched: false,
            error: Some(e.to_string()),
        },
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    if !report.hydrated {
        std::process::exit(1);
    }
    Ok(())
}
