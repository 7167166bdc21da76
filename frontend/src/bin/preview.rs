//! Headless page preview
//!
//! Runs the page controllers for a site URL against a live API and prints
//! the resulting document.
//!
//! Usage: bobber-preview <page-url> [api-base-url] [--type <search text>]

use std::env;
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use frontend::{App, Config, HtmlDocument, HttpJobsApi, PageUrl};
use tracing_subscriber::EnvFilter;

struct Args {
    page_url: String,
    api_base_url: Option<String>,
    typed: Option<String>,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut typed = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--type" {
            typed = Some(args.next()?);
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    Some(Args {
        page_url: positional.next()?,
        api_base_url: positional.next().or_else(|| env::var("BOBBER_API_URL").ok()),
        typed,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(args) = parse_args() else {
        eprintln!("Usage: bobber-preview <page-url> [api-base-url] [--type <search text>]");
        eprintln!("Example: bobber-preview '/jobs?q=rust' http://127.0.0.1:8080");
        std::process::exit(2);
    };

    let mut config = Config::default();
    if let Some(base) = args.api_base_url {
        config = config.with_api_base_url(base);
    }
    let debounce = config.debounce_delay;
    let timeout = config.request_timeout;

    let page_url = PageUrl::parse(&args.page_url)?;
    let api = Arc::new(HttpJobsApi::new(&config)?);
    let document = Arc::new(HtmlDocument::new(config.site_name.clone()));

    eprintln!("🔍 Previewing {} against {}", args.page_url, config.api_base_url);
    let app = App::new(config, api, document.clone());
    let kind = app.start(&page_url).await;
    eprintln!("📄 Page type: {kind:?}");

    if let Some(text) = args.typed {
        eprintln!("⌨️  Typing {text:?} into the search box");
        app.search().on_input(&text);
        tokio::time::sleep(debounce + Duration::from_millis(50)).await;

        // The fetch runs on its own task once the debounce fires.
        let deadline = tokio::time::Instant::now() + timeout;
        while app.search().is_searching() && tokio::time::Instant::now() < deadline {
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
    }

    println!("{}", document.to_html());
    Ok(())
}
