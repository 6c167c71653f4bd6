use clap::Parser;
use std::io::Write as _;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use travel_recs::core::{ResultsSurface, Storage};
use travel_recs::utils::error::ErrorSeverity;
use travel_recs::utils::{logger, validation::Validate};
use travel_recs::{
    AnySource, CliConfig, Controller, DataStore, HtmlPage, LocalStorage, OutputFormat,
    SearchOutcome, Settings, TerminalSurface, TravelError,
};

const PAGE_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Submit(String),
    Clear,
    Quit,
}

impl Event {
    fn parse(line: &str) -> Self {
        match line.trim() {
            ":clear" => Event::Clear,
            ":quit" | ":q" => Event::Quit,
            _ => Event::Submit(line.to_string()),
        }
    }
}

struct Events {
    lines: Lines<BufReader<Stdin>>,
}

impl Events {
    fn stdin() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn next(&mut self) -> travel_recs::Result<Option<Event>> {
        eprint!("search> ");
        if let Err(e) = std::io::stderr().flush() {
            tracing::debug!("Could not flush prompt: {}", e);
        }
        Ok(self.lines.next_line().await?.map(|line| Event::parse(&line)))
    }
}

/// Applies one event. Returns `false` once the session should end.
async fn dispatch<R: ResultsSurface>(
    controller: &mut Controller<AnySource, R>,
    event: Event,
) -> travel_recs::Result<bool> {
    match event {
        Event::Submit(text) => {
            match controller.search(&text).await? {
                SearchOutcome::NotSearched => eprintln!("Please enter a search term"),
                SearchOutcome::Unavailable => {
                    eprintln!("Travel data is unavailable right now")
                }
                SearchOutcome::Rendered { count } => {
                    tracing::debug!("Rendered {} results", count)
                }
            }
            Ok(true)
        }
        Event::Clear => {
            controller.clear()?;
            Ok(true)
        }
        Event::Quit => Ok(false),
    }
}

async fn publish(
    controller: &mut Controller<AnySource, HtmlPage>,
    storage: &LocalStorage,
) -> travel_recs::Result<()> {
    let input = controller.input().to_string();
    let page = controller.surface_mut();
    page.set_search_value(&input);
    storage
        .write_file(PAGE_FILE, page.document().as_bytes())
        .await?;
    tracing::info!("📁 Page written to {}", storage.resolve(PAGE_FILE).display());
    Ok(())
}

async fn run(config: CliConfig) -> travel_recs::Result<()> {
    let settings = Settings::from_cli(&config)?;
    settings.validate()?;
    tracing::debug!("Settings: {:?}", settings);

    let store = Arc::new(DataStore::new(AnySource::from_location(&settings.source)));

    // Page load: fetch in the background while the session starts.
    let preload = tokio::spawn({
        let store = store.clone();
        async move {
            tracing::info!("Page loaded. Fetching travel data...");
            store.preload().await
        }
    });

    match settings.format {
        OutputFormat::Text => {
            let surface = TerminalSurface::new(std::io::stdout());
            let mut controller =
                Controller::new(store, surface).with_fallback_image(&settings.fallback_image);

            if let Some(query) = config.query {
                dispatch(&mut controller, Event::Submit(query)).await?;
            } else {
                let mut events = Events::stdin();
                while let Some(event) = events.next().await? {
                    if !dispatch(&mut controller, event).await? {
                        break;
                    }
                }
            }
        }
        OutputFormat::Html => {
            let storage = LocalStorage::new(&settings.output_path);
            let page = HtmlPage::new(&settings.page_title, settings.hero);
            let mut controller =
                Controller::new(store, page).with_fallback_image(&settings.fallback_image);

            if let Some(query) = config.query {
                dispatch(&mut controller, Event::Submit(query)).await?;
                publish(&mut controller, &storage).await?;
            } else {
                publish(&mut controller, &storage).await?;
                let mut events = Events::stdin();
                while let Some(event) = events.next().await? {
                    if !dispatch(&mut controller, event).await? {
                        break;
                    }
                    publish(&mut controller, &storage).await?;
                }
            }
        }
    }

    if let Ok(false) = preload.await {
        tracing::warn!("Travel data could not be loaded at startup");
    }
    Ok(())
}

fn exit_code(error: &TravelError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting travel-recs");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        tracing::error!(
            "❌ travel-recs failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }
}
