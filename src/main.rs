use npm_registry::adapters::outbound::console::StderrProgressReporter;
use npm_registry::adapters::outbound::filesystem::{JsonStateStore, LocalDatasetSink, RawJsonStore};
use npm_registry::adapters::outbound::network::{NpmSearchClient, ReqwestFetcher, ResilientFetcher};
use npm_registry::adapters::outbound::system::SystemClock;
use npm_registry::application::use_cases::{IngestPackagesUseCase, TransformPackagesUseCase};
use npm_registry::cli::Args;
use npm_registry::config::Settings;
use npm_registry::environment::validate_environment;
use npm_registry::logging::init_logging;
use npm_registry::shared::error::ExitCode;
use npm_registry::shared::Result;
use std::process;
use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments (clap exits with status 2 on misuse)
    let args = Args::parse_args();
    let phases = args.phases();

    init_logging()?;

    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    validate_environment(&settings)?;
    info!(data_dir = %settings.data_dir.display(), ?phases, "starting run");

    if phases.runs_ingest() {
        eprintln!("📦 Ingesting packages from {}", settings.search_url);
        run_ingest(&settings)?;
    }

    if phases.runs_transform() {
        eprintln!("🔄 Transforming raw artifact into dataset");
        run_transform(&settings)?;
    }

    Ok(())
}

fn run_ingest(settings: &Settings) -> Result<()> {
    // Create adapters (Dependency Injection)
    let fetcher = ResilientFetcher::new(
        ReqwestFetcher::new()?,
        SystemClock::new(),
        settings.rate_limit,
        settings.retry.clone(),
    );
    let search = NpmSearchClient::new(fetcher, settings.search_url.as_str());
    let state_store = JsonStateStore::new(settings.state_dir());
    let raw_store = RawJsonStore::new(settings.raw_dir());
    let progress_reporter = StderrProgressReporter::new();

    let use_case = IngestPackagesUseCase::new(
        search,
        state_store,
        raw_store,
        progress_reporter,
        SystemClock::new(),
    );

    let summary = use_case.execute(&settings.plan)?;
    eprintln!(
        "✅ Ingest finished: {} packages ({} new, {} page(s) fetched)",
        summary.total, summary.added, summary.pages_fetched
    );
    if !summary.target_reached {
        eprintln!(
            "⚠️  Warning: Search terms exhausted before reaching {} packages",
            settings.plan.target_count
        );
    }

    Ok(())
}

fn run_transform(settings: &Settings) -> Result<()> {
    let raw_store = RawJsonStore::new(settings.raw_dir());
    let sink = LocalDatasetSink::new(settings.datasets_dir());
    let progress_reporter = StderrProgressReporter::new();

    let use_case = TransformPackagesUseCase::new(raw_store, sink, progress_reporter);
    let summary = use_case.execute(&settings.transform)?;

    eprintln!(
        "✅ Published {}: {} rows ({} of {} raw records dropped)",
        summary.dataset_id, summary.rows, summary.dropped, summary.loaded
    );

    Ok(())
}
