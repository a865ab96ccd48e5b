pub mod config;
mod effects;
mod listing;
pub mod logging;
mod render;
mod session;

use std::path::Path;

use anyhow::{bail, Context};
use chrono::Local;
use scholar_core::{Listing, LoadStatus, Msg, Route};
use scholar_engine::{
    ensure_output_dir, export_bibtex, prerender, AtomicFileWriter, EngineHandle, ExportOptions,
};
use scholar_logging::{scholar_info, scholar_warn};

use crate::cli::{Cli, Command, FilterArgs};
use config::{SiteConfig, DEFAULT_CONFIG_FILE};
use effects::EffectRunner;
use render::SiteRenderer;
use session::Session;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let (mut config, source) = SiteConfig::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let level = scholar_logging::parse_level(&config.log_level)
        .unwrap_or_else(scholar_logging::default_level);
    logging::initialize(config.log, level);
    match source {
        Some(path) => scholar_info!("loaded configuration from {}", path.display()),
        None => scholar_info!("no {} found; using defaults", DEFAULT_CONFIG_FILE),
    }

    match cli.command {
        Command::Build { out_dir } => {
            if let Some(out_dir) = out_dir {
                config.out_dir = out_dir;
            }
            build(&config)
        }
        Command::List { listing, filters } => list(&config, listing.into(), &filters),
        Command::Bibtex { filters, out } => bibtex(&config, &filters, out.as_deref()),
    }
}

fn open_session(config: &SiteConfig) -> Session {
    let settings = config.fetch_settings();
    let engine = match &config.base_url {
        Some(base_url) => {
            scholar_info!("loading resources from {}", base_url);
            EngineHandle::http(base_url.clone(), settings)
        }
        None => {
            scholar_info!("loading resources from {}", config.data_dir.display());
            EngineHandle::directory(config.data_dir.clone(), &settings)
        }
    };
    let runner = EffectRunner::new(engine, config.out_dir.clone());
    Session::new(runner, config.load_deadline())
}

/// Renders every page plus 404.html and the full BibTeX export.
fn build(config: &SiteConfig) -> anyhow::Result<()> {
    let mut session = open_session(config);
    if !session.visit(&Route::ALL) {
        scholar_warn!("some resources did not load in time; pages will show them as loading");
    }
    let view = session.view();
    let failed = view
        .resources
        .iter()
        .filter_map(|status| status.error.as_deref())
        .inspect(|message| scholar_warn!("{}", message))
        .count();

    ensure_output_dir(&config.out_dir)
        .with_context(|| format!("preparing {}", config.out_dir.display()))?;
    let writer = AtomicFileWriter::new(config.out_dir.clone());
    let renderer = SiteRenderer::new(&view, Local::now().date_naive());
    let mut routes = Route::ALL.to_vec();
    routes.push(Route::NotFound);
    let pages = prerender(&writer, &routes, &renderer).context("writing pages")?;

    let export = export_bibtex(
        &config.out_dir,
        view.publications.iter(),
        &ExportOptions::default(),
    )
    .context("writing BibTeX export")?;

    println!(
        "wrote {} pages and {} BibTeX entries to {} ({} resources failed)",
        pages.len(),
        export.entry_count,
        config.out_dir.display(),
        failed
    );
    Ok(())
}

fn open_listing(
    config: &SiteConfig,
    listing: Listing,
    filters: &FilterArgs,
) -> anyhow::Result<Session> {
    let mut session = open_session(config);
    session.visit(&[listing.route()]);

    let resource = listing.resource();
    if let LoadStatus::Failed(message) = session.state().status(resource) {
        bail!("{message}");
    }
    if *session.state().status(resource) == LoadStatus::Loading {
        bail!("timed out loading {resource}");
    }
    session.apply_filters(listing, filters.changes());
    Ok(session)
}

fn list(config: &SiteConfig, listing: Listing, filters: &FilterArgs) -> anyhow::Result<()> {
    let mut session = open_listing(config, listing, filters)?;
    print!("{}", listing::format_listing(&session.view(), listing));
    Ok(())
}

/// Without `--out` this goes through the same download path as the page
/// button and lands in the output directory.
fn bibtex(config: &SiteConfig, filters: &FilterArgs, out: Option<&Path>) -> anyhow::Result<()> {
    let mut session = open_listing(config, Listing::Publications, filters)?;
    let view = session.view();
    if view.bibtex_count == 0 {
        println!("no BibTeX entries match");
        return Ok(());
    }

    match out {
        Some(path) => {
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .with_context(|| format!("{} is not a file path", path.display()))?;
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let options = ExportOptions {
                output_filename: file_name.to_string(),
                manifest_filename: None,
            };
            let summary = export_bibtex(dir, view.publications.iter(), &options)
                .with_context(|| format!("writing {}", path.display()))?;
            println!(
                "wrote {} entries to {}",
                summary.entry_count,
                summary.output_path.display()
            );
        }
        None => session.dispatch(Msg::DownloadBibtexClicked),
    }
    Ok(())
}
