//! survey-search: cone searches and cross-matching against survey catalogs

mod cli;

use anyhow::Context;
use celestial_catalog::band::extinction_from_json;
use celestial_catalog::{
    build_query_url, read_targets, run_batch, search_surveys, select_dialect, Capabilities,
    CatalogElement, CatalogRecord, CatalogResult, ColorSet, Dialect, SearchSettings, SkyPosition,
    SourceId, Survey,
};
use clap::Parser;
use cli::{BatchArgs, Cli, Commands, OutputFormat, SearchArgs, UrlArgs};
use serde::Serialize;
use std::fs::{self, File};
use std::io;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let settings = load_settings(&cli)?;

    match &cli.command {
        Commands::Catalogs => {
            list_catalogs();
            Ok(())
        }
        Commands::Url(args) => print_url(args, &settings),
        Commands::Search(args) => search(args, &settings).await,
        Commands::Batch(args) => batch(args, &settings).await,
    }
}

fn load_settings(cli: &Cli) -> anyhow::Result<SearchSettings> {
    let mut settings = match &cli.config {
        Some(path) => SearchSettings::load(path)
            .with_context(|| format!("Failed to load settings from {:?}", path))?,
        None => SearchSettings::default(),
    };
    if cli.vizier {
        settings.use_vizier_tap = true;
    }
    settings.apply();
    Ok(settings)
}

/// Settings with command-line catalog and radius overrides applied.
fn overridden(
    settings: &SearchSettings,
    catalogs: &[String],
    radius: Option<f64>,
) -> anyhow::Result<SearchSettings> {
    let mut effective = settings.clone();
    if !catalogs.is_empty() {
        effective.catalogs = catalogs.to_vec();
    }
    if let Some(radius) = radius {
        effective.radius_arcsec = radius;
    }
    effective.validate()?;
    Ok(effective)
}

fn parse_position(words: &[String]) -> anyhow::Result<SkyPosition> {
    let text = words.join(" ");
    SkyPosition::parse(&text).with_context(|| format!("Invalid position '{}'", text))
}

fn list_catalogs() {
    println!("{:<10} {:<16} {:<8} {:<8} capabilities", "key", "name", "vizier", "native");
    for survey in Survey::ALL {
        let schema = survey.schema();
        let mark = |dialect| if schema.supports(dialect) { "yes" } else { "-" };
        let capabilities: Vec<&str> = schema
            .capabilities
            .iter_names()
            .map(|(name, _)| name)
            .collect();
        println!(
            "{:<10} {:<16} {:<8} {:<8} {}",
            survey.key(),
            survey.name(),
            mark(Dialect::VizierTap),
            mark(Dialect::Native),
            capabilities.join(",").to_lowercase()
        );
    }
}

fn print_url(args: &UrlArgs, settings: &SearchSettings) -> anyhow::Result<()> {
    let survey: Survey = args.catalog.parse()?;
    let position = parse_position(&args.position)?;
    let radius = args.radius.unwrap_or(settings.radius_arcsec);
    let schema = survey.schema();
    let url = build_query_url(schema, select_dialect(schema), position.ra, position.dec, radius)?;
    println!("{}", url);
    Ok(())
}

async fn search(args: &SearchArgs, settings: &SearchSettings) -> anyhow::Result<()> {
    let effective = overridden(settings, &args.catalogs, args.radius)?;
    let surveys = effective.surveys()?;
    let target = parse_position(&args.position)?;
    let service = effective.query_service()?;

    let start = Instant::now();
    let mut results = search_surveys(&service, &surveys, target, effective.radius_arcsec).await;
    tracing::debug!(elapsed_ms = start.elapsed().as_millis() as u64, "search finished");

    if let Some(path) = &args.extinction {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read extinction values from {:?}", path))?;
        let values = extinction_from_json(&json)?;
        for result in results
            .iter_mut()
            .filter(|r| r.survey.schema().is_capable(Capabilities::EXTINCTION))
        {
            for record in &mut result.records {
                record.apply_extinction_correction(&values)?;
            }
        }
    }

    match args.format {
        OutputFormat::Table => print_table(&results, args.nearest),
        OutputFormat::Csv => print_csv(&results, args.nearest)?,
        OutputFormat::Json => print_json(&results, args.nearest, args.vega)?,
    }
    Ok(())
}

fn selected(result: &CatalogResult, nearest_only: bool) -> Vec<&CatalogRecord> {
    if nearest_only {
        result.nearest().into_iter().collect()
    } else {
        result.records.iter().collect()
    }
}

fn print_table(results: &[CatalogResult], nearest_only: bool) {
    for result in results {
        if let Some(failure) = &result.failure {
            println!("== {} == FAILED: {}", result.survey, failure);
            continue;
        }
        let records = selected(result, nearest_only);
        println!("== {} == {} match(es)", result.survey, records.len());
        for (i, record) in records.iter().enumerate() {
            let details: Vec<String> = record
                .load_elements()
                .iter()
                .filter(|e| !e.value.is_empty())
                .map(|e| format!("{}={}{}", e.name, e.value, if e.faulty { "!" } else { "" }))
                .collect();
            println!("{:4}: {}", i + 1, details.join("  "));
        }
    }
}

fn print_csv(results: &[CatalogResult], nearest_only: bool) -> anyhow::Result<()> {
    let mut out = csv::WriterBuilder::new().flexible(true).from_writer(io::stdout());
    for result in results {
        let records = selected(result, nearest_only);
        if records.is_empty() {
            continue;
        }
        let mut header = vec!["catalog"];
        header.extend(result.survey.schema().column_titles());
        out.write_record(&header)?;
        for record in records {
            let mut row = vec![result.survey.name().to_string()];
            row.extend(record.column_values());
            out.write_record(&row)?;
        }
    }
    out.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonCatalog<'a> {
    catalog: &'static str,
    failure: Option<String>,
    records: Vec<JsonRecord<'a>>,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
    source_id: &'a SourceId,
    ra: f64,
    dec: f64,
    target_distance: f64,
    elements: &'a [CatalogElement],
    colors: ColorSet,
}

fn print_json(results: &[CatalogResult], nearest_only: bool, to_vega: bool) -> anyhow::Result<()> {
    let catalogs: Vec<JsonCatalog> = results
        .iter()
        .map(|result| JsonCatalog {
            catalog: result.survey.name(),
            failure: result.failure.as_ref().map(ToString::to_string),
            records: selected(result, nearest_only)
                .into_iter()
                .map(|record| JsonRecord {
                    source_id: record.source_id(),
                    ra: record.ra(),
                    dec: record.dec(),
                    target_distance: record.target_distance(),
                    elements: record.load_elements(),
                    colors: record.colors(to_vega),
                })
                .collect(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&catalogs)?);
    Ok(())
}

async fn batch(args: &BatchArgs, settings: &SearchSettings) -> anyhow::Result<()> {
    let effective = overridden(settings, &args.catalogs, args.radius)?;
    let surveys = effective.surveys()?;
    let file = File::open(&args.targets)
        .with_context(|| format!("Failed to open targets file {:?}", args.targets))?;
    let targets = read_targets(file)?;
    println!("{} targets, {} catalogs", targets.len(), surveys.len());

    let service = effective.query_service()?;
    let written = run_batch(
        &service,
        &targets,
        &surveys,
        effective.radius_arcsec,
        &args.output,
    )
    .await?;
    for (matches, path) in &written {
        println!(
            "{:<16} {:>5}/{} matched -> {}",
            matches.survey.name(),
            matches.matched(),
            targets.len(),
            path.display()
        );
    }
    Ok(())
}
