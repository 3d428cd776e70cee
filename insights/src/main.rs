//! # insights
//!
//! Terminal view of campaign analytics.
//!
//! ## Overview
//!
//! insights is built on top of insightslib and puts its table pipeline and
//! formatters behind a command line: campaign tables with search, status
//! filters, sorting and paging, plus metric cards, revenue trends, group
//! totals and chart palettes.
//!
//! ## Usage
//!
//! ```bash
//! # First page of campaigns from the seeded mock source
//! insights
//!
//! # Search, filter and sort
//! insights campaigns --search sale --status active --sort clicks --desc
//!
//! # Page 2 with 5 rows per page, as JSON
//! insights campaigns --page 2 --per-page 5 --output json
//!
//! # Read a saved snapshot and format money in euros
//! insights --data snapshot.json --locale de-DE --currency EUR metrics
//!
//! # Trend of the visitors series, clicks summed by status
//! insights trend visitors
//! insights aggregate --by status --sum clicks
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use insightslib::analytics::{aggregate, calculate_trend, generate_colors};
use insightslib::data::{
    series, CampaignField, CampaignStatus, DataSource, JsonFileSource, MockSource, RevenueField,
};
use insightslib::format::DateFormat;
use insightslib::query::{Filter, SortDirection, TableQuery};
use insightslib::validate::is_valid_number;
use insightslib::{DataTable, Field, Settings};
use serde_json::json;

mod logging;
mod render;

use render::OutputMode;

/// Seed of the mock source when neither `--seed` nor `--data` is given.
const DEFAULT_SEED: &str = "42";

/// Options shared by every command, resolved once.
struct Session {
    source: Box<dyn DataSource>,
    settings: Settings,
    output: OutputMode,
}

fn parse_min_clicks(text: &str) -> std::result::Result<f64, String> {
    if !is_valid_number(text, Some(0.0), None) {
        return Err(format!("expected a non-negative number, got `{text}`"));
    }
    text.trim().parse().map_err(|e| format!("{e}"))
}

/// Arguments of the campaigns table, accepted both by the root command and
/// by `campaigns`.
fn campaign_args() -> Vec<Arg> {
    vec![
        Arg::new("search")
            .short('s')
            .long("search")
            .help("Only rows whose searchable columns contain this text"),
        Arg::new("sort")
            .long("sort")
            .help("Column to sort by (e.g. name, clicks, cost, start_date)"),
        Arg::new("desc")
            .long("desc")
            .action(ArgAction::SetTrue)
            .requires("sort")
            .help("Sort descending instead of ascending"),
        Arg::new("status")
            .long("status")
            .action(ArgAction::Append)
            .value_parser(CampaignStatus::ALL.map(CampaignStatus::as_str))
            .help("Only campaigns with this status (can be specified multiple times)"),
        Arg::new("min-clicks")
            .long("min-clicks")
            .value_parser(parse_min_clicks)
            .help("Only campaigns with at least this many clicks"),
        Arg::new("page")
            .short('p')
            .long("page")
            .value_parser(value_parser!(usize))
            .default_value("1")
            .help("Page to show (starts at 1)"),
        Arg::new("per-page")
            .short('n')
            .long("per-page")
            .value_parser(value_parser!(usize))
            .help("Rows per page (defaults to the settings value)"),
    ]
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("insights")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Campaign analytics tables, metrics and trends in the terminal")
        .arg(
            Arg::new("data")
                .short('d')
                .long("data")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Read a dashboard snapshot JSON file instead of generating data"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .default_value(DEFAULT_SEED)
                .help("Seed for generated data"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Settings JSON file"),
        )
        .arg(
            Arg::new("locale")
                .long("locale")
                .global(true)
                .help("Locale for currency formatting (e.g. en-US, de-DE, en-IN)"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .help("ISO currency code (e.g. USD, EUR, GBP)"),
        )
        .arg(
            Arg::new("date-format")
                .long("date-format")
                .global(true)
                .value_parser(["short", "long", "relative", "iso"])
                .help("How dates are shown"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(value_parser!(OutputMode))
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("Log more to stderr (-v info, -vv debug, -vvv trace)"),
        )
        .args(campaign_args())
        .subcommand(
            Command::new("campaigns")
                .about("Search, filter, sort and page the campaigns table (default command)")
                .args(campaign_args()),
        )
        .subcommand(Command::new("metrics").about("Show metric cards with their change"))
        .subcommand(
            Command::new("trend")
                .about("Trend of the latest change in a revenue series")
                .arg(
                    Arg::new("field")
                        .value_parser(["revenue", "visitors", "conversions"])
                        .default_value("revenue")
                        .help("Series to compare"),
                ),
        )
        .subcommand(
            Command::new("aggregate")
                .about("Sum a campaign column per group")
                .arg(
                    Arg::new("by")
                        .long("by")
                        .default_value("status")
                        .help("Column to group by"),
                )
                .arg(
                    Arg::new("sum")
                        .long("sum")
                        .default_value("clicks")
                        .help("Column to sum"),
                ),
        )
        .subcommand(
            Command::new("palette")
                .about("Print chart colors")
                .arg(
                    Arg::new("count")
                        .required(true)
                        .value_parser(value_parser!(usize))
                        .help("Number of colors"),
                ),
        )
}

/// Resolve the data source, settings and output mode.
///
/// Settings come from `--config` when given, then individual flags override
/// them.
fn open_session(matches: &ArgMatches) -> Result<Session> {
    let mut settings = match matches.get_one::<PathBuf>("config") {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(locale) = matches.get_one::<String>("locale") {
        settings.locale = locale.clone();
    }
    if let Some(currency) = matches.get_one::<String>("currency") {
        settings.currency = currency.clone();
    }
    if let Some(format) = matches.get_one::<String>("date-format") {
        settings.date_format = DateFormat::from_str(format)?;
    }

    let source: Box<dyn DataSource> = match matches.get_one::<PathBuf>("data") {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => {
            let seed = matches.get_one::<u64>("seed").copied().unwrap_or_default();
            Box::new(MockSource::new(seed))
        }
    };

    let output = matches
        .get_one::<OutputMode>("output")
        .copied()
        .unwrap_or(OutputMode::Table);

    Ok(Session {
        source,
        settings,
        output,
    })
}

fn parse_campaign_field(name: &str) -> Result<CampaignField> {
    CampaignField::from_str(name).with_context(|| {
        let known: Vec<&str> = CampaignField::all().iter().map(|f| f.name()).collect();
        format!("expected one of: {}", known.join(", "))
    })
}

/// Handler for the campaigns table
fn campaigns_handler(matches: &ArgMatches, session: &Session) -> Result<String> {
    let campaigns = session.source.campaigns()?;
    let settings = &session.settings;

    let per_page = matches
        .get_one::<usize>("per-page")
        .copied()
        .unwrap_or(settings.items_per_page);
    let page = matches.get_one::<usize>("page").copied().unwrap_or(1);

    let mut query = TableQuery::new().page(page).items_per_page(per_page);
    if let Some(text) = matches.get_one::<String>("search") {
        query = query.search(text.as_str(), settings.search_fields.clone());
    }
    if let Some(statuses) = matches.get_many::<String>("status") {
        query = query.filter(Filter::one_of(CampaignField::Status, statuses));
    }
    if let Some(min) = matches.get_one::<f64>("min-clicks") {
        query = query.filter(Filter::between(CampaignField::Clicks, *min, f64::INFINITY));
    }
    if let Some(key) = matches.get_one::<String>("sort") {
        let direction = if matches.get_flag("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        query = query.sort(parse_campaign_field(key)?, direction);
    }

    let result = query.run(&campaigns);
    match session.output {
        OutputMode::Json => Ok(render::json(&result)?),
        OutputMode::Table => {
            let table = DataTable::from_campaign_page(&result, query.sort, settings);
            Ok(render::table(&table))
        }
    }
}

/// Handler for metric cards
fn metrics_handler(session: &Session) -> Result<String> {
    let cards = session.source.metrics()?;
    match session.output {
        OutputMode::Json => Ok(render::json(&cards)?),
        OutputMode::Table => Ok(render::table(&DataTable::from_metrics(
            &cards,
            &session.settings,
        ))),
    }
}

/// Handler for the trend of a revenue series
fn trend_handler(matches: &ArgMatches, session: &Session) -> Result<String> {
    let name = matches
        .get_one::<String>("field")
        .map(String::as_str)
        .unwrap_or("revenue");
    let field = RevenueField::from_str(name)?;
    let points = session.source.revenue()?;
    let values = series(&points, field);
    let result = calculate_trend(&values);

    match session.output {
        OutputMode::Json => Ok(render::json(&json!({
            "field": name,
            "points": values.len(),
            "direction": result.direction,
            "percentage": result.percentage,
        }))?),
        OutputMode::Table => Ok(render::trend(name, &result, values.len())),
    }
}

/// Handler for group totals over campaigns
fn aggregate_handler(matches: &ArgMatches, session: &Session) -> Result<String> {
    let by = parse_campaign_field(
        matches
            .get_one::<String>("by")
            .map(String::as_str)
            .unwrap_or("status"),
    )?;
    let sum = parse_campaign_field(
        matches
            .get_one::<String>("sum")
            .map(String::as_str)
            .unwrap_or("clicks"),
    )?;
    let campaigns = session.source.campaigns()?;
    let totals = aggregate(&campaigns, by, sum);

    match session.output {
        OutputMode::Json => Ok(render::json(&totals)?),
        OutputMode::Table => Ok(render::table(&DataTable::from_totals(&totals, by, sum))),
    }
}

/// Handler for chart colors
fn palette_handler(matches: &ArgMatches, session: &Session) -> Result<String> {
    let count = matches.get_one::<usize>("count").copied().unwrap_or_default();
    let colors = generate_colors(count);
    match session.output {
        OutputMode::Json => Ok(render::json(&colors)?),
        OutputMode::Table => Ok(render::palette(&colors)),
    }
}

fn run(matches: &ArgMatches) -> Result<String> {
    // Global args are propagated down, so the leaf matches see all of them.
    let (name, leaf) = matches.subcommand().unwrap_or(("campaigns", matches));
    let session = open_session(leaf)?;
    tracing::info!(command = name, "running");

    match name {
        "metrics" => metrics_handler(&session),
        "trend" => trend_handler(leaf, &session),
        "aggregate" => aggregate_handler(leaf, &session),
        "palette" => palette_handler(leaf, &session),
        _ => campaigns_handler(leaf, &session),
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    let verbosity = matches
        .subcommand()
        .map_or(matches.get_count("verbose"), |(_, sub)| sub.get_count("verbose"));
    logging::init(verbosity);

    match run(&matches) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
