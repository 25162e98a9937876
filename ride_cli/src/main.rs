//! Ride Selector CLI - venue filtering, ride classification and ROI reports
//!
//! Usage: ride_cli [OPTIONS] <COMMAND>
//!
//! Commands:
//!   filter    List catalog rides that fit a venue
//!   classify  Show the navigation category of every ride
//!   project   Project revenue, payback and NPV for an investment
//!   capacity  Estimate revenue from the rider capacity of fitting rides

mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use ride_core::catalog::{load_catalog, prepare_catalog, Lang, PreparedItem, VenueType};
use ride_core::categories::{count_by_category, localized_category_name, sub_categories, MainCategory};
use ride_core::constraints::{filter_catalog, SpaceConstraints};
use ride_core::dimensions::{parse_footprint_opt, parse_height_opt};
use ride_core::errors::RideError;
use ride_core::finance::{capacity_projection, project, FinancialForm, FinancialInputs};
use ride_core::report::{export_report, format_currency, render_results};
use ride_core::units::Meters;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::SelectorConfig;

/// Ride Selector - match amusement rides to a venue and size up the investment
#[derive(Parser, Debug)]
#[command(name = "ride_cli")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to ./ride-selector.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog JSON file (overrides the config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Display language: en or zh (overrides the config)
    #[arg(long, global = true)]
    lang: Option<Lang>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List catalog rides that fit a venue
    Filter {
        #[command(flatten)]
        space: SpaceArgs,
    },

    /// Show the navigation category of every ride
    Classify {
        /// Only rides in this main category (e.g. "thrill-rides")
        #[arg(long)]
        category: Option<MainCategory>,

        /// Only rides in this sub-category id (e.g. "drop-tower")
        #[arg(long)]
        sub_category: Option<String>,

        /// Print the category directory with ride counts instead
        #[arg(long)]
        tree: bool,
    },

    /// Project revenue, payback and NPV for an investment
    Project {
        #[command(flatten)]
        form: FormArgs,

        /// Write a plain-text report
        #[arg(long)]
        export: bool,

        /// Directory for the exported report (overrides the config)
        #[arg(long, requires = "export")]
        output_dir: Option<PathBuf>,
    },

    /// Estimate revenue from the rider capacity of fitting rides
    Capacity {
        #[command(flatten)]
        space: SpaceArgs,
    },
}

/// Venue limits. Heights accept units (`8m`, `26 ft`); spans are meters.
#[derive(Args, Debug, Default)]
struct SpaceArgs {
    /// Maximum ceiling height
    #[arg(long, allow_hyphen_values = true)]
    max_height: Option<String>,

    /// Largest usable span in meters
    #[arg(long, allow_hyphen_values = true)]
    max_footprint: Option<String>,

    /// indoor, outdoor or both
    #[arg(long)]
    venue: Option<VenueType>,
}

impl SpaceArgs {
    fn to_constraints(&self) -> Result<SpaceConstraints> {
        let max_ceiling_height = self
            .max_height
            .as_deref()
            .map(|text| read_limit(text, "height", |t| parse_height_opt(Some(t))))
            .transpose()?;
        let max_footprint = self
            .max_footprint
            .as_deref()
            .map(|text| read_limit(text, "span", |t| parse_footprint_opt(Some(t))))
            .transpose()?;

        Ok(SpaceConstraints {
            max_ceiling_height,
            max_footprint,
            venue_type: self.venue,
        })
    }
}

/// Read a venue limit in meters.
///
/// Plain numbers are taken as typed, sign included, so a zero or negative
/// limit excludes every ride. Anything else goes through the unit-aware parser.
fn read_limit(text: &str, what: &str, parse: impl Fn(&str) -> Option<Meters>) -> Result<f64> {
    if let Ok(value) = text.trim().parse::<f64>() {
        return Ok(value);
    }
    parse(text)
        .map(Meters::value)
        .with_context(|| format!("Cannot read a {} from '{}'", what, text))
}

/// Financial form fields, read as typed text
#[derive(Args, Debug, Default)]
struct FormArgs {
    /// Venue area in square meters
    #[arg(long, default_value = "")]
    venue_area: String,

    #[arg(long, default_value = "")]
    daily_visitors: String,

    /// Average ticket price in USD
    #[arg(long, default_value = "")]
    avg_ticket_price: String,

    #[arg(long, default_value = "")]
    operating_days: String,

    /// Equipment investment in USD
    #[arg(long, default_value = "")]
    equipment_investment: String,

    /// Operating cost as a percent of revenue [default: 30]
    #[arg(long, default_value = "")]
    operating_cost_percent: String,

    /// Discount rate in percent [default: 10]
    #[arg(long, default_value = "")]
    discount_rate_percent: String,
}

impl From<FormArgs> for FinancialForm {
    fn from(args: FormArgs) -> Self {
        FinancialForm {
            venue_area: args.venue_area,
            daily_visitors: args.daily_visitors,
            avg_ticket_price: args.avg_ticket_price,
            operating_days_per_year: args.operating_days,
            equipment_investment: args.equipment_investment,
            operating_cost_percent: args.operating_cost_percent,
            discount_rate_percent: args.discount_rate_percent,
        }
    }
}

/// Settings after merging the config file with command-line flags
struct Settings {
    lang: Lang,
    json: bool,
    catalog: Option<PathBuf>,
    export_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let config = SelectorConfig::load_or_default(cli.config.as_deref(), &cwd)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings {
        lang: cli.lang.unwrap_or(config.language),
        json: cli.json,
        catalog: cli.catalog.or(config.catalog_path),
        export_dir: config.export_dir,
    };
    tracing::debug!(lang = %settings.lang, catalog = ?settings.catalog, "settings resolved");

    match cli.command {
        Commands::Filter { space } => cmd_filter(&settings, &space),
        Commands::Classify {
            category,
            sub_category,
            tree,
        } => cmd_classify(&settings, category, sub_category.as_deref(), tree),
        Commands::Project {
            form,
            export,
            output_dir,
        } => cmd_project(&settings, form.into(), export, output_dir),
        Commands::Capacity { space } => cmd_capacity(&settings, &space),
    }
}

fn read_catalog(settings: &Settings) -> Result<Vec<PreparedItem>> {
    let path = settings
        .catalog
        .as_deref()
        .ok_or_else(|| RideError::missing_field("catalog_path"))
        .context("No catalog given: pass --catalog or set catalog_path in the config")?;
    let items = load_catalog(path).with_context(|| format!("Failed to load catalog {}", path.display()))?;
    Ok(prepare_catalog(items))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_filter(settings: &Settings, space: &SpaceArgs) -> Result<()> {
    let catalog = read_catalog(settings)?;
    let constraints = space.to_constraints()?;
    let outcome = filter_catalog(&catalog, &constraints, settings.lang);

    if settings.json {
        return print_json(&outcome);
    }

    let lang = settings.lang;
    for prepared in &outcome.matches {
        let item = &prepared.item;
        println!(
            "{}  [{} / {}]",
            item.display_name(lang),
            prepared.main_category().localized_label(lang),
            localized_category_name(prepared.category.main_category, &prepared.category.sub_category, lang),
        );
        println!(
            "    height: {}  footprint: {}  riders: {}  venue: {}",
            or_dash(item.height.get(lang)),
            or_dash(item.footprint.get(lang)),
            or_dash(&item.riders),
            prepared.profile.venue_type.label(lang),
        );
    }
    println!("{}", outcome.summary(lang));
    Ok(())
}

fn cmd_classify(
    settings: &Settings,
    category: Option<MainCategory>,
    sub_category: Option<&str>,
    tree: bool,
) -> Result<()> {
    let catalog = read_catalog(settings)?;
    let lang = settings.lang;

    if tree {
        return print_tree(&catalog, lang, settings.json);
    }

    let selected: Vec<&PreparedItem> = catalog
        .iter()
        .filter(|p| category.map_or(true, |c| p.category.main_category == c))
        .filter(|p| sub_category.map_or(true, |s| p.category.sub_category == s))
        .collect();

    if settings.json {
        let rows: Vec<serde_json::Value> = selected
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.item.display_name(lang),
                    "main_category": p.category.main_category,
                    "sub_category": p.category.sub_category,
                })
            })
            .collect();
        return print_json(&rows);
    }

    for prepared in &selected {
        println!(
            "{}  ->  {} / {}",
            prepared.item.display_name(lang),
            prepared.main_category().localized_label(lang),
            localized_category_name(prepared.category.main_category, &prepared.category.sub_category, lang),
        );
    }
    println!(
        "{}",
        match lang {
            Lang::En => format!("{} / {} products", selected.len(), catalog.len()),
            Lang::Zh => format!("{} / {} 个产品", selected.len(), catalog.len()),
        }
    );
    Ok(())
}

fn print_tree(catalog: &[PreparedItem], lang: Lang, json: bool) -> Result<()> {
    if json {
        let tree: Vec<serde_json::Value> = MainCategory::ALL
            .iter()
            .map(|&main| {
                let subs: Vec<serde_json::Value> = sub_categories(main)
                    .iter()
                    .map(|sub| {
                        serde_json::json!({
                            "id": sub.id,
                            "name": sub.name(lang),
                            "count": count_by_category(catalog, Some(main), Some(sub.id)),
                        })
                    })
                    .collect();
                serde_json::json!({
                    "main_category": main,
                    "count": count_by_category(catalog, Some(main), None),
                    "sub_categories": subs,
                })
            })
            .collect();
        return print_json(&tree);
    }

    for main in MainCategory::ALL {
        println!(
            "{} ({})",
            main.localized_label(lang),
            count_by_category(catalog, Some(main), None)
        );
        for sub in sub_categories(main) {
            println!(
                "  {} ({})  {}",
                sub.name(lang),
                count_by_category(catalog, Some(main), Some(sub.id)),
                sub.description(lang)
            );
        }
    }
    Ok(())
}

fn cmd_project(settings: &Settings, form: FinancialForm, export: bool, output_dir: Option<PathBuf>) -> Result<()> {
    let inputs = FinancialInputs::from_form(&form);
    let Some(result) = project(&inputs) else {
        bail!("Insufficient input, missing: {}", inputs.missing_fields().join(", "));
    };
    tracing::debug!(?inputs, ?result, "projection computed");

    if settings.json {
        print_json(&serde_json::json!({ "inputs": inputs, "result": result }))?;
    } else {
        print!("{}", render_results(&result, settings.lang));
    }

    if export {
        let dir = output_dir.unwrap_or_else(|| settings.export_dir.clone());
        let path = write_report(&dir, &inputs, &result, settings.lang)?;
        // Keep stdout parseable in JSON mode
        if settings.json {
            eprintln!("Report written to {}", path.display());
        } else {
            println!("Report written to {}", path.display());
        }
    }
    Ok(())
}

fn write_report(
    dir: &Path,
    inputs: &FinancialInputs,
    result: &ride_core::finance::FinancialResult,
    lang: Lang,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("Cannot create {}", dir.display()))?;
    let today = chrono::Local::now().date_naive();
    let path = export_report(dir, inputs, result, lang, today)
        .with_context(|| format!("Failed to export report to {}", dir.display()))?;
    Ok(path)
}

fn cmd_capacity(settings: &Settings, space: &SpaceArgs) -> Result<()> {
    let catalog = read_catalog(settings)?;
    let constraints = space.to_constraints()?;
    let outcome = filter_catalog(&catalog, &constraints, settings.lang);

    let Some(projection) = capacity_projection(outcome.matches.iter().map(|p| &p.item)) else {
        bail!("No rider capacity among {} selected products", outcome.shown());
    };

    if settings.json {
        return print_json(&projection);
    }

    let lang = settings.lang;
    println!(
        "{} products, {} riders total",
        projection.product_count, projection.total_capacity
    );
    for year in &projection.years {
        println!("  Year {}: {}", year.year, format_currency(year.revenue as f64, lang));
    }
    println!("Peak: {}", format_currency(projection.peak_revenue() as f64, lang));
    Ok(())
}

fn or_dash(text: &str) -> &str {
    if text.trim().is_empty() {
        "-"
    } else {
        text
    }
}
