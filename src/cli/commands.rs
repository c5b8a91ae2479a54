//! Command implementations for the electrolyte normalizer CLI
//!
//! Each subcommand runs one load-and-normalize pass and renders a view of
//! the result, either as colored text on stdout or as pretty JSON.

use crate::cli::args::{Args, Commands, OutputFormat, TableArgs};
use crate::config::NormalizerConfig;
use crate::error::Result;
use crate::models::{ProductCategory, ProductRecord};
use crate::normalizer::NormalizationStats;
use crate::pipeline::try_load_and_normalize;
use crate::summary::SummaryStatistics;
use crate::views::{
    ComparisonEntry, MineralEntry, brand_comparison, group_by_category, mineral_focus,
    simplify_brand_label, table_view,
};
use colored::*;
use serde::Serialize;
use tracing::{debug, warn};

/// Main command runner
///
/// Loads the CSV named by the subcommand once, then hands the records to
/// the matching renderer. Resource and configuration errors propagate.
pub async fn run(args: Args) -> Result<()> {
    setup_logging(&args)?;
    debug!("Command line arguments: {:?}", args);

    let config = args.to_config();
    debug!("Using configuration: {:?}", config);

    let dataset = try_load_and_normalize(args.command.input().clone(), &config).await?;
    if dataset.records.is_empty() {
        warn!("No products with valid metrics in {}", args.command.input().display());
    }

    let format = args.command.format();
    match &args.command {
        Commands::Normalize(_) => render_records(&dataset.records, &dataset.stats, format),
        Commands::Summary(_) => render_summary(&dataset.summary, &dataset.records, format),
        Commands::Table(table) => render_table(&dataset.records, table, format),
        Commands::Compare(_) => {
            let entries = brand_comparison(&dataset.records, &config);
            render_comparison(&entries, &config, format)
        }
        Commands::Minerals(_) => {
            let entries = mineral_focus(&dataset.records, &config);
            render_minerals(&entries, &config, format)
        }
    }
}

/// Set up structured logging on stderr so stdout stays clean for output
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("electrolyte_normalizer={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn money(value: f64) -> String {
    format!("${:.2}", value)
}

fn product_line(record: &ProductRecord) -> String {
    let line = format!(
        "{:<45} {:<12} {:>8}/1000mg  {:>7.0}mg  {:>7}/serving",
        simplify_brand_label(&record.brand),
        record.product_type,
        money(record.price_per_thousand),
        record.total_electrolytes,
        money(record.price_per_serving),
    );
    if record.is_relyte {
        line.bright_green().bold().to_string()
    } else {
        line
    }
}

fn render_records(
    records: &[ProductRecord],
    stats: &NormalizationStats,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(records);
    }

    println!("{}", "Normalized Products".bright_green().bold());
    for record in records {
        println!("  {}", product_line(record));
    }
    println!();
    println!(
        "  {} {}",
        "Rows read:".bright_cyan(),
        stats.total_rows.to_string().bright_white()
    );
    println!(
        "  {} {}",
        "Retained:".bright_cyan(),
        stats.retained.to_string().bright_white().bold()
    );
    if stats.dropped() > 0 {
        println!(
            "  {} {} (missing brand: {}, invalid metrics: {})",
            "Dropped:".bright_yellow(),
            stats.dropped(),
            stats.missing_brand,
            stats.invalid_metrics
        );
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryReport<'a> {
    #[serde(flatten)]
    summary: &'a SummaryStatistics,
    category_counts: Vec<(&'static str, usize)>,
    relyte_products: usize,
}

fn render_summary(
    summary: &SummaryStatistics,
    records: &[ProductRecord],
    format: OutputFormat,
) -> Result<()> {
    let groups = group_by_category(records);
    let category_counts: Vec<(&'static str, usize)> = [
        ProductCategory::BulkPowder,
        ProductCategory::ReadyToDrink,
        ProductCategory::StickPack,
        ProductCategory::Other,
    ]
    .into_iter()
    .map(|category| (category.label(), groups.category(category).len()))
    .collect();

    if format == OutputFormat::Json {
        return print_json(&SummaryReport {
            summary,
            category_counts,
            relyte_products: groups.relyte.len(),
        });
    }

    println!("{}", "Electrolyte Value Summary".bright_green().bold());
    println!(
        "  {} {}",
        "Products analyzed:".bright_cyan(),
        summary.total_products.to_string().bright_white().bold()
    );

    if summary.is_empty() {
        println!("  {}", "No products with valid metrics".bright_yellow());
        return Ok(());
    }

    if let Some(best) = &summary.best_value {
        println!(
            "  {} {} ({}/1000mg)",
            "Best value:".bright_cyan(),
            best.brand.bright_white(),
            money(best.price_per_thousand)
        );
    }
    if let Some(worst) = &summary.worst_value {
        println!(
            "  {} {} ({}/1000mg)",
            "Worst value:".bright_cyan(),
            worst.brand.bright_white(),
            money(worst.price_per_thousand)
        );
    }
    if let Some(avg) = &summary.avg_price {
        println!("  {} ${}/1000mg", "Average price:".bright_cyan(), avg);
    }
    if let Some(spread) = summary.value_spread() {
        println!("  {} {:.1}x", "Value spread:".bright_cyan(), spread);
    }

    match (&summary.relyte_best, summary.relyte_rank) {
        (Some(relyte), Some(rank)) => println!(
            "  {} #{} of {} ({} at {}/1000mg)",
            "Re-Lyte rank:".bright_cyan(),
            rank.to_string().bright_green().bold(),
            summary.total_products,
            relyte.brand,
            money(relyte.price_per_thousand)
        ),
        _ => println!("  {}", "No Re-Lyte products found".bright_yellow()),
    }

    println!("\n{}", "By category".bright_green().bold());
    for (label, count) in &category_counts {
        println!("  {:<14} {}", format!("{}:", label).bright_cyan(), count);
    }
    println!("  {:<14} {}", "Re-Lyte:".bright_cyan(), groups.relyte.len());
    Ok(())
}

fn render_table(records: &[ProductRecord], table: &TableArgs, format: OutputFormat) -> Result<()> {
    let sort = table.sort_config();
    let filter = table.type_filter();
    let rows = table_view(records, &filter, sort);
    debug!("Table view: {} of {} records", rows.len(), records.len());

    if format == OutputFormat::Json {
        return print_json(&rows);
    }

    println!(
        "{} {}",
        "Product Table".bright_green().bold(),
        format!("(sorted by {} {:?})", sort.key, sort.direction).bright_black()
    );
    println!(
        "  {:<45} {:<12} {:>8} {:>9} {:>8} {:>7} {:>7} {:>7} {:>7}",
        "Brand", "Type", "$/1000mg", "Total mg", "$/serv", "Na", "K", "Ca", "Mg"
    );
    for record in rows {
        let line = format!(
            "  {:<45} {:<12} {:>8} {:>9.0} {:>8} {:>7.0} {:>7.0} {:>7.0} {:>7.0}",
            simplify_brand_label(&record.brand),
            record.product_type,
            money(record.price_per_thousand),
            record.total_electrolytes,
            money(record.price_per_serving),
            record.sodium,
            record.potassium,
            record.calcium,
            record.magnesium,
        );
        if record.is_relyte {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

fn render_comparison(
    entries: &[ComparisonEntry],
    config: &NormalizerConfig,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(entries);
    }

    println!(
        "{} {}",
        "Brand Comparison".bright_green().bold(),
        format!(
            "(one product per brand, up to {}/1000mg)",
            money(config.comparison_price_ceiling)
        )
        .bright_black()
    );
    if entries.is_empty() {
        println!("  {}", "No products within the price ceiling".bright_yellow());
        return Ok(());
    }

    for entry in entries {
        let line = format!(
            "  {:<34} {:>8}/1000mg  {:>6}  {}",
            entry.brand_label,
            money(entry.record.price_per_thousand),
            entry.multiplier,
            entry.record.logo_path
        );
        if entry.record.is_relyte {
            println!("{}", line.bright_green().bold());
        } else {
            println!("{}", line);
        }
    }
    Ok(())
}

fn render_minerals(
    entries: &[MineralEntry],
    config: &NormalizerConfig,
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(entries);
    }

    println!("{}", "Sodium & Potassium Focus".bright_green().bold());
    if entries.is_empty() {
        println!(
            "  {} '{}'",
            "No matching products for anchor".bright_yellow(),
            config.mineral_anchor_product
        );
        return Ok(());
    }

    for entry in entries {
        println!(
            "  {:<14} {:<45} Na {:>6.0}mg  K {:>6.0}mg",
            format!("{}:", entry.key).bright_cyan(),
            simplify_brand_label(&entry.record.brand),
            entry.record.sodium,
            entry.record.potassium
        );
    }
    Ok(())
}
