use stockblast_core::{listing_columns, Align, ChartSeries, ColumnDef};

use crate::cli::OutputFormat;
use crate::commands::{DatesReport, HistoryReport, ListingsReport, Report};
use crate::error::CliError;

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => match report {
            Report::Listings(listings) => render_listings(listings),
            Report::History(history) => render_history(history),
            Report::Dates(dates) => render_dates(dates),
        },
    }

    Ok(())
}

fn render_listings(report: &ListingsReport) {
    println!("url     : {}", report.url);
    if let Some((field, query)) = &report.filter {
        println!("filter  : {field} contains '{query}'");
    }
    println!(
        "rows    : {} of {} (page {}/{})",
        report.visible,
        report.total,
        report.page + 1,
        report.page_count
    );

    let columns = listing_columns();
    println!("{}", header_line(&columns));
    for stock in &report.rows {
        let cells: [&str; 3] = [stock.symbol.as_str(), &stock.name, &stock.industry];
        println!("{}", row_line(&columns, &cells));
    }
}

fn render_history(report: &HistoryReport) {
    println!("{}", report.heading);
    println!("url     : {}", report.url);
    println!("from    : [{}] {}", report.range, report.range_label);
    println!(
        "rows    : {} (page {}/{})",
        report.visible,
        report.page + 1,
        report.page_count
    );

    let columns = stockblast_core::history::history_columns();
    println!("{}", header_line(&columns));
    for row in &report.rows {
        let cells: [&str; 6] = [
            row.date.as_str(),
            &row.open,
            &row.high,
            &row.low,
            &row.close,
            &row.volumes,
        ];
        println!("{}", row_line(&columns, &cells));
    }

    println!("{}: {}", report.chart.label, sparkline(&report.chart));
}

fn render_dates(report: &DatesReport) {
    println!("{}", report.heading);
    for option in &report.options {
        println!("  {:>4}  {}", option.index, option.label);
    }
}

/// Grid widths are pixels; ten pixels per terminal column keeps the proportions.
fn cell_width(column: &ColumnDef) -> usize {
    usize::from(column.width / 10).max(column.header.len())
}

fn header_line(columns: &[ColumnDef]) -> String {
    let headers = columns.iter().map(|c| c.header).collect::<Vec<_>>();
    row_line(columns, &headers)
}

fn row_line(columns: &[ColumnDef], cells: &[&str]) -> String {
    columns
        .iter()
        .zip(cells)
        .map(|(column, cell)| {
            let width = cell_width(column);
            let cell = truncate(cell, width);
            match column.align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn truncate(cell: &str, width: usize) -> String {
    if cell.chars().count() <= width {
        return cell.to_owned();
    }
    let mut out = cell.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

fn sparkline(series: &ChartSeries) -> String {
    let (min, max) = series
        .data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;

    series
        .data
        .iter()
        .map(|&value| {
            let level = if span > 0.0 {
                (((value - min) / span) * (SPARK_LEVELS.len() - 1) as f64).round() as usize
            } else {
                0
            };
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect()
}
