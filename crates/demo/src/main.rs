// File: crates/demo/src/main.rs
// Summary: Demo loads daily activity JSON and writes the SVG chart plus a dashboard page.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use daygraph_core::summary::{self, Label};
use daygraph_core::svg::escape;
use daygraph_core::{bind_summary, theme, Chart, Dataset, RenderOptions};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "daygraph-demo")]
#[command(about = "Render the daily activity chart and dashboard labels")]
struct Args {
    /// Daily records JSON (array of {date, article, text, code, total})
    data: PathBuf,

    /// Per-user stats JSON for the admin summary row
    #[arg(short, long)]
    stats: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "target/out")]
    out_dir: PathBuf,

    /// Theme preset name
    #[arg(short, long, default_value = "light")]
    theme: String,

    /// Chart title
    #[arg(long, default_value = "Line Chart")]
    title: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let dataset = Dataset::from_json_file(&args.data)
        .with_context(|| format!("failed to load records from '{}'", args.data.display()))?;
    let (first, last) = dataset.date_domain();
    info!(records = dataset.len(), %first, %last, "loaded daily records");

    let mut opts = RenderOptions::default();
    opts.theme = theme::find(&args.theme);

    let chart = Chart::new(dataset).with_title(args.title.as_str());
    let chart_path = args.out_dir.join("chart.svg");
    chart
        .render_to_svg(&opts, &chart_path)
        .with_context(|| format!("failed to write '{}'", chart_path.display()))?;
    info!(path = %chart_path.display(), "wrote chart");

    let mut labels = bind_summary(chart.dataset().records(), &summary::dashboard_bindings());
    if let Some(stats_path) = &args.stats {
        let rows = summary::stat_rows_from_json_file(stats_path)
            .with_context(|| format!("failed to load stats from '{}'", stats_path.display()))?;
        info!(rows = rows.len(), "loaded stat rows");
        labels.extend(bind_summary(&rows, &summary::admin_bindings()));
    }

    let page = dashboard_page(&args.title, &chart.render_svg(&opts), &labels);
    let page_path = args.out_dir.join("index.html");
    std::fs::create_dir_all(&args.out_dir)?;
    std::fs::write(&page_path, page)
        .with_context(|| format!("failed to write '{}'", page_path.display()))?;
    info!(path = %page_path.display(), "wrote dashboard page");

    Ok(())
}

/// Minimal host page: the summary labels plus the chart under its container.
fn dashboard_page(title: &str, chart_svg: &str, labels: &[Label]) -> String {
    let mut items = String::new();
    for label in labels {
        let _ = writeln!(
            items,
            "      <li>{}: <span id=\"{}\">{}</span></li>",
            caption(&label.element_id),
            label.element_id,
            escape(&label.text)
        );
    }
    format!(
        "<!doctype html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         <ul class=\"summary\">\n\
         {items}    </ul>\n\
         <div class=\"chart\">\n\
         {chart_svg}</div>\n\
         </body>\n\
         </html>\n",
        title = escape(title),
        items = items,
        chart_svg = chart_svg,
    )
}

/// Human caption derived from an element id ("total-users" -> "Total users").
fn caption(element_id: &str) -> String {
    let spaced = element_id.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => spaced,
    }
}
