// File: crates/daygraph-core/src/chart.rs
// Summary: Chart model and SVG rendering pipeline for the daily activity series.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use chrono::NaiveDate;

use crate::axis;
use crate::record::{Dataset, Record};
use crate::scale::{CountScale, DateScale};
use crate::svg::{fmt_px, Element};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, MARKER_RADIUS, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub marker_radius: f32,
    pub date_ticks: usize,
    pub count_ticks: usize,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            marker_radius: MARKER_RADIUS,
            date_ticks: 6,
            count_ticks: 6,
            theme: Theme::light(),
        }
    }
}

pub struct Chart {
    dataset: Dataset,
    title: String,
}

impl Chart {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset, title: String::new() }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Render the chart as a self-contained SVG document.
    ///
    /// Scales are derived from the dataset extents on every call; rendering
    /// the same dataset twice yields byte-identical output.
    pub fn render_svg(&self, opts: &RenderOptions) -> String {
        let records = self.dataset.records();

        let plot_left = opts.insets.left as f32;
        let plot_right = (opts.width - opts.insets.right as i32) as f32;
        let plot_top = opts.insets.top as f32;
        let plot_bottom = (opts.height - opts.insets.bottom as i32) as f32;

        let date_domain = self.dataset.date_domain();
        let total_domain = self.dataset.total_domain();
        let scale_x = DateScale::new(date_domain, plot_left, plot_right);
        let scale_y = CountScale::new(total_domain, plot_top, plot_bottom);

        let theme = &opts.theme;
        let mut root = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .attr("width", opts.width.to_string())
            .attr("height", opts.height.to_string())
            .attr("font-family", theme.font_family)
            .attr(
                "style",
                format!(
                    "background-color: {}; border-radius: 10px; border: 1px solid {}",
                    theme.background, theme.border
                ),
            );

        root = root
            .child(date_axis(&scale_x, date_domain, plot_bottom, opts))
            .child(count_axis(&scale_y, total_domain, plot_left, opts))
            .child(series_group(records, &scale_x, &scale_y, opts));

        if !self.title.is_empty() {
            root = root.child(title_label(&self.title, opts));
        }
        root.to_svg()
    }

    /// Render and write to `path`, creating parent directories as needed.
    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
        let svg = self.render_svg(opts);
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn date_axis(
    scale: &DateScale,
    domain: (NaiveDate, NaiveDate),
    baseline: f32,
    opts: &RenderOptions,
) -> Element {
    let theme = &opts.theme;
    let mut group = Element::new("g")
        .attr("class", "axis axis-date")
        .attr("transform", format!("translate(0,{})", fmt_px(baseline)))
        .child(
            Element::new("line")
                .attr_px("x1", scale.left_px)
                .attr("y1", "0")
                .attr_px("x2", scale.right_px)
                .attr("y2", "0")
                .attr("stroke", theme.axis_line),
        );
    for tick in axis::date_ticks(domain, scale, opts.date_ticks) {
        group = group
            .child(
                Element::new("line")
                    .attr_px("x1", tick.px)
                    .attr("y1", "0")
                    .attr_px("x2", tick.px)
                    .attr("y2", "6")
                    .attr("stroke", theme.axis_line),
            )
            .child(
                Element::new("text")
                    .attr_px("x", tick.px)
                    .attr("y", "20")
                    .attr("text-anchor", "middle")
                    .attr("font-size", "10")
                    .attr("fill", theme.tick_label)
                    .text(tick.label),
            );
    }
    group
}

fn count_axis(
    scale: &CountScale,
    domain: (u64, u64),
    edge: f32,
    opts: &RenderOptions,
) -> Element {
    let theme = &opts.theme;
    let mut group = Element::new("g")
        .attr("class", "axis axis-count")
        .attr("transform", format!("translate({},0)", fmt_px(edge)))
        .child(
            Element::new("line")
                .attr("x1", "0")
                .attr_px("y1", scale.top_px)
                .attr("x2", "0")
                .attr_px("y2", scale.bottom_px)
                .attr("stroke", theme.axis_line),
        );
    for tick in axis::count_ticks(domain, scale, opts.count_ticks) {
        group = group
            .child(
                Element::new("line")
                    .attr("x1", "-6")
                    .attr_px("y1", tick.px)
                    .attr("x2", "0")
                    .attr_px("y2", tick.px)
                    .attr("stroke", theme.axis_line),
            )
            .child(
                Element::new("text")
                    .attr("x", "-9")
                    .attr_px("y", tick.px)
                    .attr("dy", "0.32em")
                    .attr("text-anchor", "end")
                    .attr("font-size", "10")
                    .attr("fill", theme.tick_label)
                    .text(tick.label),
            );
    }
    group
}

fn series_group(
    records: &[Record],
    scale_x: &DateScale,
    scale_y: &CountScale,
    opts: &RenderOptions,
) -> Element {
    let theme = &opts.theme;
    let mut group = Element::new("g").attr("class", "series");

    // Markers in dataset order; overlapping points simply paint over earlier
    // ones. Each carries its tooltip as a <title> child.
    for r in records {
        let tooltip = format!("Article: {}, Code: {}, Text: {}", r.article, r.code, r.text);
        group = group.child(
            Element::new("circle")
                .attr("class", "point")
                .attr_px("cx", scale_x.to_px(r.date))
                .attr_px("cy", scale_y.to_px(r.total as f64))
                .attr_px("r", opts.marker_radius)
                .attr("fill", theme.marker_fill)
                .child(Element::new("title").text(tooltip)),
        );
    }

    let mut path = String::new();
    for (i, r) in records.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(
            path,
            "{}{},{}",
            cmd,
            fmt_px(scale_x.to_px(r.date)),
            fmt_px(scale_y.to_px(r.total as f64))
        );
    }
    group.child(
        Element::new("path")
            .attr("d", path)
            .attr("fill", "none")
            .attr("stroke", theme.line_stroke)
            .attr("stroke-width", "2"),
    )
}

fn title_label(title: &str, opts: &RenderOptions) -> Element {
    Element::new("text")
        .attr_px("x", opts.width as f32 / 2.0)
        .attr("y", "25")
        .attr("text-anchor", "middle")
        .attr("font-size", "16")
        .attr("fill", opts.theme.title_color)
        .text(title)
}
