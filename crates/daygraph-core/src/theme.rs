// File: crates/daygraph-core/src/theme.rs
// Summary: Color and font presets for the rendered chart.

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub axis_line: &'static str,
    pub tick_label: &'static str,
    pub marker_fill: &'static str,
    pub line_stroke: &'static str,
    pub title_color: &'static str,
    pub font_family: &'static str,
}

impl Theme {
    /// The palette the dashboard shipped with: mint background, emerald series.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ecfdf5",
            border: "lightgrey",
            axis_line: "#374151",
            tick_label: "#4b5563",
            marker_fill: "#059669",
            line_stroke: "#059669",
            title_color: "#111827",
            font_family: "Overpass, sans-serif",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#111827",
            border: "#374151",
            axis_line: "#9ca3af",
            tick_label: "#9ca3af",
            marker_fill: "#34d399",
            line_stroke: "#34d399",
            title_color: "#f9fafb",
            font_family: "Overpass, sans-serif",
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: "#ffffff",
            border: "#000000",
            axis_line: "#000000",
            tick_label: "#000000",
            marker_fill: "#000000",
            line_stroke: "#000000",
            title_color: "#000000",
            font_family: "Overpass, sans-serif",
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::light()
}
