// File: crates/daygraph-core/src/axis.rs
// Summary: Tick layout and label formatting for the date and count axes.

use chrono::{Duration, NaiveDate};

use crate::scale::{CountScale, DateScale};

/// One tick: pixel position along the axis plus its rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub px: f32,
    pub label: String,
}

/// Evenly spaced day ticks, deduplicated after rounding to whole days.
/// Labels use the abbreviated month plus day of month ("Jan 03").
pub fn date_ticks(domain: (NaiveDate, NaiveDate), scale: &DateScale, want: usize) -> Vec<Tick> {
    let span = (domain.1 - domain.0).num_days().max(0);
    let steps = want.clamp(1, span as usize + 1);
    let mut ticks = Vec::with_capacity(steps);
    let mut prev = None;
    for offset in spread(0.0, span as f64, steps) {
        let day = domain.0 + Duration::days(offset.round() as i64);
        if prev == Some(day) {
            continue;
        }
        prev = Some(day);
        ticks.push(Tick { px: scale.to_px(day), label: day.format("%b %d").to_string() });
    }
    ticks
}

/// Evenly spaced count ticks from the domain minimum up.
pub fn count_ticks(domain: (u64, u64), scale: &CountScale, want: usize) -> Vec<Tick> {
    let (lo, hi) = (domain.0 as f64, domain.1 as f64);
    let mut ticks = Vec::new();
    let mut prev: Option<String> = None;
    for v in spread(lo, hi.max(lo), want.max(2)) {
        let label = format_count(v);
        if prev.as_deref() == Some(label.as_str()) {
            continue;
        }
        prev = Some(label.clone());
        ticks.push(Tick { px: scale.to_px(v), label });
    }
    ticks
}

fn spread(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps).map(|i| start + step * i as f64).collect()
}

fn format_count(v: f64) -> String {
    if (v - v.round()).abs() < 1e-6 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}
