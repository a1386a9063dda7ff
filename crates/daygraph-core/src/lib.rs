// File: crates/daygraph-core/src/lib.rs
// Summary: Core library entry point; exports the dataset, scale, and SVG chart API.

pub mod chart;
pub mod record;
pub mod axis;
pub mod scale;
pub mod svg;
pub mod summary;
pub mod theme;
pub mod types;
pub mod error;

pub use chart::{Chart, RenderOptions};
pub use error::DatasetError;
pub use record::{Dataset, Record};
pub use scale::{extent, CountScale, DateScale};
pub use summary::{bind_summary, Binding, Label, Reduce, StatRow};
pub use theme::Theme;
