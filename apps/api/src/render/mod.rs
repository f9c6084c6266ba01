// Document rendering: markdown resolution, static font metrics, paginated
// PDF emission with the bundled DejaVu Sans face.
// CPU-bound rendering must run inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod markdown;
pub mod pdf;

// Re-export the public API consumed by other modules (pipeline, routes).
pub use markdown::markdown_to_html;
pub use pdf::{PdfRenderer, RenderError};
