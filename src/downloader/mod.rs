//! Weather bundle download.
//!
//! This module fetches the daily hazard map and renders the per-city forecast
//! pages into PDFs. The main entry point is [`download_weather`]; the network
//! and rendering sides sit behind [`ImageFetcher`] and [`PageRenderer`].

mod bundle;
mod image_fetcher;
mod pdf_renderer;

// Re-export public API
pub use bundle::{download_weather, hazard_map_url};
pub use image_fetcher::{HttpFetcher, ImageFetcher};
pub use pdf_renderer::{wkhtmltopdf_args, PageRenderer, WkhtmltopdfRenderer};
