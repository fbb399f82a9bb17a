//! rdm library
//!
//! This crate provides the core functionality for the `rdm` binary, which keeps a
//! folder with today's weather material: the civil-protection fire-hazard map and
//! one forecast PDF per configured city.
//!
//! ## Overview
//!
//! - [`config`] - Reads the `[Settings]` table that names the output directory
//! - [`cities`] - Parses the `name,url` city list
//! - [`workspace`] - Creates the output root and resets the weather folder
//! - [`downloader`] - Fetches the hazard map and renders the forecast pages
//! - [`cli`] - Command-line interface and the end-to-end workflow
//! - [`models`] - Run date, print options and the download report
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use rdm::{cli, downloader, models::RunDate};
//! use std::path::Path;
//!
//! # async fn example() -> rdm::errors::AppResult<()> {
//! let report = cli::run_workflow(
//!     Path::new("config.toml"),
//!     Path::new("weather_urls"),
//!     RunDate::today(),
//!     &downloader::HttpFetcher::new(),
//!     &downloader::WkhtmltopdfRenderer::default(),
//! )
//! .await?;
//! println!("saved {}", report.hazard_image.display());
//! # Ok(())
//! # }
//! ```

pub mod cities;
pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod logging;
pub mod models;
pub mod ui;
pub mod workspace;
