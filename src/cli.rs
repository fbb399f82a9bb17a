use crate::cities::load_cities_urls;
use crate::config::Settings;
use crate::constants::{
    DEFAULT_CITIES_FILE, DEFAULT_RENDERER, DEFAULT_SETTINGS_FILE, WEATHER_SUBDIR,
};
use crate::downloader::{
    download_weather, HttpFetcher, ImageFetcher, PageRenderer, WkhtmltopdfRenderer,
};
use crate::errors::AppResult;
use crate::models::{BundleReport, RunDate};
use crate::workspace;
use clap::{Arg, ArgAction, Command};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Builds the argument parser. Every argument has a default, so running the
/// binary bare reads `config.toml` and `weather_urls` from the working directory.
pub fn command() -> Command<'static> {
    Command::new("rdm")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("TOML settings file with a [Settings] table; quote values, e.g. output_directory = \"/home/me/out\"")
                .default_value(DEFAULT_SETTINGS_FILE)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("cities")
                .long("cities")
                .value_name("PATH")
                .help("City list, one `name,url` pair per line")
                .default_value(DEFAULT_CITIES_FILE)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("wkhtmltopdf")
                .long("wkhtmltopdf")
                .value_name("PROGRAM")
                .help("HTML-to-PDF renderer executable")
                .default_value(DEFAULT_RENDERER)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

/// Parses command-line arguments and runs one download with today's date.
///
/// # Returns
///
/// Returns `Ok(())` once the hazard map and every forecast PDF are on disk.
/// Returns an error if:
/// - The settings file or city list is missing or malformed
/// - The hazard map cannot be fetched
/// - Any forecast page fails to render
pub async fn cli() -> AppResult<()> {
    let matches = command().get_matches();

    let settings_path = matches
        .get_one::<PathBuf>("config")
        .expect("config has default_value");
    let cities_path = matches
        .get_one::<PathBuf>("cities")
        .expect("cities has default_value");
    let program = matches
        .get_one::<PathBuf>("wkhtmltopdf")
        .expect("wkhtmltopdf has default_value");

    let fetcher = HttpFetcher::new();
    let renderer = WkhtmltopdfRenderer::new(program);

    run_workflow(
        settings_path,
        cities_path,
        RunDate::today(),
        &fetcher,
        &renderer,
    )
    .await?;

    Ok(())
}

/// Runs a full download: settings, output root, city list, then the weather
/// bundle under `{output_directory}/ΚΑΙΡΟΣ`.
///
/// Settings and the city list are both read before anything is fetched, so a
/// configuration problem never reaches the network.
pub async fn run_workflow<F, R>(
    settings_path: &Path,
    cities_path: &Path,
    date: RunDate,
    fetcher: &F,
    renderer: &R,
) -> AppResult<BundleReport>
where
    F: ImageFetcher,
    R: PageRenderer,
{
    let settings = Settings::from_file(settings_path)?;

    // The root is only created, never cleaned
    workspace::ensure_dir(&settings.output_directory).await?;

    let cities = load_cities_urls(cities_path)?;
    let weather_dir = settings.output_directory.join(WEATHER_SUBDIR);

    info!(
        dir = %weather_dir.display(),
        date = %date.display(),
        cities = cities.len(),
        "Starting weather download"
    );

    let report = download_weather(
        &weather_dir,
        &cities,
        &settings.hazard_base_url,
        date,
        fetcher,
        renderer,
    )
    .await?;

    for warning in &report.cleanup_warnings {
        warn!(entry = %warning, "Old entry left in output directory");
    }

    info!(
        hazard_map = %report.hazard_image.display(),
        forecasts = report.forecasts.len(),
        "All operations completed successfully"
    );

    Ok(report)
}
