use crate::downloader::{ImageFetcher, PageRenderer};
use crate::errors::{AppError, AppResult};
use crate::models::{BundleReport, CityUrls, PrintOptions, RunDate};
use crate::ui;
use crate::workspace;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};
use url::Url;

/// Downloads today's weather bundle into `out_dir`.
///
/// # Behavior
///
/// 1. `out_dir` is created, or emptied if it already exists.
/// 2. The hazard map `{YYMMDD}.jpg` is fetched from `hazard_base_url` and renamed
///    to `ΧΑΡΤΗΣ ΕΠΙΚΙΝΔΥΝΟΤΗΤΑΣ {DD-MM-YYYY}.jpg`.
/// 3. Every city page is rendered to `{city} {DD-MM-YYYY}.pdf` with the default
///    [`PrintOptions`].
///
/// # Errors
///
/// A failed directory reset or hazard map fetch ends the run before any page is
/// rendered. A failed render does not stop the remaining cities; once all have
/// been attempted a `RenderError` naming the failed cities is returned.
///
/// # Example
///
/// ```no_run
/// use rdm::downloader::{download_weather, HttpFetcher, WkhtmltopdfRenderer};
/// use rdm::models::{CityUrls, RunDate};
/// use std::path::Path;
///
/// # async fn example() -> Result<(), rdm::errors::AppError> {
/// let mut cities = CityUrls::new();
/// cities.insert("Athens".into(), "https://example.com/athens".into());
///
/// let report = download_weather(
///     Path::new("out/ΚΑΙΡΟΣ"),
///     &cities,
///     "http://civilprotection.gr/sites/default/gscp_uploads/",
///     RunDate::today(),
///     &HttpFetcher::new(),
///     &WkhtmltopdfRenderer::default(),
/// )
/// .await?;
/// println!("{} forecasts", report.forecasts.len());
/// # Ok(())
/// # }
/// ```
pub async fn download_weather<F, R>(
    out_dir: &Path,
    cities: &CityUrls,
    hazard_base_url: &str,
    date: RunDate,
    fetcher: &F,
    renderer: &R,
) -> AppResult<BundleReport>
where
    F: ImageFetcher,
    R: PageRenderer,
{
    let cleanup_warnings = workspace::prepare_clean_dir(out_dir).await?;

    let hazard_image = fetch_hazard_map(out_dir, hazard_base_url, date, fetcher).await?;

    let forecasts = render_forecasts(out_dir, cities, date, renderer).await?;

    info!(
        dir = %out_dir.display(),
        date = %date.display(),
        forecasts = forecasts.len(),
        "Weather bundle ready"
    );

    Ok(BundleReport {
        hazard_image,
        forecasts,
        cleanup_warnings,
    })
}

/// URL the hazard map for `date` is published at.
pub fn hazard_map_url(base: &str, date: RunDate) -> AppResult<Url> {
    let base = if base.ends_with('/') {
        Url::parse(base)?
    } else {
        Url::parse(&format!("{base}/"))?
    };
    Ok(base.join(&date.hazard_remote_name())?)
}

async fn fetch_hazard_map<F: ImageFetcher>(
    out_dir: &Path,
    base: &str,
    date: RunDate,
    fetcher: &F,
) -> AppResult<PathBuf> {
    let url = hazard_map_url(base, date)?;
    let fetched_path = out_dir.join(date.hazard_remote_name());
    let final_path = out_dir.join(date.hazard_local_name());

    info!(url = %url, "Fetching hazard map");
    fetcher.fetch(&url, &fetched_path).await?;

    fs::rename(&fetched_path, &final_path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to rename {} to {}: {}",
            fetched_path.display(),
            final_path.display(),
            e
        ))
    })?;

    info!(path = %final_path.display(), "Hazard map saved");
    Ok(final_path)
}

async fn render_forecasts<R: PageRenderer>(
    out_dir: &Path,
    cities: &CityUrls,
    date: RunDate,
    renderer: &R,
) -> AppResult<Vec<PathBuf>> {
    if cities.is_empty() {
        info!("No cities configured, skipping forecast PDFs");
        return Ok(Vec::new());
    }

    let options = PrintOptions::default();
    let pb = ui::create_progress_bar(cities.len() as u64)?;

    let mut rendered = Vec::with_capacity(cities.len());
    let mut errors = Vec::new();

    for (city, url) in cities {
        let dest = out_dir.join(date.forecast_name(city));
        pb.set_message(format!("Rendering {city}..."));

        match renderer.render(url, &dest, &options).await {
            Ok(()) => {
                info!(city = %city, path = %dest.display(), "Forecast rendered");
                rendered.push(dest);
            }
            Err(e) => {
                warn!(city = %city, url = %url, error = %e, "Failed to render forecast");
                errors.push(format!("{city}: {e}"));
            }
        }
        pb.inc(1);
    }

    if errors.is_empty() {
        pb.finish_with_message(format!("Rendered {} forecast(s)", rendered.len()));
        Ok(rendered)
    } else {
        pb.finish_with_message(format!(
            "Rendered {} forecast(s), {} failed",
            rendered.len(),
            errors.len()
        ));
        Err(AppError::RenderError(format!(
            "Failed to render {} forecast(s): {}",
            errors.len(),
            errors.join("; ")
        )))
    }
}
