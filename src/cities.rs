use crate::constants::COMMENT_PREFIX;
use crate::errors::{AppError, AppResult};
use crate::models::CityUrls;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Loads the city list from `path`.
///
/// See [`parse_cities`] for the accepted format.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be read and `MalformedCityLine` for the
/// first record that lacks a name or a URL.
pub fn load_cities_urls(path: &Path) -> AppResult<CityUrls> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::IoError(format!(
            "Failed to read city list {}: {}",
            path.display(),
            e
        ))
    })?;

    let cities = parse_cities(&contents)?;
    info!(
        file = %path.display(),
        cities = cities.len(),
        "City list loaded"
    );
    Ok(cities)
}

/// Parses `name,url` records, one per line.
///
/// - Lines starting with `#` are comments; blank lines are ignored.
/// - The record is split on the first comma. The name is trimmed, the URL is
///   kept exactly as written minus the line terminator.
/// - Both parts must be non-empty, otherwise the whole parse fails with the
///   1-based line number.
/// - A repeated name keeps the last URL.
///
/// # Example
///
/// ```
/// use rdm::cities::parse_cities;
///
/// # fn main() -> Result<(), rdm::errors::AppError> {
/// let cities = parse_cities("# name,url\nAthens,http://example.com/athens\n")?;
/// assert_eq!(cities.get("Athens").map(String::as_str), Some("http://example.com/athens"));
/// # Ok(())
/// # }
/// ```
pub fn parse_cities(contents: &str) -> AppResult<CityUrls> {
    let mut cities = CityUrls::new();

    for (index, line) in contents.lines().enumerate() {
        if line.starts_with(COMMENT_PREFIX) || line.trim().is_empty() {
            continue;
        }

        let malformed = || AppError::MalformedCityLine {
            line: index + 1,
            content: line.to_string(),
        };

        let (name, url) = line.split_once(',').ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() || url.is_empty() {
            return Err(malformed());
        }

        if let Some(previous) = cities.insert(name.to_string(), url.to_string()) {
            debug!(city = name, previous = %previous, "Duplicate city, keeping last URL");
        }
    }

    Ok(cities)
}
