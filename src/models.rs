use crate::constants::{COMPACT_DATE_FORMAT, DISPLAY_DATE_FORMAT, HAZARD_LABEL};
use crate::workspace::CleanupWarning;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// City display name -> forecast page URL.
pub type CityUrls = BTreeMap<String, String>;

/// The date a run is labelled with.
///
/// Both filename fragments are produced with explicit format strings so the
/// output does not depend on the host locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDate(NaiveDate);

impl RunDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Today's date in the local timezone.
    pub fn today() -> Self {
        Self(chrono::Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `DD-MM-YYYY`, used in every output filename.
    pub fn display(&self) -> String {
        self.0.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// `YYMMDD`, the name the hazard map is published under.
    pub fn compact(&self) -> String {
        self.0.format(COMPACT_DATE_FORMAT).to_string()
    }

    /// Remote filename of the hazard map, e.g. `250715.jpg`.
    pub fn hazard_remote_name(&self) -> String {
        format!("{}.jpg", self.compact())
    }

    /// Local filename of the hazard map once renamed.
    pub fn hazard_local_name(&self) -> String {
        format!("{HAZARD_LABEL} {}.jpg", self.display())
    }

    /// Local filename of a city's forecast PDF.
    pub fn forecast_name(&self, city: &str) -> String {
        format!("{city} {}.pdf", self.display())
    }
}

impl From<NaiveDate> for RunDate {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

/// Print settings handed to the HTML-to-PDF renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub page_size: String,
    pub background: bool,
    pub internal_links: bool,
    pub margin_left: String,
    pub margin_right: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            background: false,
            internal_links: false,
            margin_left: "2mm".to_string(),
            margin_right: "2mm".to_string(),
        }
    }
}

/// What a completed weather download left on disk.
#[derive(Debug, Default)]
pub struct BundleReport {
    pub hazard_image: PathBuf,
    pub forecasts: Vec<PathBuf>,
    pub cleanup_warnings: Vec<CleanupWarning>,
}
