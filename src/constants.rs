// Data source URLs
pub const HAZARD_BASE_URL: &str = "http://civilprotection.gr/sites/default/gscp_uploads/";

// Input files, relative to the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "config.toml";
pub const DEFAULT_CITIES_FILE: &str = "weather_urls";

// Output naming
pub const WEATHER_SUBDIR: &str = "ΚΑΙΡΟΣ";
pub const HAZARD_LABEL: &str = "ΧΑΡΤΗΣ ΕΠΙΚΙΝΔΥΝΟΤΗΤΑΣ";
pub const DISPLAY_DATE_FORMAT: &str = "%d-%m-%Y";
pub const COMPACT_DATE_FORMAT: &str = "%y%m%d";

// City list
pub const COMMENT_PREFIX: char = '#';

// Renderer
pub const DEFAULT_RENDERER: &str = "wkhtmltopdf";
