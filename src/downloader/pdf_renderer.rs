use crate::constants::DEFAULT_RENDERER;
use crate::errors::{AppError, AppResult};
use crate::models::PrintOptions;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Renders a web page into a PDF file.
#[allow(async_fn_in_trait)]
pub trait PageRenderer {
    async fn render(&self, url: &str, dest: &Path, options: &PrintOptions) -> AppResult<()>;
}

/// [`PageRenderer`] backed by the `wkhtmltopdf` executable.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfRenderer {
    program: PathBuf,
}

impl WkhtmltopdfRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for WkhtmltopdfRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER)
    }
}

/// Builds the `wkhtmltopdf` command line for one page.
pub fn wkhtmltopdf_args(url: &str, dest: &Path, options: &PrintOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "--quiet".into(),
        "--page-size".into(),
        options.page_size.as_str().into(),
    ];
    if !options.background {
        args.push("--no-background".into());
    }
    if !options.internal_links {
        args.push("--disable-internal-links".into());
    }
    args.extend([
        "--margin-left".into(),
        options.margin_left.as_str().into(),
        "--margin-right".into(),
        options.margin_right.as_str().into(),
        url.into(),
        dest.as_os_str().to_owned(),
    ]);
    args
}

impl PageRenderer for WkhtmltopdfRenderer {
    async fn render(&self, url: &str, dest: &Path, options: &PrintOptions) -> AppResult<()> {
        let args = wkhtmltopdf_args(url, dest, options);
        debug!(program = %self.program.display(), ?args, "Running renderer");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|e| {
                AppError::RenderError(format!(
                    "Failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::RenderError(format!(
                "{} exited with {} for {}: {}",
                self.program.display(),
                output.status,
                url,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
