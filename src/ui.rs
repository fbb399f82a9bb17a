use crate::errors::{AppError, AppResult};
use indicatif::{ProgressBar, ProgressStyle};

/// Creates the progress bar shown while forecast pages are rendered.
///
/// # Example
///
/// ```no_run
/// use rdm::ui;
///
/// # fn main() -> Result<(), rdm::errors::AppError> {
/// let pb = ui::create_progress_bar(3)?;
/// pb.set_message("Rendering Athens...");
/// pb.inc(1);
/// pb.finish_with_message("Rendered 3 forecast(s)");
/// # Ok(())
/// # }
/// ```
pub fn create_progress_bar(total: u64) -> AppResult<ProgressBar> {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
            .map_err(|e| AppError::IoError(format!("Invalid progress bar template: {e}")))?
            .progress_chars("=> "),
    );
    Ok(pb)
}
