use indicatif::{ProgressBar, ProgressStyle};

/// Build a progress bar that tracks bytes of the audit trail decoded so far
pub fn build_progress_bar_export(total_bytes: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed}] [{bar:.blue}] {bytes}/{total_bytes} ({bytes_per_sec}, ETA: {eta})",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_position(0);
    pb
}

/// A progress bar that draws nothing, used when events are written to stdout
pub fn build_hidden_progress_bar() -> ProgressBar {
    ProgressBar::hidden()
}
