//! Progress display for tile emission batches

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static EMISSION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tiles: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks written tiles against the planned emission count
#[derive(Default)]
pub struct ProgressManager {
    bar: Option<ProgressBar>,
    written: usize,
}

impl ProgressManager {
    /// Create a progress manager with no bar attached yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a bar sized to the number of planned emissions
    pub fn initialize(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(EMISSION_STYLE.clone());
        self.bar = Some(bar);
        self.written = 0;
    }

    /// Advance by one written tile, showing its file name
    pub fn record_emission(&mut self, file_name: &str) {
        self.written += 1;
        if let Some(ref bar) = self.bar {
            bar.set_message(file_name.to_string());
            bar.inc(1);
        }
    }

    /// Number of emissions recorded since the last `initialize`
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Clear the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
