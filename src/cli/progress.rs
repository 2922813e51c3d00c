use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Progress bar for the sequential URL scan. Draws to stdout so the
/// per-URL lines and the bar share one stream.
pub struct ScanProgress {
    bar: ProgressBar,
}

impl ScanProgress {
    pub fn new(total: u64, quiet: bool) -> Self {
        let bar = if quiet {
            ProgressBar::hidden()
        } else {
            let bar = ProgressBar::with_draw_target(Some(total), ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("  {bar:30.cyan/dark_gray} {pos}/{len} URLs")
                    .unwrap()
                    .progress_chars("█▓░"),
            );
            bar
        };
        Self { bar }
    }

    /// Announces the next URL above the bar.
    pub fn checking(&self, url: &str, index: usize, total: usize) {
        self.bar.println(format!("Checking {url} ({index}/{total})"));
    }

    pub fn inc(&self) {
        self.bar.inc(1);
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
