// file: src/pipeline/progress.rs
// description: progress tracking and statistics for document loading
// reference: uses indicatif for progress bars and tracks submission counts

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadStats {
    pub submitted: usize,
    /// 2xx responses
    pub accepted: usize,
    pub rejected: usize,
    pub duration_ms: u64,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acceptance_rate(&self) -> f64 {
        if self.submitted == 0 {
            return 0.0;
        }
        (self.accepted as f64 / self.submitted as f64) * 100.0
    }
}

pub struct LoadTracker {
    bar: ProgressBar,
    accepted: AtomicUsize,
    rejected: AtomicUsize,
    start_time: Instant,
}

impl LoadTracker {
    pub fn new(total_documents: usize, colored: bool) -> Self {
        Self::with_bar(create_progress_bar(total_documents as u64, colored))
    }

    #[cfg(test)]
    pub fn hidden(total_documents: usize) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(total_documents as u64),
            indicatif::ProgressDrawTarget::hidden(),
        );
        Self::with_bar(bar)
    }

    fn with_bar(bar: ProgressBar) -> Self {
        Self {
            bar,
            accepted: AtomicUsize::new(0),
            rejected: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record(&self, status: u16) {
        if (200..300).contains(&status) {
            self.accepted.fetch_add(1, Ordering::SeqCst);
        } else {
            self.rejected.fetch_add(1, Ordering::SeqCst);
        }
        self.bar.inc(1);
        self.bar.set_message(format!(
            "accepted: {} | rejected: {}",
            self.accepted.load(Ordering::SeqCst),
            self.rejected.load(Ordering::SeqCst)
        ));
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }

    pub fn get_stats(&self) -> LoadStats {
        let accepted = self.accepted.load(Ordering::SeqCst);
        let rejected = self.rejected.load(Ordering::SeqCst);

        LoadStats {
            submitted: accepted + rejected,
            accepted,
            rejected,
            duration_ms: self.start_time.elapsed().as_millis() as u64,
        }
    }
}

impl Drop for LoadTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(total: u64, colored: bool) -> ProgressBar {
    let bar = ProgressBar::new(total);
    let (template, chars) = if colored {
        (
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
            "█▓▒░",
        )
    } else {
        ("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}", "=>-")
    };

    // templates are static; a parse failure falls back to the default style
    if let Ok(style) = ProgressStyle::default_bar().template(template) {
        bar.set_style(style.progress_chars(chars));
    }
    bar
}
