//! Progress display for a single sampling run

use std::sync::LazyLock;

use indicatif::{ProgressBar, ProgressStyle};

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static CYCLE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template =
        format!("[{{elapsed_precise}}] Order: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}");
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// One progress bar advancing per completed shuffle cycle
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// A bar spanning the full run to the target order
    pub fn new(target_order: u32) -> Self {
        let bar = ProgressBar::new(u64::from(target_order));
        bar.set_style(CYCLE_STYLE.clone());
        Self { bar }
    }

    /// Report the order just completed
    pub fn update(&self, order: u32) {
        self.bar.set_position(u64::from(order));
    }

    /// Clean up the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
