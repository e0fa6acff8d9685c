//! Command-line interface for sampling and exporting Aztec diamond tilings

use std::path::PathBuf;

use clap::Parser;

use crate::algorithm::randomness::OrientationSource;
use crate::algorithm::shuffle::DominoShuffler;
use crate::io::configuration::{
    DEFAULT_CELL_SIZE_PX, DEFAULT_ORDER, DEFAULT_SEED, GIF_FRAME_DELAY_MS, MAX_ORDER,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_tiling_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::GrowthCapture;

#[derive(Parser)]
#[command(name = "dominoshuffle")]
#[command(
    author,
    version,
    about = "Sample uniformly random domino tilings of Aztec diamonds"
)]
/// Command-line arguments for the sampling tool
pub struct Cli {
    /// Target diamond order
    #[arg(value_name = "ORDER", default_value_t = DEFAULT_ORDER)]
    pub order: u32,

    /// Random seed for reproducible sampling
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output PNG path
    #[arg(short, long, default_value = "aztec.png")]
    pub output: PathBuf,

    /// Record one frame per order and export an animated GIF alongside
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Edge length of one lattice cell in exported images, in pixels
    #[arg(short, long, default_value_t = DEFAULT_CELL_SIZE_PX)]
    pub cell_size: u32,

    /// Weight for vertical domino pairs when filling holes
    #[arg(long, default_value_t = 1.0)]
    pub vertical_weight: f64,

    /// Weight for horizontal domino pairs when filling holes
    #[arg(long, default_value_t = 1.0)]
    pub horizontal_weight: f64,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one sampling run: shuffle, progress, and image export
pub struct SampleRunner {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl SampleRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli
            .should_show_progress()
            .then(|| ProgressManager::new(cli.order));
        Self { cli, progress }
    }

    /// Run the shuffle to the target order and export the results
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, sampling, or export fails
    pub fn process(&mut self) -> Result<()> {
        if self.cli.order > MAX_ORDER {
            return Err(invalid_parameter(
                "order",
                &self.cli.order,
                &format!("orders above {MAX_ORDER} are not supported"),
            ));
        }

        let source = OrientationSource::with_weights(
            self.cli.seed,
            self.cli.vertical_weight,
            self.cli.horizontal_weight,
        )?;
        let mut shuffler = DominoShuffler::with_source(source);

        let mut capture = self
            .cli
            .animate
            .then(|| GrowthCapture::new(self.cli.order, self.cli.cell_size));

        while shuffler.order() < self.cli.order {
            shuffler.shuffle_step()?;

            if let Some(ref mut cap) = capture {
                cap.record(shuffler.tiling());
            }
            if let Some(ref pm) = self.progress {
                pm.update(shuffler.order());
            }
        }

        let output = self.cli.output.to_string_lossy();
        export_tiling_as_png(shuffler.tiling(), self.cli.cell_size, &output)?;

        if let Some(cap) = capture {
            let gif_path = self.cli.output.with_extension("gif");
            cap.export_gif(&gif_path.to_string_lossy(), GIF_FRAME_DELAY_MS)?;
        }

        if let Some(ref pm) = self.progress {
            pm.finish();
        }

        Ok(())
    }
}
