//! Frame capture and GIF generation for the growing-diamond animation

use image::{Delay, Frame};

use crate::algorithm::tiling::Tiling;
use crate::io::configuration::FINAL_FRAME_HOLD;
use crate::io::error::{Result, ShuffleError, invalid_parameter};
use crate::io::image::{DirectionRaster, direction_raster, render_raster};

/// Captures one frame per completed shuffle cycle
///
/// All frames are rasterized against the target order's canvas so the
/// diamond visibly grows inside a fixed geometry.
pub struct GrowthCapture {
    frames: Vec<DirectionRaster>,
    canvas_order: u32,
    cell_size: u32,
}

impl GrowthCapture {
    /// A capture sized for a run up to the given target order
    pub fn new(target_order: u32, cell_size: u32) -> Self {
        Self {
            frames: Vec::with_capacity(target_order as usize),
            canvas_order: target_order,
            cell_size: cell_size.max(1),
        }
    }

    /// Record the current tiling as one animation frame
    pub fn record(&mut self, tiling: &Tiling) {
        self.frames.push(direction_raster(tiling, self.canvas_order));
    }

    /// Number of frames captured so far
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Encode all captured frames as an animated GIF
    ///
    /// The final frame is held longer so the finished tiling stays visible.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no cycles were captured for animation",
            ));
        }

        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .map(|raster| {
                Frame::from_parts(
                    render_raster(raster, self.cell_size),
                    0,
                    0,
                    Delay::from_numer_denom_ms(frame_delay_ms, 1),
                )
            })
            .collect();

        if let Some(last) = frames.last().map(|f| f.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                Delay::from_numer_denom_ms(frame_delay_ms * FINAL_FRAME_HOLD, 1),
            ));
        }

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            std::fs::create_dir_all(parent).map_err(|e| ShuffleError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| ShuffleError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| ShuffleError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }
}
