//! PNG export painting dominoes by direction over transparency

use image::{Rgba, RgbaImage};
use ndarray::Array2;

use crate::algorithm::tiling::Tiling;
use crate::io::configuration::{DIRECTION_COLORS, OUTLINE_COLOR};
use crate::io::error::{Result, ShuffleError, invalid_parameter};
use crate::spatial::{Cell, Direction};

/// Raster cell label: 0 outside or empty, 1..=4 a direction per
/// [`Direction::ALL`]
pub(crate) type DirectionRaster = Array2<u8>;

const fn direction_code(direction: Direction) -> u8 {
    match direction {
        Direction::North => 1,
        Direction::South => 2,
        Direction::East => 3,
        Direction::West => 4,
    }
}

/// Pixel position of a cell on a canvas sized for `canvas_order`
///
/// Rows run north to south so the image is drawn with north up.
const fn cell_origin(cell: Cell, canvas_order: u32, cell_size: u32) -> (u32, u32) {
    let n = canvas_order as i32;
    let col = (cell.x + n) as u32;
    let row = (n - 1 - cell.y) as u32;
    (col * cell_size, row * cell_size)
}

/// Per-cell direction labels on a square canvas for `canvas_order`
///
/// The canvas order may exceed the tiling's own order so that animation
/// frames of growing diamonds share one geometry.
pub(crate) fn direction_raster(tiling: &Tiling, canvas_order: u32) -> DirectionRaster {
    let side = 2 * canvas_order as usize;
    let n = canvas_order as i32;
    let mut raster = Array2::zeros((side, side));

    for (cell, direction) in tiling.tiles() {
        let row = (n - 1 - cell.y) as usize;
        let col = (cell.x + n) as usize;
        if let Some(label) = raster.get_mut([row, col]) {
            *label = direction_code(direction);
        }
    }
    raster
}

/// Render a raster of direction labels to pixels
pub(crate) fn render_raster(raster: &DirectionRaster, cell_size: u32) -> RgbaImage {
    let (rows, cols) = raster.dim();
    let mut img = RgbaImage::new(cols as u32 * cell_size, rows as u32 * cell_size);

    for ((row, col), &label) in raster.indexed_iter() {
        let color = DIRECTION_COLORS
            .get(label.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or([0, 0, 0, 0]);
        for dy in 0..cell_size {
            for dx in 0..cell_size {
                img.put_pixel(
                    col as u32 * cell_size + dx,
                    row as u32 * cell_size + dy,
                    Rgba(color),
                );
            }
        }
    }
    img
}

/// Draw a one-pixel outline around every domino of the tiling
fn outline_dominoes(img: &mut RgbaImage, tiling: &Tiling, cell_size: u32) {
    let order = tiling.order();
    for domino in tiling.dominoes() {
        let lesser = domino.cells[0];
        let extent = domino.direction.extent();
        // The greater cell sits east or north of the lesser one, so the
        // rectangle's top-left pixel comes from the north-west cell.
        let anchor_cell = Cell::new(lesser.x, lesser.y + extent[1]);
        let (x0, y0) = cell_origin(anchor_cell, order, cell_size);
        let w = (1 + extent[0] as u32) * cell_size;
        let h = (1 + extent[1] as u32) * cell_size;

        for dx in 0..w {
            img.put_pixel(x0 + dx, y0, Rgba(OUTLINE_COLOR));
            img.put_pixel(x0 + dx, y0 + h - 1, Rgba(OUTLINE_COLOR));
        }
        for dy in 0..h {
            img.put_pixel(x0, y0 + dy, Rgba(OUTLINE_COLOR));
            img.put_pixel(x0 + w - 1, y0 + dy, Rgba(OUTLINE_COLOR));
        }
    }
}

/// Export a tiling as a PNG with direction-colored, outlined dominoes
///
/// # Errors
///
/// Returns an error if:
/// - The tiling has order 0 (nothing to render)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_as_png(tiling: &Tiling, cell_size: u32, output_path: &str) -> Result<()> {
    if tiling.order() == 0 {
        return Err(invalid_parameter(
            "order",
            &0,
            &"an order-0 diamond has no cells to render",
        ));
    }

    let raster = direction_raster(tiling, tiling.order());
    let mut img = render_raster(&raster, cell_size.max(1));
    if cell_size >= 3 {
        outline_dominoes(&mut img, tiling, cell_size);
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| ShuffleError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| ShuffleError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
