//! Rendering generations.

use crate::{error::Error, grid::Grid, pattern::PATTERN_SIZE};
use std::io::Write;

/// Something that shows a generation.
///
/// The engine hands the grid to the sink once per generation.
/// A sink only reads the grid.
pub trait RenderSink {
    /// Shows the current generation.
    fn render(&mut self, grid: &Grid) -> Result<(), Error>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, grid: &Grid) -> Result<(), Error> {
        (**self).render(grid)
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn render(&mut self, grid: &Grid) -> Result<(), Error> {
        (**self).render(grid)
    }
}

/// Renders to every sink in order, stopping at the first error.
impl<S: RenderSink> RenderSink for Vec<S> {
    fn render(&mut self, grid: &Grid) -> Result<(), Error> {
        self.iter_mut().try_for_each(|sink| sink.render(grid))
    }
}

/// Prints the whole buffer, border included, as text.
///
/// Dead cells are ` .`, living cells are ` O`.
/// Every generation is followed by a blank line.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    /// Gets back the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders a grid as a string, in the same format as the sink.
    pub fn display(grid: &Grid) -> String {
        let mut str = String::with_capacity(grid.cells().len() * 2 + grid.rows() + 3);
        for row in grid.cells().chunks(grid.row_length()) {
            for &cell in row {
                str.push_str(if cell == 0 { " ." } else { " O" });
            }
            str.push('\n');
        }
        str.push('\n');
        str
    }
}

impl<W: Write> RenderSink for TextRenderer<W> {
    fn render(&mut self, grid: &Grid) -> Result<(), Error> {
        self.out
            .write_all(Self::display(grid).as_bytes())
            .and_then(|_| self.out.flush())
            .map_err(|e| Error::RenderError(e.to_string()))
    }
}

/// A matrix of on/off pixels, e.g., a chain of 8×8 LED modules.
///
/// This is the boundary to the hardware driver. Nothing here retries:
/// a driver either succeeds or reports an error.
pub trait PixelDisplay {
    /// Prepares the device. Called once, before anything else.
    fn init(&mut self) -> Result<(), Error> {
        Ok(())
    }

    /// Sets the brightness, from `0` to `15`.
    fn set_brightness(&mut self, brightness: u8) -> Result<(), Error>;

    /// Sets every pixel in the frame buffer.
    fn fill(&mut self, on: bool);

    /// Sets one pixel in the frame buffer.
    fn pixel(&mut self, x: usize, y: usize, on: bool);

    /// Sends the frame buffer to the device.
    fn show(&mut self) -> Result<(), Error>;
}

/// Draws the interior of the grid on a [`PixelDisplay`].
pub struct PixelRenderer<D: PixelDisplay> {
    display: D,

    /// Whether each 8×8 block is transposed, for panels whose modules
    /// are mounted turned by a quarter.
    rotate_blocks: bool,
}

impl<D: PixelDisplay> PixelRenderer<D> {
    /// Initializes the display, sets its brightness and blanks it.
    ///
    /// The brightness is handed to the display unchanged.
    pub fn new(mut display: D, brightness: u8, rotate_blocks: bool) -> Result<Self, Error> {
        display.init()?;
        display.set_brightness(brightness)?;
        display.fill(false);
        display.show()?;
        Ok(PixelRenderer {
            display,
            rotate_blocks,
        })
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn into_inner(self) -> D {
        self.display
    }

    /// The device pixel `(x, y)` showing the cell at `(row, col)`.
    #[inline]
    pub fn pixel_of(&self, row: usize, col: usize) -> (usize, usize) {
        if self.rotate_blocks {
            let (block_row, block_col) = (row / PATTERN_SIZE, col / PATTERN_SIZE);
            (
                block_col * PATTERN_SIZE + row % PATTERN_SIZE,
                block_row * PATTERN_SIZE + col % PATTERN_SIZE,
            )
        } else {
            (col, row)
        }
    }
}

impl<D: PixelDisplay> RenderSink for PixelRenderer<D> {
    fn render(&mut self, grid: &Grid) -> Result<(), Error> {
        self.display.fill(false);
        for row in 0..grid.rows() {
            for col in 0..grid.columns() {
                if grid.get(row, col) != 0 {
                    let (x, y) = self.pixel_of(row, col);
                    self.display.pixel(x, y, true);
                }
            }
        }
        self.display.show()
    }
}
