//! An LED matrix panel emulated in the terminal.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use ledlife_lib::{Error, PixelDisplay};
use std::io::{self, Stdout, Write};

/// Lit pixel.
const ON: &str = "● ";
/// Dark pixel.
const OFF: &str = "· ";

pub(crate) fn render_error(e: io::Error) -> Error {
    Error::RenderError(e.to_string())
}

/// A panel of `width × height` red LEDs, drawn from terminal row `top`.
///
/// Every pixel takes two terminal columns, so that the panel looks
/// roughly square.
pub(crate) struct TerminalPanel {
    width: usize,
    height: usize,
    top: u16,
    frame: Vec<bool>,
    color: Color,
    out: Stdout,
}

impl TerminalPanel {
    pub(crate) fn new(width: usize, height: usize, top: u16) -> Self {
        TerminalPanel {
            width,
            height,
            top,
            frame: vec![false; width * height],
            color: Color::Red,
            out: io::stdout(),
        }
    }
}

impl PixelDisplay for TerminalPanel {
    fn set_brightness(&mut self, brightness: u8) -> Result<(), Error> {
        let level = 0x60 + 0x0a * brightness.min(15);
        self.color = Color::Rgb {
            r: level,
            g: level / 8,
            b: level / 8,
        };
        Ok(())
    }

    fn fill(&mut self, on: bool) {
        self.frame.fill(on);
    }

    fn pixel(&mut self, x: usize, y: usize, on: bool) {
        // Pixels off the panel are dropped.
        if x < self.width && y < self.height {
            self.frame[y * self.width + x] = on;
        }
    }

    fn show(&mut self) -> Result<(), Error> {
        for (y, row) in self.frame.chunks(self.width).enumerate() {
            queue!(self.out, MoveTo(0, self.top + y as u16)).map_err(render_error)?;
            for &on in row {
                let (color, pixel) = if on {
                    (self.color, ON)
                } else {
                    (Color::DarkGrey, OFF)
                };
                queue!(self.out, SetForegroundColor(color), Print(pixel), ResetColor)
                    .map_err(render_error)?;
            }
        }
        self.out.flush().map_err(render_error)
    }
}
