//! Drawing backends. They only read the grid and the agent position; nothing
//! here feeds back into the simulation.

use std::fmt::{Debug, Write};

use crate::gridworld::{Coord, Grid};

const WIDTH: usize = 20;
const HEIGHT: usize = 20;
const MARGIN: usize = 5;
const CANVAS: (usize, usize) = (255, 255);

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];
const GREEN: [u8; 3] = [0, 255, 0];
const RED: [u8; 3] = [255, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Print to stdout, return nothing.
    #[default]
    Human,
    /// Return the board as text.
    Ansi,
    /// Return an RGB pixel buffer.
    RgbArray,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderFrame {
    Text(String),
    Pixels {
        width: u32,
        height: u32,
        /// Row-major RGB, 3 bytes per pixel.
        data: Vec<u8>,
    },
}

/// Read-only view handed to a renderer.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a> {
    pub grid: &'a Grid,
    pub agent: Coord,
}

pub trait Renderer: Debug {
    fn frame(&self, view: &GridView<'_>, mode: RenderMode) -> RenderFrame;
}

/// One character per cell: `A` agent, `G` goal, `.` anything else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn draw(&self, view: &GridView<'_>) -> String {
        let grid = view.grid;
        let mut out = String::with_capacity(grid.x_bound() * (grid.y_bound() + 1));
        for row in 0..grid.x_bound() {
            for col in 0..grid.y_bound() {
                let cell = Coord::new(row, col);
                let glyph = if cell == view.agent {
                    'A'
                } else if grid.is_goal(cell) {
                    'G'
                } else {
                    '.'
                };
                out.push(glyph);
            }
            if row + 1 < grid.x_bound() {
                out.push('\n');
            }
        }
        out
    }
}

/// Paints the board as coloured squares on a black canvas.
#[derive(Debug, Clone, Copy, Default)]
pub struct PixelRenderer;

impl PixelRenderer {
    pub fn draw(&self, view: &GridView<'_>) -> RenderFrame {
        let (width, height) = CANVAS;
        let mut data = BLACK.repeat(width * height);

        for row in 0..view.grid.x_bound() {
            for col in 0..view.grid.y_bound() {
                let cell = Coord::new(row, col);
                // Goal colour wins over the agent.
                let color = if view.grid.is_goal(cell) {
                    GREEN
                } else if cell == view.agent {
                    RED
                } else {
                    WHITE
                };

                let left = (MARGIN + WIDTH) * col + MARGIN;
                let top = (MARGIN + HEIGHT) * row + MARGIN;
                for y in top..(top + HEIGHT).min(height) {
                    for x in left..(left + WIDTH).min(width) {
                        let offset = (y * width + x) * 3;
                        data[offset..offset + 3].copy_from_slice(&color);
                    }
                }
            }
        }

        RenderFrame::Pixels {
            width: width as u32,
            height: height as u32,
            data,
        }
    }
}

/// Default backend: text for `Human`/`Ansi`, pixels for `RgbArray`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoardRenderer {
    text: TextRenderer,
    pixels: PixelRenderer,
}

impl Renderer for BoardRenderer {
    fn frame(&self, view: &GridView<'_>, mode: RenderMode) -> RenderFrame {
        match mode {
            RenderMode::Human | RenderMode::Ansi => RenderFrame::Text(self.text.draw(view)),
            RenderMode::RgbArray => self.pixels.draw(view),
        }
    }
}

/// Frame with a title line on top, for drivers that print progress.
pub fn caption(frame: &RenderFrame, title: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "-- {title} --");
    match frame {
        RenderFrame::Text(text) => out.push_str(text),
        RenderFrame::Pixels { width, height, .. } => {
            let _ = write!(out, "<{width}x{height} rgb frame>");
        }
    }
    out
}
