//! Dense 2D grid backend.

use crate::error::SpaceError;
use turmite_core::{Color, Grid, Position, StepError};

/// A `width × height` grid of colors stored row-major in one `Vec`.
///
/// Cell `(x, y)` lives at index `y * width + x`. Out-of-range reads and
/// writes fail with [`StepError::OffGrid`].
///
/// # Examples
///
/// ```
/// use turmite_core::{Color, Grid, Position};
/// use turmite_space::Grid2D;
///
/// let mut grid = Grid2D::new(4, 3, Color::WHITE).unwrap();
/// grid.write(Position::new(3, 2), Color::BLACK).unwrap();
/// assert_eq!(grid.read(Position::new(3, 2)), Ok(Color::BLACK));
/// assert!(grid.read(Position::new(4, 0)).is_err());
/// assert_eq!(grid.count(Color::WHITE), 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid2D {
    width: u32,
    height: u32,
    cells: Vec<Color>,
}

impl Grid2D {
    /// Maximum dimension size: positions are checked against `i32` bounds.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum number of cells a dense grid will allocate.
    pub const MAX_CELLS: usize = 1 << 28;

    /// Check that a `width × height` grid is non-empty, addressable with
    /// `i32` coordinates, and small enough to allocate densely.
    ///
    /// Backends that do not store every cell only need the first two;
    /// see [`check_extent`](Self::check_extent).
    pub fn check_dimensions(width: u32, height: u32) -> Result<(), SpaceError> {
        Self::check_extent(width, height)?;
        match (width as usize).checked_mul(height as usize) {
            Some(cells) if cells <= Self::MAX_CELLS => Ok(()),
            _ => Err(SpaceError::TooManyCells {
                width,
                height,
                max: Self::MAX_CELLS,
            }),
        }
    }

    /// Check that both dimensions are non-zero and at most [`MAX_DIM`](Self::MAX_DIM).
    pub fn check_extent(width: u32, height: u32) -> Result<(), SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        Ok(())
    }

    /// Create a grid with every cell set to `background`.
    ///
    /// Fails with any error from [`check_dimensions`](Self::check_dimensions).
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, SpaceError> {
        Self::check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![background; (width as usize) * (height as usize)],
        })
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// One row of cells, or `None` if `y` is out of range.
    pub fn row(&self, y: u32) -> Option<&[Color]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (y as usize) * w;
        Some(&self.cells[start..start + w])
    }

    /// Number of cells currently holding `color`.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|c| **c == color).count()
    }

    /// Cells packed as `0xRRGGBBFF`, row-major, for blitting to a surface.
    pub fn to_rgba(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.to_rgba()).collect()
    }

    fn index(&self, pos: Position) -> Result<usize, StepError> {
        if !self.contains(pos) {
            return Err(StepError::OffGrid { position: pos });
        }
        Ok((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }
}

impl Grid for Grid2D {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read(&self, pos: Position) -> Result<Color, StepError> {
        let i = self.index(pos)?;
        Ok(self.cells[i])
    }

    fn write(&mut self, pos: Position, color: Color) -> Result<(), StepError> {
        let i = self.index(pos)?;
        self.cells[i] = color;
        Ok(())
    }

    fn fill(&mut self, color: Color) {
        self.cells.fill(color);
    }
}
