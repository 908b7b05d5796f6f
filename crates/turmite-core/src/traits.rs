//! The grid capability the engine steps against.

use crate::color::Color;
use crate::error::StepError;
use crate::heading::Position;

/// Read/write access to a rectangular grid of colors.
///
/// The engine never allocates or owns cell storage itself: it reads and
/// writes single cells through this trait. Coordinates are 0-indexed with
/// the origin at the top-left and `y` growing downward. Any access outside
/// `[0, width) x [0, height)` must fail with [`StepError::OffGrid`], which
/// the engine treats as the end of a run.
pub trait Grid {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Read the color at `pos`.
    fn read(&self, pos: Position) -> Result<Color, StepError>;

    /// Write `color` at `pos`.
    fn write(&mut self, pos: Position, color: Color) -> Result<(), StepError>;

    /// Whether `pos` lies inside the grid.
    fn contains(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && pos.x < i64::from(self.width())
            && pos.y < i64::from(self.height())
    }

    /// Paint every cell with `color`.
    ///
    /// The default writes cell by cell; dense backends should override it.
    fn fill(&mut self, color: Color) {
        for y in 0..i64::from(self.height()) {
            for x in 0..i64::from(self.width()) {
                // In range by construction.
                let _ = self.write(Position::new(x, y), color);
            }
        }
    }
}
