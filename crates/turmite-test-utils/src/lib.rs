//! Test utilities and mock grids for Turmite development.
//!
//! Provides instrumented and sparse implementations of [`Grid`] plus
//! shared palette and rule fixtures, so engine tests can assert on
//! every cell access without a presentation surface.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

use std::cell::Cell;
use std::collections::HashMap;

use turmite_core::{Color, Grid, Position, StepError};

/// Wraps a grid and records every access.
///
/// Reads are counted; writes are logged in order with the color written.
/// Failed accesses are counted but not logged.
pub struct RecordingGrid<G> {
    inner: G,
    reads: Cell<usize>,
    rejected: Cell<usize>,
    writes: Vec<(Position, Color)>,
}

impl<G: Grid> RecordingGrid<G> {
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            reads: Cell::new(0),
            rejected: Cell::new(0),
            writes: Vec::new(),
        }
    }

    /// Successful reads so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Accesses that failed with `OffGrid`.
    pub fn rejected(&self) -> usize {
        self.rejected.get()
    }

    /// Successful writes, oldest first.
    pub fn writes(&self) -> &[(Position, Color)] {
        &self.writes
    }

    /// Forget recorded accesses (e.g. the background fill).
    pub fn clear_log(&mut self) {
        self.reads.set(0);
        self.rejected.set(0);
        self.writes.clear();
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Grid> Grid for RecordingGrid<G> {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn read(&self, pos: Position) -> Result<Color, StepError> {
        let result = self.inner.read(pos);
        let counter = if result.is_ok() { &self.reads } else { &self.rejected };
        counter.set(counter.get() + 1);
        result
    }

    fn write(&mut self, pos: Position, color: Color) -> Result<(), StepError> {
        match self.inner.write(pos, color) {
            Ok(()) => {
                self.writes.push((pos, color));
                Ok(())
            }
            Err(e) => {
                self.rejected.set(self.rejected.get() + 1);
                Err(e)
            }
        }
    }

    fn fill(&mut self, color: Color) {
        self.inner.fill(color);
    }
}

/// A bounded grid that stores only cells differing from the background.
///
/// Cheap to build at any size, and lets tests plant colors that are not
/// in the run's palette.
pub struct SparseGrid {
    width: u32,
    height: u32,
    background: Color,
    cells: HashMap<Position, Color>,
}

impl SparseGrid {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            background,
            cells: HashMap::new(),
        }
    }

    /// Number of cells not holding the background color.
    pub fn painted(&self) -> usize {
        self.cells.len()
    }

    /// Distinct colors present, background included.
    pub fn colors(&self) -> Vec<Color> {
        let mut out = vec![self.background];
        for c in self.cells.values() {
            if !out.contains(c) {
                out.push(*c);
            }
        }
        out
    }
}

impl Grid for SparseGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn read(&self, pos: Position) -> Result<Color, StepError> {
        if !self.contains(pos) {
            return Err(StepError::OffGrid { position: pos });
        }
        Ok(self.cells.get(&pos).copied().unwrap_or(self.background))
    }

    fn write(&mut self, pos: Position, color: Color) -> Result<(), StepError> {
        if !self.contains(pos) {
            return Err(StepError::OffGrid { position: pos });
        }
        if color == self.background {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, color);
        }
        Ok(())
    }

    fn fill(&mut self, color: Color) {
        self.background = color;
        self.cells.clear();
    }
}
