//! The turmite agent and its step algorithm.
//!
//! One step, in order:
//!
//! 1. read the color under the agent,
//! 2. look up its palette index,
//! 3. look up the turn for that index,
//! 4. rotate the heading,
//! 5. repaint the cell with the palette successor of the index read in (1),
//! 6. move one cell along the new heading.
//!
//! The repaint happens at the pre-move position using the pre-mutation
//! index. Reordering any of these changes the automaton.

use turmite_core::{ColorPalette, Grid, Heading, Position, RuleTable, StepError};

/// Result of a step that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The cell was repainted and the agent moved.
    Continued,
}

/// Position and heading of the walking agent.
///
/// Created at a run's origin, mutated once per [`step`](TurmiteAgent::step),
/// and discarded when the run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurmiteAgent {
    position: Position,
    heading: Heading,
}

impl TurmiteAgent {
    /// Place an agent at `position` facing `heading`.
    pub fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Advance the agent by one step against `grid`.
    ///
    /// # Errors
    ///
    /// - [`StepError::OffGrid`] if the agent stands outside `grid`. This is
    ///   the halt signal; nothing is mutated.
    /// - [`StepError::UnknownColor`] if the cell's color is not in `palette`.
    /// - [`StepError::RuleIndexOutOfRange`] if `rules` has no entry for the
    ///   cell's palette index.
    ///
    /// On any error neither the agent nor the grid has changed.
    pub fn step<G: Grid + ?Sized>(
        &mut self,
        grid: &mut G,
        palette: &ColorPalette,
        rules: &RuleTable,
    ) -> Result<StepOutcome, StepError> {
        let here = self.position;
        let color = grid.read(here)?;
        let index = palette.index_of(color).ok_or(StepError::UnknownColor {
            color,
            position: here,
        })?;
        let turn = rules.turn_for(index)?;

        let heading = turn.apply(self.heading);
        grid.write(here, palette.successor(index))?;
        self.heading = heading;
        self.position = here.step(heading);
        Ok(StepOutcome::Continued)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turmite_core::Color;
    use turmite_space::Grid2D;

    fn bw() -> ColorPalette {
        ColorPalette::new([Color::WHITE, Color::BLACK]).unwrap()
    }

    #[test]
    fn classic_first_step() {
        let mut grid = Grid2D::new(5, 5, Color::WHITE).unwrap();
        let rules = RuleTable::parse("RL").unwrap();
        let mut ant = TurmiteAgent::new(Position::new(2, 2), Heading::North);

        ant.step(&mut grid, &bw(), &rules).unwrap();

        // White -> turn right, paint black, move east.
        assert_eq!(grid.read(Position::new(2, 2)), Ok(Color::BLACK));
        assert_eq!(ant.heading(), Heading::East);
        assert_eq!(ant.position(), Position::new(3, 2));
    }

    #[test]
    fn turn_uses_color_before_repaint() {
        let mut grid = Grid2D::new(5, 5, Color::WHITE).unwrap();
        grid.write(Position::new(2, 2), Color::BLACK).unwrap();
        let rules = RuleTable::parse("RL").unwrap();
        let mut ant = TurmiteAgent::new(Position::new(2, 2), Heading::North);

        ant.step(&mut grid, &bw(), &rules).unwrap();

        // Black -> turn left, paint white, move west.
        assert_eq!(grid.read(Position::new(2, 2)), Ok(Color::WHITE));
        assert_eq!(ant.heading(), Heading::West);
        assert_eq!(ant.position(), Position::new(1, 2));
    }

    #[test]
    fn off_grid_mutates_nothing() {
        let mut grid = Grid2D::new(2, 2, Color::WHITE).unwrap();
        let rules = RuleTable::parse("RL").unwrap();
        let start = Position::new(2, 0);
        let mut ant = TurmiteAgent::new(start, Heading::East);

        let err = ant.step(&mut grid, &bw(), &rules).unwrap_err();

        assert_eq!(err, StepError::OffGrid { position: start });
        assert!(err.is_halt());
        assert_eq!(ant, TurmiteAgent::new(start, Heading::East));
        assert_eq!(grid.count(Color::WHITE), 4);
    }

    #[test]
    fn unknown_color_is_reported() {
        let stray = Color::rgb(0x12, 0x34, 0x56);
        let mut grid = Grid2D::new(3, 3, stray).unwrap();
        let rules = RuleTable::parse("RL").unwrap();
        let mut ant = TurmiteAgent::new(Position::new(1, 1), Heading::North);

        let err = ant.step(&mut grid, &bw(), &rules).unwrap_err();

        assert_eq!(
            err,
            StepError::UnknownColor {
                color: stray,
                position: Position::new(1, 1)
            }
        );
        assert_eq!(ant.position(), Position::new(1, 1));
        assert_eq!(grid.count(stray), 9);
    }

    #[test]
    fn unruled_index_is_reported() {
        let palette = ColorPalette::new([Color::WHITE, Color::BLACK]).unwrap();
        let mut grid = Grid2D::new(3, 3, Color::BLACK).unwrap();
        let rules = RuleTable::parse("R").unwrap();
        let mut ant = TurmiteAgent::new(Position::new(1, 1), Heading::North);

        assert_eq!(
            ant.step(&mut grid, &palette, &rules),
            Err(StepError::RuleIndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(ant.heading(), Heading::North);
    }

    #[test]
    fn straight_keeps_heading() {
        let palette = ColorPalette::new([Color::WHITE, Color::BLACK]).unwrap();
        let mut grid = Grid2D::new(3, 3, Color::BLACK).unwrap();
        let rules = RuleTable::parse("R").unwrap().padded_to(2);
        let mut ant = TurmiteAgent::new(Position::new(1, 1), Heading::South);

        ant.step(&mut grid, &palette, &rules).unwrap();

        assert_eq!(ant.heading(), Heading::South);
        assert_eq!(ant.position(), Position::new(1, 2));
        assert_eq!(grid.read(Position::new(1, 1)), Ok(Color::WHITE));
    }
}
