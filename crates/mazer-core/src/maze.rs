//! The maze grid model.
//!
//! A [`Maze`] is parsed once from text and is read-only to solvers. Walls
//! live in a flat row-major buffer; special tiles and teleport pairs are
//! classified during the single parsing scan.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geom::{Cell, Range};
use crate::tiles::{self, TileKind};

/// A static 2-D maze with one start, one goal, special tiles and teleports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    bounds: Range,
    walls: Vec<bool>,
    kinds: Vec<Option<TileKind>>,
    start: Cell,
    goal: Cell,
    tiles: BTreeMap<TileKind, BTreeSet<Cell>>,
    teleports: HashMap<Cell, Cell>,
    pairs: Vec<(Cell, Cell)>,
    unpaired: Option<Cell>,
}

impl Maze {
    /// Parse a maze from its text layout.
    ///
    /// Rows are separated by newlines. The width is the longest row; shorter
    /// rows are padded with open cells. Exactly one `A` and one `B` are
    /// required. Characters other than the known glyphs become walls.
    ///
    /// Teleport cells (`T`) are paired two at a time in row-major order; an
    /// odd trailing teleport stays an open cell without a partner.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ParseError::Empty);
        }

        let count = |marker: char| rows.iter().flatten().filter(|&&ch| ch == marker).count();
        let starts = count(tiles::START);
        if starts != 1 {
            return Err(ParseError::StartCount(starts));
        }
        let goals = count(tiles::GOAL);
        if goals != 1 {
            return Err(ParseError::GoalCount(goals));
        }

        let bounds = Range::of_size(height, width);
        let mut walls = vec![false; bounds.len()];
        let mut kinds = vec![None; bounds.len()];
        let mut start = Cell::ZERO;
        let mut goal = Cell::ZERO;
        let mut tiles: BTreeMap<TileKind, BTreeSet<Cell>> = BTreeMap::new();
        let mut teleport_cells = Vec::new();

        for (i, cell) in bounds.iter().enumerate() {
            let ch = rows[cell.row as usize]
                .get(cell.col as usize)
                .copied()
                .unwrap_or(tiles::OPEN);
            match ch {
                tiles::START => start = cell,
                tiles::GOAL => goal = cell,
                tiles::TELEPORT => teleport_cells.push(cell),
                _ => {}
            }
            if let Some(kind) = TileKind::from_glyph(ch) {
                kinds[i] = Some(kind);
                tiles.entry(kind).or_default().insert(cell);
            }
            walls[i] = !tiles::passable(ch);
        }

        let mut teleports = HashMap::new();
        let mut pairs = Vec::new();
        for pair in teleport_cells.chunks_exact(2) {
            let (a, b) = (pair[0], pair[1]);
            teleports.insert(a, b);
            teleports.insert(b, a);
            pairs.push((a, b));
        }
        let unpaired = teleport_cells.chunks_exact(2).remainder().first().copied();
        if let Some(cell) = unpaired {
            log::warn!("teleport at {cell} has no partner and is ignored");
        }

        Ok(Self {
            bounds,
            walls,
            kinds,
            start,
            goal,
            tiles,
            teleports,
            pairs,
            unpaired,
        })
    }

    #[inline]
    fn idx(&self, c: Cell) -> Option<usize> {
        if !self.bounds.contains(c) {
            return None;
        }
        Some(c.row as usize * self.width() + c.col as usize)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.bounds.width() as usize
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.bounds.height() as usize
    }

    /// The rectangle of valid cells.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.goal
    }

    #[inline]
    pub fn in_bounds(&self, c: Cell) -> bool {
        self.bounds.contains(c)
    }

    /// Whether `c` is a wall. Cells outside the grid count as walls.
    #[inline]
    pub fn is_wall(&self, c: Cell) -> bool {
        self.idx(c).is_none_or(|i| self.walls[i])
    }

    /// Whether `c` is in bounds and not a wall.
    #[inline]
    pub fn is_open(&self, c: Cell) -> bool {
        !self.is_wall(c)
    }

    /// Special tile kind of `c`, if any.
    #[inline]
    pub fn classify(&self, c: Cell) -> Option<TileKind> {
        self.idx(c).and_then(|i| self.kinds[i])
    }

    /// All cells of the given kind, in row-major order.
    pub fn tiles(&self, kind: TileKind) -> impl Iterator<Item = Cell> + '_ {
        self.tiles.get(&kind).into_iter().flatten().copied()
    }

    /// The cell linked to `c` by a teleport pair.
    #[inline]
    pub fn teleport_partner(&self, c: Cell) -> Option<Cell> {
        self.teleports.get(&c).copied()
    }

    /// Teleport pairs in input order.
    pub fn teleports(&self) -> &[(Cell, Cell)] {
        &self.pairs
    }

    /// A trailing teleport cell that found no partner.
    pub fn unpaired_teleport(&self) -> Option<Cell> {
        self.unpaired
    }

    /// Whether `c` is a teleport endpoint (paired or not).
    pub fn is_teleport(&self, c: Cell) -> bool {
        self.teleports.contains_key(&c) || self.unpaired == Some(c)
    }

    /// Number of open cardinal neighbours of `c`.
    pub fn open_count(&self, c: Cell) -> usize {
        c.neighbors_4().into_iter().filter(|&n| self.is_open(n)).count()
    }

    /// Number of open cells.
    pub fn open_cells(&self) -> usize {
        self.walls.iter().filter(|&&w| !w).count()
    }

    /// Set or clear the wall at `c`. Does nothing out of bounds, and the
    /// start and goal can never become walls.
    pub fn set_wall(&mut self, c: Cell, wall: bool) {
        if wall && (c == self.start || c == self.goal) {
            return;
        }
        if let Some(i) = self.idx(c) {
            self.walls[i] = wall;
        }
    }

    /// Clear the walls of the four in-bounds neighbours of `c`.
    pub fn unlock_area(&mut self, c: Cell) {
        for n in c.neighbors_4() {
            self.set_wall(n, false);
        }
    }

    fn glyph(&self, c: Cell) -> char {
        if c == self.start {
            tiles::START
        } else if c == self.goal {
            tiles::GOAL
        } else if self.is_wall(c) {
            tiles::WALL
        } else if self.is_teleport(c) {
            tiles::TELEPORT
        } else if let Some(kind) = self.classify(c) {
            kind.glyph()
        } else {
            tiles::OPEN
        }
    }
}

impl FromStr for Maze {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Writes the maze back in the text format, one row per line.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() as i32 {
            let line: String = (0..self.width() as i32)
                .map(|col| self.glyph(Cell::new(row, col)))
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORRIDOR: &str = "\
#####
#A B#
#####";

    #[test]
    fn parse_corridor() {
        let m = Maze::parse(CORRIDOR).unwrap();
        assert_eq!(m.width(), 5);
        assert_eq!(m.height(), 3);
        assert_eq!(m.start(), Cell::new(1, 1));
        assert_eq!(m.goal(), Cell::new(1, 3));
        assert!(m.is_open(Cell::new(1, 2)));
        assert!(m.is_wall(Cell::new(0, 0)));
        assert_eq!(m.open_cells(), 3);
    }

    #[test]
    fn out_of_bounds_is_wall() {
        let m = Maze::parse("AB").unwrap();
        assert!(m.is_wall(Cell::new(-1, 0)));
        assert!(m.is_wall(Cell::new(0, 2)));
        assert!(m.is_wall(Cell::new(1, 0)));
        assert!(!m.in_bounds(Cell::new(0, 2)));
    }

    #[test]
    fn ragged_rows_are_padded_open() {
        let m = Maze::parse("#A##\n#\n#B##").unwrap();
        assert_eq!(m.width(), 4);
        assert!(m.is_open(Cell::new(1, 1)));
        assert!(m.is_open(Cell::new(1, 3)));
    }

    #[test]
    fn unknown_glyphs_are_walls() {
        let m = Maze::parse("A.x B").unwrap();
        assert!(m.is_wall(Cell::new(0, 1)));
        assert!(m.is_wall(Cell::new(0, 2)));
        assert!(m.is_open(Cell::new(0, 3)));
    }

    #[test]
    fn start_and_goal_counts() {
        assert_eq!(Maze::parse("#B#"), Err(ParseError::StartCount(0)));
        assert_eq!(Maze::parse("AAB"), Err(ParseError::StartCount(2)));
        assert_eq!(Maze::parse("A  "), Err(ParseError::GoalCount(0)));
        assert_eq!(Maze::parse("ABB"), Err(ParseError::GoalCount(2)));
    }

    #[test]
    fn empty_input() {
        assert_eq!(Maze::parse(""), Err(ParseError::Empty));
        assert_eq!(Maze::parse("\n\n"), Err(ParseError::Empty));
    }

    #[test]
    fn special_tiles_classified() {
        let m = Maze::parse("AKHCNPB").unwrap();
        assert_eq!(m.classify(Cell::new(0, 1)), Some(TileKind::Key));
        assert_eq!(m.classify(Cell::new(0, 2)), Some(TileKind::Hint));
        assert_eq!(m.classify(Cell::new(0, 3)), Some(TileKind::Checkpoint));
        assert_eq!(m.classify(Cell::new(0, 4)), Some(TileKind::Reward));
        assert_eq!(m.classify(Cell::new(0, 5)), Some(TileKind::Penalty));
        assert_eq!(m.classify(Cell::new(0, 0)), None);
        assert_eq!(m.tiles(TileKind::Reward).collect::<Vec<_>>(), vec![Cell::new(0, 4)]);
        for c in m.bounds() {
            assert!(m.is_open(c));
        }
    }

    #[test]
    fn teleports_pair_in_input_order() {
        let m = Maze::parse("T A T\nT B T\n  T  ").unwrap();
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 4);
        let c = Cell::new(1, 0);
        let d = Cell::new(1, 4);
        assert_eq!(m.teleports(), &[(a, b), (c, d)]);
        assert_eq!(m.teleport_partner(a), Some(b));
        assert_eq!(m.teleport_partner(b), Some(a));
        assert_eq!(m.teleport_partner(d), Some(c));
        let odd = Cell::new(2, 2);
        assert_eq!(m.teleport_partner(odd), None);
        assert_eq!(m.unpaired_teleport(), Some(odd));
        assert!(m.is_open(odd));
        assert!(m.is_teleport(odd));
    }

    #[test]
    fn unlock_area_clears_neighbours() {
        let mut m = Maze::parse("###\n#H#\n#AB").unwrap();
        let h = Cell::new(1, 1);
        m.unlock_area(h);
        for n in h.neighbors_4() {
            assert!(m.is_open(n));
        }
        assert!(m.is_wall(Cell::new(0, 0)));
        // idempotent
        let snapshot = m.clone();
        m.unlock_area(h);
        assert_eq!(m, snapshot);
    }

    #[test]
    fn start_and_goal_cannot_be_walled() {
        let mut m = Maze::parse(CORRIDOR).unwrap();
        m.set_wall(m.start(), true);
        m.set_wall(m.goal(), true);
        m.set_wall(Cell::new(1, 2), true);
        assert!(m.is_open(m.start()));
        assert!(m.is_open(m.goal()));
        assert!(m.is_wall(Cell::new(1, 2)));
        assert_eq!(m.open_count(m.start()), 0);
    }

    #[test]
    fn display_round_trip() {
        let text = "#########\n#A T  K #\n# ### H #\n#N  P CT#\n#   x  B#\n";
        let m = Maze::parse(text).unwrap();
        let rendered = m.to_string();
        assert_eq!(rendered, text.replace('x', "#"));
        assert_eq!(Maze::parse(&rendered).unwrap(), m);
    }

    #[test]
    fn crlf_lines() {
        let m = Maze::parse("A \r\n B\r\n").unwrap();
        assert_eq!(m.width(), 2);
        assert_eq!(m.goal(), Cell::new(1, 1));
    }
}
