//! Board representation for tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (3x3)
pub const BOARD_SIZE: usize = 3;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 9

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// The human player's mark (X)
    Human,
    /// The computer's mark (O)
    Computer,
}

impl Cell {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Cell {
        match self {
            Cell::Human => Cell::Computer,
            Cell::Computer => Cell::Human,
            Cell::Empty => Cell::Empty,
        }
    }

    /// Display character for this cell ('X', 'O', '-')
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::Human => 'X',
            Cell::Computer => 'O',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// All positions in row-major order (row 0..2, then column 0..2).
    /// Search and move selection depend on this ordering for their
    /// tie-breaking behavior.
    #[inline]
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
