//! Core value types shared across move generation, search, and engines.

use crate::chess_errors::{ChessError, ChessResult};

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn advance. White pawns move toward row 0.
    #[inline]
    pub const fn pawn_row_step(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Home row of this color's back rank (kings and rooks start here).
    #[inline]
    pub const fn home_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row a pawn of this color starts on.
    #[inline]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A colored piece occupying a board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A validated board coordinate. Row 0 is rank 8, row 7 is rank 1; column 0
/// is file 'a'. Every constructed `Square` indexes the 8x8 board safely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Bounds-checked constructor for caller-supplied coordinates.
    pub fn try_new(row: i8, col: i8) -> ChessResult<Self> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(ChessError::SquareOutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Internal constructor for coordinates already known to be in range
    /// (loop indices and fixed board landmarks).
    #[inline]
    pub(crate) const fn from_parts(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Offset by a (row, col) delta, or `None` when the result leaves the
    /// board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order (rank 8 first).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::from_parts(row, col)))
    }
}

/// The four independent castling permissions. A right is only ever cleared,
/// never re-granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    /// All four rights granted, as at the start of a game.
    pub const fn initial() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    /// Clears both rights for `color`, as when its king moves.
    pub fn clear_for_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    #[inline]
    pub const fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub const fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }
}

/// A move as a value: source, destination, and an optional promotion kind
/// that only matters when a pawn reaches the farthest rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CastlingRights, Color, Square};

    #[test]
    fn square_construction_rejects_out_of_range_coordinates() {
        assert!(Square::try_new(0, 0).is_ok());
        assert!(Square::try_new(7, 7).is_ok());
        assert!(Square::try_new(8, 0).is_err());
        assert!(Square::try_new(0, -1).is_err());
    }

    #[test]
    fn square_offset_stops_at_the_board_edge() {
        let corner = Square::try_new(0, 0).expect("a8 should construct");
        assert!(corner.offset(-1, 0).is_none());
        assert!(corner.offset(0, -1).is_none());
        let inside = corner.offset(1, 1).expect("b7 should be on the board");
        assert_eq!((inside.row(), inside.col()), (1, 1));
    }

    #[test]
    fn all_squares_enumerates_the_full_board_once() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!((squares[0].row(), squares[0].col()), (0, 0));
        assert_eq!((squares[63].row(), squares[63].col()), (7, 7));
    }

    #[test]
    fn clearing_rights_for_one_color_leaves_the_other_intact() {
        let mut rights = CastlingRights::initial();
        rights.clear_for_color(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(!rights.queenside(Color::White));
        assert!(rights.kingside(Color::Black));
        assert!(rights.queenside(Color::Black));
    }

    #[test]
    fn pawn_geometry_is_direction_dependent() {
        assert_eq!(Color::White.pawn_row_step(), -1);
        assert_eq!(Color::Black.pawn_row_step(), 1);
        assert_eq!(Color::White.pawn_start_row(), 6);
        assert_eq!(Color::Black.promotion_row(), 7);
    }
}
