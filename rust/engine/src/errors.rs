use thiserror::Error;

/// Why a removal was refused. The grid is left untouched in every case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("Slot ({row}, {col}) is outside the 3x3 grid")]
    OutOfBounds { row: i32, col: i32 },
    #[error("Slot ({row}, {col}) is empty")]
    EmptySlot { row: usize, col: usize },
    #[error("The same slot was selected more than once")]
    DuplicateSlot,
    #[error("Ranks sum to {sum}, not 11")]
    NotEleven { sum: u8 },
    #[error("Cards are not one Jack, one Queen and one King")]
    NotFaceTriple,
    #[error("Game is already over")]
    GameOver,
}
