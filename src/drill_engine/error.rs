use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DrillError {
    #[error("Invalid problem {multiplicand}×{multiplier}: factors must be in 1..=9 and answer must be their product")]
    InvalidProblem { multiplicand: u8, multiplier: u8 },
    #[error("Invalid grid config: cell_size {cell_size} with padding {padding} does not fit the 9×9 grid")]
    InvalidGridConfig { cell_size: u32, padding: u32 },
    #[error("Deck has no problems")]
    EmptyDeck,
}

pub type Result<T> = core::result::Result<T, DrillError>;
