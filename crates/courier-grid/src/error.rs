use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("map has no rows or an empty first row")]
    EmptyMap,

    #[error("row {row} is {got} tiles wide, expected {expected}")]
    RaggedRow {
        row:      usize,
        expected: usize,
        got:      usize,
    },

    #[error("unknown tile code {code:?} in row {row}")]
    UnknownCode { code: char, row: usize },
}

pub type GridResult<T> = Result<T, GridError>;
