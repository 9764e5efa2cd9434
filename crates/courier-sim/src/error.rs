use courier_core::Tile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("simulation needs at least one courier")]
    NoCouriers,

    #[error("courier {index} starts on a blocked tile {tile}")]
    BlockedStart { index: usize, tile: Tile },
}

pub type SimResult<T> = Result<T, SimError>;
