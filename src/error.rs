use thiserror::Error;

/// Errors raised at the engine boundary before any computation begins.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A matrix reported dimensions that disagree with its element buffer,
    /// or an output extent derived from them is not representable.
    #[error("invalid shape: {rows}x{cols} matrix with buffer of {len} elements")]
    InvalidShape {
        rows: usize,
        cols: usize,
        len: usize,
    },
}
