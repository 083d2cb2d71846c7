use thiserror::Error;

pub type Result<T> = std::result::Result<T, BigIntegerError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BigIntegerError {
    /// A character other than an ASCII decimal digit was found while parsing.
    #[error("malformed input: unexpected {found:?} at byte {position}, expected a decimal digit")]
    MalformedInput { position: usize, found: char },

    /// The value would need more significant blocks than a `BigInteger` may hold.
    #[error("capacity exceeded: result needs {required} blocks, the limit is {limit}")]
    CapacityExceeded { required: usize, limit: usize },

    #[error("invalid block {value} at index {index}: blocks must be below {base}", base = crate::constants::BLOCK_BASE)]
    InvalidBlock { index: usize, value: u32 },

    #[error("value with {digits} decimal digits does not fit in the target integer type")]
    DoesNotFit { digits: usize },
}
