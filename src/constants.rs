/// Decimal digits stored in one block.
pub const BLOCK_SIZE: usize = 4;

/// Radix of a block, `10^BLOCK_SIZE`.
pub const BLOCK_BASE: u32 = 10_000;

/// Upper bound on the number of significant blocks of a `BigInteger`.
pub const BLOCKS_COUNT: usize = 1000;

/// Largest decimal digit count a `BigInteger` can hold.
pub const MAX_DIGITS: usize = BLOCKS_COUNT * BLOCK_SIZE;

/// Small values kept prebuilt in `POS_CACHE`, `0..=MAX_CONSTANT`.
pub const MAX_CONSTANT: usize = 16;

/// Radix of a single decimal shift inside a block, `block * 10 + carry`.
pub const DIGIT_RADIX: u32 = 10;
