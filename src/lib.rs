//! Dec Big Num \
//! This crate provides:
//! - [`BigInteger`]: Immutable arbitrary-precision non-negative integers stored as little-endian base `10^4` blocks,
//!   with addition, multiplication, comparison and canonical decimal rendering.
//!
//! Values are bounded by [`BLOCKS_COUNT`] blocks ([`MAX_DIGITS`] decimal digits). Results that would not fit are
//! reported as [`BigIntegerError::CapacityExceeded`] by the `checked_*` methods; the `+` and `*` operators panic instead.

mod big_integer;
mod cache;
mod constants;
mod error;

pub use big_integer::BigInteger;
pub use constants::{BLOCKS_COUNT, BLOCK_BASE, BLOCK_SIZE, MAX_DIGITS};
pub use error::{BigIntegerError, Result};

#[cfg(test)]
mod tests {
    use crate::BigInteger;

    #[test]
    fn it_works() {
        let a: BigInteger = "10000000000000".parse().unwrap();
        let b: BigInteger = "900000000000".parse().unwrap();
        println!("a = {}", a);
        println!("a + b = {}", &a + &b);
        println!("a * b = {}", &a * &b);
        println!("a > b = {}", a > b);
        assert_eq!((&a + &b).to_string(), "10900000000000");
        assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
    }
}
