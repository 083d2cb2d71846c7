//! # BigInteger
//! Immutable arbitrary-precision non-negative integers stored in base `10^4` blocks.
//! Range from `0` to `10^MAX_DIGITS - 1`.
//! # Example
//! ```
//! use dec_big_num::BigInteger;
//!
//! let a: BigInteger = "7123687".parse().unwrap();
//! let b: BigInteger = "8293843".parse().unwrap();
//! assert_eq!((&a + &b).to_string(), "15417530");
//! assert_eq!((&a * &b).to_string(), "59082741559141");
//! assert!(b > a);
//! ```
//!

use std::cmp::{Ordering, max};
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::iter::{Product, Sum};
use std::ops::{Add, Mul};
use std::str::FromStr;

use log::{debug, trace};

use crate::cache::POS_CACHE;
use crate::constants::*;
use crate::error::{BigIntegerError, Result};

/// Little-endian blocks, `blocks.len()` is the number of significant blocks.
#[derive(Clone)]
pub struct BigInteger {
    blocks: Vec<u32>,
}

// 杂项辅助函数
impl BigInteger {
    /// Block `i`, or `0` above the significant range.
    #[inline(always)]
    fn block(&self, i: usize) -> u32 {
        self.blocks.get(i).copied().unwrap_or(0)
    }

    pub fn filled_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Significant blocks, least significant first.
    pub fn blocks(&self) -> &[u32] {
        &self.blocks
    }

    pub fn is_zero(&self) -> bool {
        self.blocks == [0]
    }

    /// Number of decimal digits in the canonical rendering.
    pub fn digit_count(&self) -> usize {
        let top = self.blocks.last().copied().unwrap_or(0);
        let mut top_digits = 1;
        let mut rest = top / DIGIT_RADIX;
        while rest > 0 {
            top_digits += 1;
            rest /= DIGIT_RADIX;
        }
        (self.blocks.len() - 1) * BLOCK_SIZE + top_digits
    }

    fn capacity_exceeded(required: usize) -> BigIntegerError {
        debug!("rejecting value with {} blocks, limit is {}", required, BLOCKS_COUNT);
        BigIntegerError::CapacityExceeded { required, limit: BLOCKS_COUNT }
    }

    /// Drops high zero blocks and enforces the block limit.
    fn finish(mut blocks: Vec<u32>) -> Result<BigInteger> {
        while blocks.len() > 1 && blocks.last() == Some(&0) {
            blocks.pop();
        }
        if blocks.is_empty() {
            blocks.push(0);
        }
        if blocks.len() > BLOCKS_COUNT {
            return Err(BigInteger::capacity_exceeded(blocks.len()));
        }
        Ok(BigInteger { blocks })
    }
}

// 实现构造
impl BigInteger {
    pub fn zero() -> BigInteger {
        BigInteger::default()
    }

    pub fn one() -> BigInteger {
        POS_CACHE[1].clone()
    }

    /// Builds a value from raw little-endian blocks, each below `BLOCK_BASE`.
    /// High zero blocks are dropped; an empty vector is zero.
    pub fn from_blocks(blocks: Vec<u32>) -> Result<BigInteger> {
        if let Some((index, &value)) = blocks.iter().enumerate().find(|(_, b)| **b >= BLOCK_BASE) {
            return Err(BigIntegerError::InvalidBlock { index, value });
        }
        BigInteger::finish(blocks)
    }

    // val < BLOCK_BASE
    pub(crate) fn from_small(val: u32) -> BigInteger {
        BigInteger { blocks: vec![val] }
    }

    fn value_of(val: u128) -> BigInteger {
        if val <= MAX_CONSTANT as u128 {
            return POS_CACHE[val as usize].clone();
        }
        let base = BLOCK_BASE as u128;
        let mut blocks = Vec::with_capacity(10);
        let mut rest = val;
        while rest > 0 {
            blocks.push((rest % base) as u32);
            rest /= base;
        }
        BigInteger { blocks }
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        BigInteger::from_small(0)
    }
}

// 实现打印
impl Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the top block carries no leading zeros, the rest are padded to BLOCK_SIZE
        let mut blocks = self.blocks.iter().rev();
        if let Some(top) = blocks.next() {
            write!(f, "{}", top)?;
        }
        for block in blocks {
            write!(f, "{:0width$}", block, width = BLOCK_SIZE)?;
        }
        Ok(())
    }
}

impl Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger(\"{}\")", self)
    }
}

// 实现解析
impl BigInteger {
    /// Parses decimal digits, most significant first. No sign, separators or
    /// whitespace are accepted; the empty string is zero.
    pub fn parse(val: &str) -> Result<BigInteger> {
        if let Some((position, found)) = val.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            debug!("malformed input {:?}: {:?} at byte {}", val, found, position);
            return Err(BigIntegerError::MalformedInput { position, found });
        }

        let mut blocks: Vec<u32> = Vec::with_capacity(val.len() / BLOCK_SIZE + 1);
        blocks.push(0);
        for digit in val.bytes().map(|b| (b - b'0') as u32) {
            BigInteger::shift_in_digit(&mut blocks, digit)?;
        }
        Ok(BigInteger { blocks })
    }

    // value = value * 10 + digit
    // 145321234: [1234, 4532, 1] -> [1234, 4532, 10] -> [1234, 5320, 14] -> [2340, 5321, 14]
    #[inline(always)]
    fn shift_in_digit(blocks: &mut Vec<u32>, digit: u32) -> Result<()> {
        let top = blocks.len();
        blocks.push(0);
        // top-down, so blocks[i + 1] is already shifted when it takes the carry of blocks[i]
        for i in (0..top).rev() {
            let shifted = blocks[i] * DIGIT_RADIX;
            blocks[i + 1] += shifted / BLOCK_BASE;
            blocks[i] = shifted % BLOCK_BASE;
        }
        blocks[0] += digit;

        if blocks[top] == 0 {
            blocks.pop();
        } else if blocks.len() > BLOCKS_COUNT {
            return Err(BigInteger::capacity_exceeded(blocks.len()));
        }
        Ok(())
    }
}

impl FromStr for BigInteger {
    type Err = BigIntegerError;

    fn from_str(s: &str) -> Result<Self> {
        BigInteger::parse(s)
    }
}

impl TryFrom<&str> for BigInteger {
    type Error = BigIntegerError;

    fn try_from(val: &str) -> Result<Self> {
        BigInteger::parse(val)
    }
}

impl TryFrom<String> for BigInteger {
    type Error = BigIntegerError;

    fn try_from(val: String) -> Result<Self> {
        BigInteger::parse(&val)
    }
}

macro_rules! impl_unsigned_to_big_integer {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInteger {
        fn from(val: $u) -> Self {
            BigInteger::value_of(val as u128)
        }
    }
    )*
    };
}
impl_unsigned_to_big_integer!(u8, u16, u32, u64, usize, u128);

impl TryFrom<&BigInteger> for u64 {
    type Error = BigIntegerError;

    fn try_from(val: &BigInteger) -> Result<Self> {
        val.blocks
            .iter()
            .rev()
            .try_fold(0u64, |acc, &block| {
                acc.checked_mul(BLOCK_BASE as u64)?.checked_add(block as u64)
            })
            .ok_or_else(|| BigIntegerError::DoesNotFit { digits: val.digit_count() })
    }
}

// 实现大小比较
impl BigInteger {
    fn compare_blocks(&self, other: &BigInteger) -> Ordering {
        // no high zero blocks, so more blocks means a larger value
        match self.filled_blocks().cmp(&other.filled_blocks()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.blocks.iter().rev().zip(other.blocks.iter().rev()) {
            if a != b {
                return a.cmp(b);
            }
        }
        Ordering::Equal
    }

    pub fn greater_than(&self, other: &BigInteger) -> bool {
        self.compare_blocks(other) == Ordering::Greater
    }

    pub fn greater_or_equal(&self, other: &BigInteger) -> bool {
        self == other || self.greater_than(other)
    }

    pub fn less_than(&self, other: &BigInteger) -> bool {
        !self.greater_or_equal(other)
    }

    pub fn less_or_equal(&self, other: &BigInteger) -> bool {
        !self.greater_than(other)
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.filled_blocks() == other.filled_blocks()
            && self.blocks.iter().zip(other.blocks.iter()).all(|(a, b)| a == b)
    }
}
impl Eq for BigInteger {}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.blocks.hash(state);
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_blocks(other)
    }
}

// 实现加法
impl BigInteger {
    pub fn checked_add(&self, other: &BigInteger) -> Result<BigInteger> {
        let result_size = max(self.filled_blocks(), other.filled_blocks());
        let mut blocks = Vec::with_capacity(result_size + 1);
        let mut carry = 0;
        for i in 0..result_size {
            let sum = self.block(i) + other.block(i) + carry;
            blocks.push(sum % BLOCK_BASE);
            carry = sum / BLOCK_BASE;
        }
        if carry > 0 {
            blocks.push(carry);
        }
        BigInteger::finish(blocks)
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(rhs) {
            Ok(sum) => sum,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Add for BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sum for BigInteger {
    fn sum<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| &acc + &x)
    }
}

impl<'a> Sum<&'a BigInteger> for BigInteger {
    fn sum<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::zero(), |acc, x| &acc + x)
    }
}

// 实现乘法
impl BigInteger {
    pub fn checked_mul(&self, other: &BigInteger) -> Result<BigInteger> {
        if self.is_zero() || other.is_zero() {
            return Ok(BigInteger::zero());
        }

        let x_len = self.filled_blocks();
        let y_len = other.filled_blocks();

        if y_len == 1 {
            trace!("scalar multiply: {} blocks by {}", x_len, other.blocks[0]);
            return self.mul_block(other.blocks[0]);
        }
        if x_len == 1 {
            trace!("scalar multiply: {} blocks by {}", y_len, self.blocks[0]);
            return other.mul_block(self.blocks[0]);
        }

        // the product has at least x_len + y_len - 1 blocks
        if x_len + y_len - 1 > BLOCKS_COUNT {
            return Err(BigInteger::capacity_exceeded(x_len + y_len - 1));
        }
        trace!("schoolbook multiply: {} blocks by {} blocks", x_len, y_len);
        BigInteger::normalize(self.mul_schoolbook(other))
    }

    /// Multiplies by a single block value below `BLOCK_BASE`.
    pub fn mul_block(&self, block: u32) -> Result<BigInteger> {
        if block >= BLOCK_BASE {
            return Err(BigIntegerError::InvalidBlock { index: 0, value: block });
        }
        let mut slots: Vec<u64> = Vec::with_capacity(self.filled_blocks() + 1);
        let mut carry = 0;
        for &x in &self.blocks {
            // 9999 * 9999 + 9999 < u32::MAX
            let product = x * block + carry;
            slots.push((product % BLOCK_BASE) as u64);
            carry = product / BLOCK_BASE;
        }
        slots.push(carry as u64);
        BigInteger::normalize(slots)
    }

    // Accumulates every partial product in place; slots may exceed BLOCK_BASE
    // until normalized.
    fn mul_schoolbook(&self, other: &BigInteger) -> Vec<u64> {
        let mut slots = vec![0u64; self.filled_blocks() + other.filled_blocks()];
        for (i, &x) in self.blocks.iter().enumerate() {
            for (j, &y) in other.blocks.iter().enumerate() {
                slots[i + j] += x as u64 * y as u64;
            }
        }
        slots
    }

    /// Sifts the excess of every slot into the next one, growing while a carry
    /// remains, so that all blocks are below `BLOCK_BASE`.
    fn normalize(mut slots: Vec<u64>) -> Result<BigInteger> {
        let base = BLOCK_BASE as u64;
        let mut i = 0;
        while i < slots.len() {
            let excess = slots[i] / base;
            if excess > 0 {
                slots[i] %= base;
                if i + 1 == slots.len() {
                    slots.push(excess);
                } else {
                    slots[i + 1] += excess;
                }
            }
            i += 1;
        }
        BigInteger::finish(slots.into_iter().map(|s| s as u32).collect())
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        match self.checked_mul(rhs) {
            Ok(product) => product,
            Err(err) => panic!("{}", err),
        }
    }
}

impl Mul for BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Product for BigInteger {
    fn product<I: Iterator<Item = BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| &acc * &x)
    }
}

impl<'a> Product<&'a BigInteger> for BigInteger {
    fn product<I: Iterator<Item = &'a BigInteger>>(iter: I) -> Self {
        iter.fold(BigInteger::one(), |acc, x| &acc * x)
    }
}

#[cfg(test)]
fn assert_invariants(n: &BigInteger) {
    assert!(!n.blocks.is_empty());
    assert!(n.blocks.iter().all(|b| *b < BLOCK_BASE), "{:?}", n.blocks);
    assert!(n.blocks.len() == 1 || *n.blocks.last().unwrap() != 0, "{:?}", n.blocks);
    assert!(n.blocks.len() <= BLOCKS_COUNT);
}

#[test]
fn test_parse_blocks() {
    let a = BigInteger::parse("145321234").unwrap();
    assert_eq!(a.blocks, vec![1234, 4532, 1]);

    let a = BigInteger::parse("12143424123467182634612354757").unwrap();
    assert_eq!(a.blocks, vec![4757, 1235, 6346, 7182, 2346, 4241, 2143, 1]);

    let a = BigInteger::parse("10000").unwrap();
    assert_eq!(a.blocks, vec![0, 1]);
    assert_invariants(&a);
}

#[test]
fn test_parse_zero() {
    for s in ["", "0", "0000", "000000000"] {
        let a = BigInteger::parse(s).unwrap();
        assert_eq!(a.blocks, vec![0]);
        assert_eq!(a.filled_blocks(), 1);
        assert!(a.is_zero());
    }
    let a = BigInteger::parse("000000000123").unwrap();
    assert_eq!(a.blocks, vec![123]);
}

#[test]
fn test_parse_malformed() {
    assert_eq!(
        BigInteger::parse("12a4"),
        Err(BigIntegerError::MalformedInput { position: 2, found: 'a' })
    );
    assert_eq!(
        BigInteger::parse("-1"),
        Err(BigIntegerError::MalformedInput { position: 0, found: '-' })
    );
    assert_eq!(
        BigInteger::parse("+1"),
        Err(BigIntegerError::MalformedInput { position: 0, found: '+' })
    );
    assert_eq!(
        BigInteger::parse(" 1"),
        Err(BigIntegerError::MalformedInput { position: 0, found: ' ' })
    );
    assert_eq!(
        BigInteger::parse("1_000"),
        Err(BigIntegerError::MalformedInput { position: 1, found: '_' })
    );
    assert_eq!(
        BigInteger::parse("12\n"),
        Err(BigIntegerError::MalformedInput { position: 2, found: '\n' })
    );
    assert!(matches!(BigInteger::parse("１２"), Err(BigIntegerError::MalformedInput { position: 0, .. })));
}

#[test]
fn test_parse_capacity() {
    let nines = "9".repeat(MAX_DIGITS);
    let a = BigInteger::parse(&nines).unwrap();
    assert_eq!(a.filled_blocks(), BLOCKS_COUNT);
    assert_eq!(a.to_string(), nines);

    let too_long = "1".repeat(MAX_DIGITS + 1);
    assert_eq!(
        BigInteger::parse(&too_long),
        Err(BigIntegerError::CapacityExceeded { required: BLOCKS_COUNT + 1, limit: BLOCKS_COUNT })
    );

    // leading zeros are not significant
    let padded = format!("{}{}", "0".repeat(MAX_DIGITS), "42");
    assert_eq!(BigInteger::parse(&padded).unwrap(), BigInteger::from(42u32));
}

#[test]
fn test_shift_in_digit_matches_mul_add() {
    let inputs = [
        "9999",
        "99999999",
        "100000000000",
        "1234567890123456789",
        "90000000000000000000000000000009",
    ];
    for s in inputs {
        let mut composed = BigInteger::zero();
        for c in s.chars() {
            let digit = BigInteger::from(c.to_digit(10).unwrap());
            composed = composed.mul_block(DIGIT_RADIX).unwrap().checked_add(&digit).unwrap();
            assert_invariants(&composed);
        }
        assert_eq!(BigInteger::parse(s).unwrap(), composed);
    }
}

#[test]
fn test_from() {
    assert_eq!(BigInteger::from(0u8).blocks, vec![0]);
    assert_eq!(BigInteger::from(16u16).blocks, vec![16]);
    assert_eq!(BigInteger::from(10000u32).blocks, vec![0, 1]);
    assert_eq!(BigInteger::from(1267578512346u64).to_string(), "1267578512346");
    assert_eq!(BigInteger::from(u64::MAX).to_string(), u64::MAX.to_string());
    assert_eq!(BigInteger::from(u128::MAX).to_string(), u128::MAX.to_string());
    assert_eq!(BigInteger::from(usize::MAX).to_string(), usize::MAX.to_string());
}

#[test]
fn test_from_blocks() {
    let a = BigInteger::from_blocks(vec![1234, 4532, 1, 0, 0]).unwrap();
    assert_eq!(a.blocks, vec![1234, 4532, 1]);
    assert_eq!(BigInteger::from_blocks(vec![]).unwrap(), BigInteger::zero());
    assert_eq!(
        BigInteger::from_blocks(vec![1, 10000]),
        Err(BigIntegerError::InvalidBlock { index: 1, value: 10000 })
    );
    assert_eq!(
        BigInteger::from_blocks(vec![1; BLOCKS_COUNT + 1]),
        Err(BigIntegerError::CapacityExceeded { required: BLOCKS_COUNT + 1, limit: BLOCKS_COUNT })
    );
}

#[test]
fn test_to_u64() {
    let a: BigInteger = "123456789110".parse().unwrap();
    assert_eq!(u64::try_from(&a), Ok(123456789110));
    let max: BigInteger = u64::MAX.into();
    assert_eq!(u64::try_from(&max), Ok(u64::MAX));
    let over = &max + &BigInteger::one();
    assert_eq!(u64::try_from(&over), Err(BigIntegerError::DoesNotFit { digits: 20 }));
}

#[test]
fn test_to_string() {
    assert_eq!(BigInteger::parse("0").unwrap().to_string(), "0");
    assert_eq!(BigInteger::parse("10000001").unwrap().to_string(), "10000001");
    assert_eq!(BigInteger::parse("100000000").unwrap().to_string(), "100000000");
    assert_eq!(BigInteger::parse("00120").unwrap().to_string(), "120");
    assert_eq!(format!("{:?}", BigInteger::parse("12345").unwrap()), "BigInteger(\"12345\")");
    assert_eq!(format!("{:?}", BigInteger::zero()), "BigInteger(\"0\")");
    // inner blocks keep their zero padding
    assert_eq!(BigInteger::from_blocks(vec![7, 0, 45]).unwrap().to_string(), "4500000007");
    assert_eq!(BigInteger::from_blocks(vec![0, 0, 1]).unwrap().to_string(), "100000000");
}

#[test]
fn test_digit_count() {
    assert_eq!(BigInteger::zero().digit_count(), 1);
    assert_eq!(BigInteger::from(9999u32).digit_count(), 4);
    assert_eq!(BigInteger::from(10000u32).digit_count(), 5);
    assert_eq!(BigInteger::parse("1231238479").unwrap().digit_count(), 10);
}

#[test]
fn test_add() {
    let a: BigInteger = "7123687".parse().unwrap();
    let b: BigInteger = "8293843".parse().unwrap();
    let c = &a + &b;
    assert_eq!(c.to_string(), "15417530");
    assert_invariants(&c);

    // carry grows the result by one block
    let a: BigInteger = "99999999".parse().unwrap();
    let c = &a + &BigInteger::one();
    assert_eq!(c.blocks, vec![0, 0, 1]);

    // operands of different lengths
    let a: BigInteger = "123456789012345678".parse().unwrap();
    let b: BigInteger = "99".parse().unwrap();
    assert_eq!((&a + &b).to_string(), "123456789012345777");
    assert_eq!((&b + &a).to_string(), "123456789012345777");

    assert_eq!(BigInteger::zero() + BigInteger::zero(), BigInteger::zero());
}

#[test]
fn test_add_capacity() {
    let max: BigInteger = "9".repeat(MAX_DIGITS).parse().unwrap();
    assert_eq!(
        max.checked_add(&BigInteger::one()),
        Err(BigIntegerError::CapacityExceeded { required: BLOCKS_COUNT + 1, limit: BLOCKS_COUNT })
    );
    assert_eq!(max.checked_add(&BigInteger::zero()), Ok(max.clone()));
}

#[test]
#[should_panic(expected = "capacity exceeded")]
fn test_add_operator_panics_on_capacity() {
    let max: BigInteger = "9".repeat(MAX_DIGITS).parse().unwrap();
    let _ = max + BigInteger::one();
}

#[test]
fn test_mul_block() {
    let a: BigInteger = "1111111".parse().unwrap();
    let b: BigInteger = "1000".parse().unwrap();
    let c = &a * &b;
    assert_eq!(c, "1111111000".parse::<BigInteger>().unwrap());
    assert_invariants(&c);

    let a: BigInteger = "99999999".parse().unwrap();
    let c = a.mul_block(9999).unwrap();
    assert_eq!(c.to_string(), "999899990001");
    assert_invariants(&c);

    assert_eq!(
        a.mul_block(BLOCK_BASE),
        Err(BigIntegerError::InvalidBlock { index: 0, value: BLOCK_BASE })
    );
    assert_eq!(a.mul_block(0).unwrap(), BigInteger::zero());
}

#[test]
fn test_mul_single_block_left_operand() {
    let a: BigInteger = "7".parse().unwrap();
    let b: BigInteger = "123456789".parse().unwrap();
    assert_eq!((&a * &b).to_string(), "864197523");
    assert_eq!((&b * &a).to_string(), "864197523");
}

#[test]
fn test_mul_schoolbook() {
    let a: BigInteger = "1111111".parse().unwrap();
    let b: BigInteger = "1000000".parse().unwrap();
    assert_eq!(&a * &b, "1111111000000".parse::<BigInteger>().unwrap());

    // every slot accumulates several near-maximal partial products
    let a: BigInteger = "9".repeat(40).parse().unwrap();
    let c = &a * &a;
    let expected = format!("{}8{}1", "9".repeat(39), "0".repeat(39));
    assert_eq!(c.to_string(), expected);
    assert_invariants(&c);
}

#[test]
fn test_normalize() {
    let n = BigInteger::normalize(vec![25_000, 19_999, 0]).unwrap();
    assert_eq!(n.blocks, vec![5000, 1, 2]);
    let n = BigInteger::normalize(vec![99_980_001, 0]).unwrap();
    assert_eq!(n.blocks, vec![1, 9998]);
    let n = BigInteger::normalize(vec![0, 0, 0]).unwrap();
    assert_eq!(n.blocks, vec![0]);
    let n = BigInteger::normalize(vec![123_456_789_012]).unwrap();
    assert_eq!(n.blocks, vec![9012, 5678, 1234]);
}

#[test]
fn test_mul_capacity() {
    let half: BigInteger = format!("1{}", "0".repeat(MAX_DIGITS / 2 - 1)).parse().unwrap();
    let c = half.checked_mul(&half).unwrap();
    assert_eq!(c.filled_blocks(), BLOCKS_COUNT);
    assert_eq!(c.digit_count(), MAX_DIGITS - 1);

    let over: BigInteger = format!("1{}", "0".repeat(MAX_DIGITS / 2)).parse().unwrap();
    assert!(matches!(
        over.checked_mul(&over),
        Err(BigIntegerError::CapacityExceeded { limit: BLOCKS_COUNT, .. })
    ));

    let max: BigInteger = "9".repeat(MAX_DIGITS).parse().unwrap();
    assert!(max.checked_mul(&BigInteger::from(2u32)).is_err());
    assert_eq!(max.checked_mul(&BigInteger::zero()), Ok(BigInteger::zero()));
}

#[test]
fn test_mul_schoolbook_capacity_after_carry() {
    // 500 blocks squared: the top carry stays inside the limit
    let a: BigInteger = "9".repeat(MAX_DIGITS / 2).parse().unwrap();
    let c = a.checked_mul(&a).unwrap();
    assert_eq!(c.filled_blocks(), BLOCKS_COUNT);
    assert_invariants(&c);

    // 500 by 501 blocks passes the early bound, the final carry needs one more block
    let b: BigInteger = "9".repeat(MAX_DIGITS / 2 + BLOCK_SIZE).parse().unwrap();
    assert_eq!(a.filled_blocks() + b.filled_blocks() - 1, BLOCKS_COUNT);
    assert_eq!(
        a.checked_mul(&b),
        Err(BigIntegerError::CapacityExceeded { required: BLOCKS_COUNT + 1, limit: BLOCKS_COUNT })
    );
    assert_eq!(
        b.checked_mul(&a),
        Err(BigIntegerError::CapacityExceeded { required: BLOCKS_COUNT + 1, limit: BLOCKS_COUNT })
    );
}

#[test]
fn test_zero_constructors_agree() {
    assert_eq!(BigInteger::zero(), BigInteger::default());
    assert_eq!(BigInteger::zero(), BigInteger::from(0u8));
    assert_eq!(BigInteger::zero().blocks, vec![0]);
    assert_eq!(BigInteger::zero().digit_count(), 1);
}

#[test]
fn test_compare() {
    let a: BigInteger = "123456".parse().unwrap();
    let b: BigInteger = "123456".parse().unwrap();
    assert_eq!(a, b);
    assert!(a.greater_or_equal(&b));
    assert!(a.less_or_equal(&b));
    assert!(!a.greater_than(&b));

    let a: BigInteger = "1231238479".parse().unwrap();
    let b: BigInteger = "1231487279".parse().unwrap();
    assert!(!a.greater_or_equal(&b));
    assert!(b.greater_than(&a));
    assert!(a.less_than(&b));
    assert!(a < b);
    assert!(b > a);

    // block count decides before block values
    let a: BigInteger = "10000".parse().unwrap();
    let b: BigInteger = "9999".parse().unwrap();
    assert!(a > b);
    assert_eq!(BigInteger::zero().cmp(&BigInteger::zero()), Ordering::Equal);
}

#[test]
fn test_sum_product() {
    let factorial: BigInteger = (1..=25u32).map(BigInteger::from).product();
    assert_eq!(factorial.to_string(), "15511210043330985984000000");
    let total: BigInteger = (1..=100u32).map(BigInteger::from).sum();
    assert_eq!(total, BigInteger::from(5050u32));
    let empty: Vec<BigInteger> = vec![];
    assert_eq!(empty.iter().product::<BigInteger>(), BigInteger::one());
    assert_eq!(empty.iter().sum::<BigInteger>(), BigInteger::zero());
}
