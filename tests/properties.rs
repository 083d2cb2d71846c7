use dec_big_num::{BigInteger, BLOCK_BASE};
use num_bigint::BigUint;
use proptest::prelude::*;

/// Canonical decimal strings of up to 120 digits, biased towards block boundaries.
fn decimal() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("0".to_string()),
        "[1-9][0-9]{0,7}",
        "[1-9][0-9]{0,119}",
        "9{1,40}",
        "10{0,40}",
    ]
}

fn reference(s: &str) -> BigUint {
    s.parse().unwrap()
}

fn check_invariants(n: &BigInteger) -> Result<(), TestCaseError> {
    let blocks = n.blocks();
    prop_assert_eq!(blocks.len(), n.filled_blocks());
    prop_assert!(n.filled_blocks() >= 1);
    prop_assert!(blocks.iter().all(|b| *b < BLOCK_BASE), "{:?}", blocks);
    prop_assert!(blocks.len() == 1 || blocks[blocks.len() - 1] != 0, "{:?}", blocks);
    Ok(())
}

proptest! {
    #[test]
    fn prop_round_trip(s in decimal()) {
        let n: BigInteger = s.parse().unwrap();
        check_invariants(&n)?;
        prop_assert_eq!(n.to_string(), s.clone());
        prop_assert_eq!(n.digit_count(), s.len());
    }

    #[test]
    fn prop_leading_zeros(zeros in 0usize..12, s in decimal()) {
        let padded = format!("{}{}", "0".repeat(zeros), s);
        let n: BigInteger = padded.parse().unwrap();
        check_invariants(&n)?;
        prop_assert_eq!(n, s.parse::<BigInteger>().unwrap());
    }

    #[test]
    fn prop_add_matches_reference(a in decimal(), b in decimal()) {
        let x: BigInteger = a.parse().unwrap();
        let y: BigInteger = b.parse().unwrap();
        let sum = &x + &y;
        check_invariants(&sum)?;
        prop_assert_eq!(sum.to_string(), (reference(&a) + reference(&b)).to_string());
        prop_assert_eq!(&y + &x, sum);
    }

    #[test]
    fn prop_add_associative(a in decimal(), b in decimal(), c in decimal()) {
        let x: BigInteger = a.parse().unwrap();
        let y: BigInteger = b.parse().unwrap();
        let z: BigInteger = c.parse().unwrap();
        prop_assert_eq!(&(&x + &y) + &z, &x + &(&y + &z));
        prop_assert_eq!(&x + &BigInteger::zero(), x);
    }

    #[test]
    fn prop_mul_matches_reference(a in decimal(), b in decimal()) {
        let x: BigInteger = a.parse().unwrap();
        let y: BigInteger = b.parse().unwrap();
        let product = &x * &y;
        check_invariants(&product)?;
        prop_assert_eq!(product.to_string(), (reference(&a) * reference(&b)).to_string());
        prop_assert_eq!(&y * &x, product);
    }

    #[test]
    fn prop_mul_identities(a in decimal()) {
        let x: BigInteger = a.parse().unwrap();
        prop_assert_eq!(&x * &BigInteger::one(), x.clone());
        prop_assert_eq!(&x * &BigInteger::zero(), BigInteger::zero());
        prop_assert_eq!(&BigInteger::zero() * &x, BigInteger::zero());
    }

    #[test]
    fn prop_mul_block_matches_reference(a in decimal(), block in 0u32..10_000) {
        let x: BigInteger = a.parse().unwrap();
        let product = x.mul_block(block).unwrap();
        check_invariants(&product)?;
        prop_assert_eq!(product.to_string(), (reference(&a) * block).to_string());
    }

    #[test]
    fn prop_ordering_matches_reference(a in decimal(), b in decimal()) {
        let x: BigInteger = a.parse().unwrap();
        let y: BigInteger = b.parse().unwrap();
        let expected = reference(&a).cmp(&reference(&b));
        prop_assert_eq!(x.cmp(&y), expected);
        prop_assert_eq!(x.greater_than(&y), expected.is_gt());
        prop_assert_eq!(x.greater_or_equal(&y), expected.is_ge());
        prop_assert_eq!(x.less_than(&y), expected.is_lt());
        prop_assert_eq!(x.less_or_equal(&y), expected.is_le());
        prop_assert_eq!(x == y, expected.is_eq());
    }

    #[test]
    fn prop_from_u64(n in any::<u64>()) {
        let x = BigInteger::from(n);
        check_invariants(&x)?;
        prop_assert_eq!(x.to_string(), n.to_string());
        prop_assert_eq!(u64::try_from(&x), Ok(n));
    }

    #[test]
    fn prop_rejects_non_digits(prefix in "[0-9]{0,10}", bad in "[^0-9]", suffix in "[0-9]{0,10}") {
        let s = format!("{}{}{}", prefix, bad, suffix);
        prop_assert!(s.parse::<BigInteger>().is_err());
    }
}
