use dec_big_num::{BigInteger, BigIntegerError, BLOCKS_COUNT, BLOCK_BASE, MAX_DIGITS};

fn big(s: &str) -> BigInteger {
    s.parse().unwrap()
}

#[test]
fn test_sum() {
    let a = big("7123687");
    let b = big("8293843");
    assert_eq!(&a + &b, big("15417530"));
    assert_eq!((&a + &b).to_string(), "15417530");
    // operands are left untouched
    assert_eq!(a.to_string(), "7123687");
    assert_eq!(b.to_string(), "8293843");
}

#[test]
fn test_mul_by_block() {
    let a = big("1111111");
    let b = big("1000");
    assert_eq!(b.filled_blocks(), 1);
    assert_eq!(&a * &b, big("1111111000"));
}

#[test]
fn test_mul_by_big_integer() {
    let a = big("1111111");
    let b = big("1000000");
    assert_eq!(b.filled_blocks(), 2);
    assert_eq!(&a * &b, big("1111111000000"));
}

#[test]
fn test_equal() {
    let a = big("123456");
    let b = big("123456");
    assert_eq!(a, b);
    assert!(a >= b);
    assert!(a <= b);
    assert!(a.greater_or_equal(&b));
}

#[test]
fn test_ordering() {
    let a = big("1231238479");
    let b = big("1231487279");
    assert!(!(a >= b));
    assert!(b > a);
    assert!(a < b);
    assert!(a <= b);
    assert!(b.greater_than(&a));
    assert!(!a.greater_than(&b));
}

#[test]
fn test_zero() {
    assert_eq!(big("0").to_string(), "0");
    assert_eq!(big("").to_string(), "0");
    assert_eq!(BigInteger::default(), BigInteger::zero());
    assert_eq!(BigInteger::from(0u64), BigInteger::zero());
}

#[test]
fn test_from_machine_integer() {
    let a = BigInteger::from(1267578512346u64);
    assert_eq!(a, big("1267578512346"));
    assert_eq!(format!("{:?}", a), "BigInteger(\"1267578512346\")");
}

#[test]
fn test_errors() {
    assert_eq!(
        "12 34".parse::<BigInteger>(),
        Err(BigIntegerError::MalformedInput { position: 2, found: ' ' })
    );
    assert_eq!(
        BigInteger::try_from("-5"),
        Err(BigIntegerError::MalformedInput { position: 0, found: '-' })
    );
    let err = BigInteger::try_from("9".repeat(MAX_DIGITS + 4)).unwrap_err();
    assert!(matches!(err, BigIntegerError::CapacityExceeded { limit: BLOCKS_COUNT, .. }));
    assert!(err.to_string().starts_with("capacity exceeded"));
}

#[test]
fn test_factorial_and_fibonacci() {
    let factorial: BigInteger = (1..=100u32).map(BigInteger::from).product();
    assert_eq!(
        factorial.to_string(),
        concat!(
            "93326215443944152681699238856266700490715968264381621468592963895217599993229915",
            "608941463976156518286253697920827223758251185210916864000000000000000000000000"
        )
    );

    let (mut a, mut b) = (BigInteger::zero(), BigInteger::one());
    for _ in 0..200 {
        let next = &a + &b;
        a = b;
        b = next;
    }
    assert_eq!(a.to_string(), "280571172992510140037611932413038677189525");
    assert!(a.blocks().iter().all(|block| *block < BLOCK_BASE));
}
