//! Walks through the public operations of `BigInteger` with literal inputs.
//!
//! Run with `RUST_LOG=dec_big_num=trace cargo run --example showcase` to see
//! which multiplication strategy is picked.

use dec_big_num::BigInteger;

const RULE: &str = "========================================";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let big_num: BigInteger = "0".parse()?;
    println!("{}", big_num);
    println!("{}", RULE);

    // Initialize from string representation
    let big_num: BigInteger = "12143424123467182634612354757".parse()?;
    println!("{:?}", big_num.blocks());
    println!("{}", big_num);
    println!("{}", RULE);

    // Initialize from number
    let big_num = BigInteger::from(1267578512346u64);
    println!("{:?}", big_num.blocks());
    println!("{:?}", big_num);
    println!("{}", RULE);

    // Sum of two numbers
    let a: BigInteger = "7123687".parse()?;
    let b: BigInteger = "8293843".parse()?;
    let sum = a.checked_add(&b)?;
    assert_eq!(sum.to_string(), "15417530", "Sum operation is failed");
    println!("{} + {} = {}", a, b, sum);
    println!("{}", RULE);

    // Comparison of two numbers
    let a: BigInteger = "123456".parse()?;
    let b: BigInteger = "123456".parse()?;
    assert!(a == b);
    assert!(a >= b);
    assert!(a <= b);
    println!("{} == {}", a, b);

    let a: BigInteger = "1231238479".parse()?;
    let b: BigInteger = "1231487279".parse()?;
    assert!(!a.greater_or_equal(&b));
    assert!(b > a);
    assert!(a < b);
    assert!(a <= b);
    println!("{} > {}", b, a);
    println!("{}", RULE);

    // Multiplication by block
    let a: BigInteger = "1111111".parse()?;
    let b: BigInteger = "1000".parse()?;
    let product = a.checked_mul(&b)?;
    assert_eq!(product, "1111111000".parse::<BigInteger>()?);
    println!("{} * {} == {}", a, b, product);
    println!("{}", RULE);

    // Multiplication by BigInteger
    let a: BigInteger = "1111111".parse()?;
    let b: BigInteger = "1000000".parse()?;
    let product = a.checked_mul(&b)?;
    assert_eq!(product, "1111111000000".parse::<BigInteger>()?);
    println!("{} * {} == {}", a, b, product);
    println!("{}", RULE);

    // Running out of blocks is an error, not a wrap-around
    let huge: BigInteger = "9".repeat(dec_big_num::MAX_DIGITS).parse()?;
    match huge.checked_mul(&huge) {
        Ok(_) => unreachable!("product cannot fit"),
        Err(err) => println!("{}", err),
    }
    println!("{}", RULE);

    Ok(())
}
