use lazy_static::*;

use crate::BigInteger;
use crate::constants::MAX_CONSTANT;

lazy_static! {
    pub static ref POS_CACHE: [BigInteger; MAX_CONSTANT + 1] = {
        let mut cache: [BigInteger; MAX_CONSTANT + 1] = Default::default();
        for (val, slot) in cache.iter_mut().enumerate() {
            *slot = BigInteger::from_small(val as u32);
        }
        cache
    };
}
