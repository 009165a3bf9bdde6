use core::fmt::Debug;
use core::hash::Hash;

/// A key type that can be stored unboxed in a
/// [`PrimitiveHashMap`](crate::PrimitiveHashMap).
///
/// The zero representation ([`PrimitiveKey::EMPTY`]) doubles as the vacancy
/// marker of regular slots. The map still accepts it as a key: it lives in a
/// dedicated slot past the end of the probe range.
pub trait PrimitiveKey: Copy + Eq + Hash + Debug {
    /// The zero value of the type, marking vacant slots.
    const EMPTY: Self;

    /// Returns `true` if this is the zero key.
    #[inline(always)]
    fn is_empty_key(self) -> bool {
        self == Self::EMPTY
    }
}

macro_rules! impl_primitive_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl PrimitiveKey for $ty {
                const EMPTY: Self = 0;
            }
        )*
    };
}

impl_primitive_key!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl PrimitiveKey for char {
    const EMPTY: Self = '\0';
}
