use std::ops::Add;

mod ordered_float;

pub use ordered_float::OrderedFloat;

/// Cost of traversing an edge or of a whole path.
///
/// Implemented for all primitive integer types and for `f32` and `f64`.
pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    /// Totally ordered version of the weight, used for sorting and priority
    /// queues.
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;

    /// Returns `true` if values of this type can never be negative.
    ///
    /// Algorithms use this to skip the negativity checks.
    fn is_unsigned() -> bool;
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(isize, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn is_unsigned() -> bool {
                false
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);
