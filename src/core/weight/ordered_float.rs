use std::cmp::Ordering;

/// Float wrapper ordered by [`total_cmp`](f64::total_cmp).
#[derive(Debug, Default, Clone, Copy)]
pub struct OrderedFloat<T>(T);

macro_rules! impl_float {
    ($ty:ty) => {
        impl Ord for OrderedFloat<$ty> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl PartialOrd for OrderedFloat<$ty> {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl PartialEq for OrderedFloat<$ty> {
            fn eq(&self, other: &Self) -> bool {
                self.cmp(other) == Ordering::Equal
            }
        }

        impl Eq for OrderedFloat<$ty> {}

        impl From<$ty> for OrderedFloat<$ty> {
            fn from(value: $ty) -> Self {
                Self(value)
            }
        }

        impl From<OrderedFloat<$ty>> for $ty {
            fn from(value: OrderedFloat<$ty>) -> Self {
                value.0
            }
        }
    };
}

impl_float!(f32);
impl_float!(f64);
