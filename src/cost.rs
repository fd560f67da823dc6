use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;


/// Edge weight / path cost usable by the shortest path search
/// checked_add returns None when the sum can't be represented:
/// integer overflow, or a float sum that is no longer finite
pub trait Cost: Zero + Ord + Copy + Debug {
    fn checked_add(self, other: Self) -> Option<Self>;
}

macro_rules! integer_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn checked_add(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for OrderedFloat<$t> {
                fn checked_add(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    sum.0.is_finite().then_some(sum)
                }
            }
        )*
    };
}

float_cost!(f32, f64);


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_overflow_is_none() {
        assert_eq!(Cost::checked_add(200u8, 55), Some(255));
        assert_eq!(Cost::checked_add(200u8, 100), None);
        assert_eq!(Cost::checked_add(i32::MAX, 1), None);
    }

    #[test]
    fn test_float_sum_must_stay_finite() {
        let big = OrderedFloat(f64::MAX);

        assert_eq!(Cost::checked_add(OrderedFloat(0.5f64), OrderedFloat(0.25)), Some(OrderedFloat(0.75)));
        assert_eq!(Cost::checked_add(big, big), None);
        assert_eq!(Cost::checked_add(OrderedFloat(1.0f32), OrderedFloat(f32::INFINITY)), None);
    }
}
