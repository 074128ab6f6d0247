extern crate num_traits;

use std::ops::{AddAssign, Deref};

use num_traits::Unsigned;
use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.increment_by(T::one());
    }

    #[inline]
    pub fn increment_by(&mut self, count: T) {
        self.0 += count;
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AddAssign for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

#[cfg(test)]
mod tests {
    use super::Counter;

    #[test]
    fn test_counter_increment() {
        let mut counter = Counter::<u64>::default();
        counter.increment();
        counter.increment_by(4);
        assert_eq!(counter.get(), 5);
    }

    #[test]
    fn test_counter_add_assign() {
        let mut left = Counter::new(2u32);
        left += Counter::new(3);
        assert_eq!(*left, 5);
    }
}
