//! Monotonic id allocation for synthetic stores, regions and peers.

/// Issues strictly increasing ids within one scenario.
///
/// The watermark starts at 0 and is incremented before each id is handed
/// out, so the first id is 1. Every scenario build owns its own allocator;
/// `next_id` takes `&mut self`, so one instance cannot be driven from two
/// threads without external synchronization.
#[derive(Debug, Default)]
pub struct IdAllocator {
    max_id: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next id, advancing the watermark by one.
    pub fn next_id(&mut self) -> u64 {
        self.max_id += 1;
        self.max_id
    }

    /// Returns the highest id issued so far (0 if none).
    pub fn max_id(&self) -> u64 {
        self.max_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_id_is_one() {
        let mut ids = IdAllocator::new();
        assert_eq!(ids.max_id(), 0);
        assert_eq!(ids.next_id(), 1);
        assert_eq!(ids.max_id(), 1);
    }

    #[test]
    fn allocators_are_independent() {
        let mut a = IdAllocator::new();
        let mut b = IdAllocator::new();

        assert_eq!(a.next_id(), 1);
        assert_eq!(a.next_id(), 2);
        assert_eq!(b.next_id(), 1);
        assert_eq!(a.next_id(), 3);
        assert_eq!(b.next_id(), 2);
    }

    proptest! {
        /// The nth call returns exactly n
        #[test]
        fn nth_call_returns_n(n in 1usize..5_000) {
            let mut ids = IdAllocator::new();
            let issued: Vec<u64> = (0..n).map(|_| ids.next_id()).collect();

            for (i, id) in issued.iter().enumerate() {
                prop_assert_eq!(*id, i as u64 + 1);
            }
            prop_assert!(issued.windows(2).all(|w| w[1] > w[0]));
            prop_assert_eq!(ids.max_id(), n as u64);
        }
    }
}
