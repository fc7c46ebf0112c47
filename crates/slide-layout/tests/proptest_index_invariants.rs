//! Property-based invariant tests for the index model.
//!
//! 1. For every `n >= 1` and `index < n`, neighbours follow the boundary rule
//! 2. Any `index >= n` is rejected and leaves the navigator unchanged
//! 3. Random prev/next walks never leave `[0, n-1]`

use proptest::prelude::*;
use slide_layout::{IndexNavigator, IndexState, NavigationError};

fn len_and_index() -> impl Strategy<Value = (usize, usize)> {
    (1usize..64).prop_flat_map(|n| (Just(n), 0..n))
}

proptest! {
    #[test]
    fn neighbours_follow_boundaries((n, index) in len_and_index()) {
        let mut nav = IndexNavigator::new();
        let s = nav.set_active(index, n).unwrap();
        prop_assert_eq!(s.active, index);
        prop_assert_eq!(s.prev, if index > 0 { Some(index - 1) } else { None });
        prop_assert_eq!(s.next, if index < n - 1 { Some(index + 1) } else { None });
        prop_assert_eq!(nav.state(), Some(s));
    }

    #[test]
    fn out_of_range_rejected((n, start) in len_and_index(), over in 0usize..16) {
        let mut nav = IndexNavigator::new();
        nav.set_active(start, n).unwrap();
        let bad = n + over;
        prop_assert_eq!(
            nav.set_active(bad, n),
            Err(NavigationError::OutOfRange { index: bad, len: n })
        );
        prop_assert_eq!(nav.active(), Some(start));
    }

    #[test]
    fn walks_stay_in_bounds((n, start) in len_and_index(), steps in prop::collection::vec(any::<bool>(), 0..128)) {
        let mut nav = IndexNavigator::new();
        nav.set_active(start, n).unwrap();
        for forward in steps {
            let before = nav.active().unwrap();
            let moved = if forward { nav.go_next() } else { nav.go_prev() };
            let after = nav.active().unwrap();
            prop_assert!(after < n);
            match moved {
                Some(i) => {
                    prop_assert_eq!(i, after);
                    prop_assert_eq!(after.abs_diff(before), 1);
                }
                None => prop_assert_eq!(after, before),
            }
            prop_assert_eq!(nav.state(), Some(IndexState::for_index(after, n).unwrap()));
        }
    }
}
