//! Validates the seeded selection primitives

use risoscatter::compose::selection::{RandomSelector, SelectionMask};

#[test]
fn test_mask_tracks_occupancy() {
    let mut mask = SelectionMask::new(10);
    assert!(mask.insert(3));
    assert!(mask.insert(7));

    assert!(mask.contains(3));
    assert!(!mask.contains(4));
    assert_eq!(mask.count(), 2);
}

#[test]
fn test_mask_rejects_duplicates_and_out_of_range() {
    let mut mask = SelectionMask::new(5);
    assert!(mask.insert(2));
    assert!(!mask.insert(2), "Second insert of the same index fails");
    assert!(!mask.insert(5), "Index at capacity is out of range");
    assert_eq!(mask.count(), 1);
}

#[test]
fn test_distinct_indices_are_distinct_and_in_range() {
    let mut selector = RandomSelector::new(7);

    for _ in 0..50 {
        let Ok(drawn) = selector.distinct_indices(11, 4) else {
            unreachable!("pool of 11 satisfies a draw of 4")
        };
        assert_eq!(drawn.len(), 4);
        for (position, index) in drawn.iter().enumerate() {
            assert!(*index < 11, "Index within the pool");
            assert!(
                !drawn.get(..position).is_some_and(|prior| prior.contains(index)),
                "Indices are pairwise distinct"
            );
        }
    }
}

#[test]
fn test_distinct_indices_exhausting_the_pool_is_a_permutation() {
    let mut selector = RandomSelector::new(21);

    let Ok(mut drawn) = selector.distinct_indices(6, 6) else {
        unreachable!("a full-pool draw is satisfiable")
    };
    drawn.sort_unstable();
    assert_eq!(drawn, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_distinct_indices_rejects_oversized_draws() {
    let mut selector = RandomSelector::new(0);
    assert!(
        selector.distinct_indices(3, 4).is_err(),
        "Cannot draw 4 distinct indices from a pool of 3"
    );
}

#[test]
fn test_shuffle_preserves_elements() {
    let mut selector = RandomSelector::new(13);
    let mut items = [10, 20, 30, 40, 50];

    selector.shuffle(&mut items);

    let mut sorted = items;
    sorted.sort_unstable();
    assert_eq!(sorted, [10, 20, 30, 40, 50]);
}

#[test]
fn test_same_seed_reproduces_the_stream() {
    let mut first = RandomSelector::new(99);
    let mut second = RandomSelector::new(99);

    for _ in 0..20 {
        assert_eq!(first.index(1000), second.index(1000));
    }
}

#[test]
fn test_pick_from_empty_slice_is_none() {
    let mut selector = RandomSelector::new(1);
    let empty: [u8; 0] = [];
    assert!(selector.pick(&empty).is_none());
}

#[test]
fn test_pick_returns_a_member() {
    let mut selector = RandomSelector::new(5);
    let items = ['a', 'b', 'c'];

    for _ in 0..20 {
        assert!(
            selector.pick(&items).is_some_and(|c| items.contains(c)),
            "Picked element comes from the slice"
        );
    }
}
