use super::*;

const INF: usize = Extent::UNBOUNDED;

/// Unit-at-a-time reference for the round-robin rule.
fn distribute_slow(total: usize, reqs: &[Extent]) -> Vec<usize> {
    let mut sizes: Vec<usize> = reqs.iter().map(|r| r.min).collect();
    let mut left = total.saturating_sub(sizes.iter().sum());
    let mut more = true;
    while left > 0 && more {
        more = false;
        for (i, r) in reqs.iter().enumerate() {
            if left == 0 {
                break;
            }
            if sizes[i] >= r.max {
                continue;
            }
            more = true;
            sizes[i] += 1;
            left -= 1;
        }
    }
    sizes
}

#[test]
fn splits_evenly_between_unbounded_participants() {
    let reqs = [Extent::new(0, INF), Extent::new(0, INF)];
    assert_eq!(distribute(10, &reqs), vec![5, 5]);
}

#[test]
fn capped_participant_yields_the_rest() {
    let reqs = [Extent::new(0, 3), Extent::new(0, INF)];
    assert_eq!(distribute(10, &reqs), vec![3, 7]);
}

#[test]
fn minimums_are_kept_when_total_is_short() {
    let reqs = [Extent::fixed(2), Extent::fixed(2), Extent::fixed(2)];
    assert_eq!(distribute(3, &reqs), vec![2, 2, 2]);

    let reqs = [Extent::new(4, 10), Extent::new(1, INF)];
    assert_eq!(distribute(2, &reqs), vec![4, 1]);
}

#[test]
fn odd_remainder_favors_earlier_participants() {
    let reqs = [Extent::at_least(0), Extent::at_least(0), Extent::at_least(0)];
    assert_eq!(distribute(8, &reqs), vec![3, 3, 2]);
}

#[test]
fn leftover_stays_unallocated_when_all_are_full() {
    let reqs = [Extent::new(1, 2), Extent::new(0, 3)];
    assert_eq!(distribute(100, &reqs), vec![2, 3]);
}

#[test]
fn empty_requirement_list_yields_nothing() {
    assert!(distribute(10, &[]).is_empty());
}

#[test]
fn contradictory_bounds_never_grow() {
    let reqs = [Extent::new(5, 2), Extent::new(0, INF)];
    assert_eq!(distribute(10, &reqs), vec![5, 5]);
}

#[test]
fn huge_total_is_split_without_per_unit_work() {
    let reqs = [Extent::at_least(1), Extent::at_least(0)];
    let sizes = distribute(usize::MAX / 2, &reqs);
    assert_eq!(sizes.iter().sum::<usize>(), usize::MAX / 2);
    assert!(sizes[0].abs_diff(sizes[1]) <= 1);
}

#[test]
fn allocations_sum_to_total_within_bounds() {
    let reqs = [
        Extent::new(1, 4),
        Extent::new(0, 1),
        Extent::new(2, 9),
        Extent::at_least(3),
    ];
    let min_sum: usize = reqs.iter().map(|r| r.min).sum();
    for total in min_sum..40 {
        let sizes = distribute(total, &reqs);
        assert_eq!(sizes.iter().sum::<usize>(), total, "total {total}");
        for (s, r) in sizes.iter().zip(&reqs) {
            assert!(*s >= r.min && *s <= r.max, "total {total}: {s} outside {r:?}");
        }
    }
}

#[test]
fn matches_unit_round_robin() {
    let sets: [&[Extent]; 4] = [
        &[Extent::new(0, 3), Extent::new(1, 1), Extent::new(0, 7)],
        &[Extent::new(2, 5), Extent::new(2, 5), Extent::new(0, 2)],
        &[Extent::new(0, 1), Extent::new(0, 10), Extent::new(0, 2), Extent::new(1, 4)],
        &[Extent::fixed(3), Extent::new(0, 6)],
    ];
    for reqs in sets {
        for total in 0..30 {
            assert_eq!(
                distribute(total, reqs),
                distribute_slow(total, reqs),
                "total {total} reqs {reqs:?}"
            );
        }
    }
}

#[test]
fn extent_combinators() {
    let a = Extent::new(1, 5);
    let b = Extent::new(3, 4);
    assert_eq!(a.saturating_add(b), Extent::new(4, 9));
    assert_eq!(a.max_each(b), Extent::new(3, 5));
    assert_eq!(Extent::at_least(2).pad(1), Extent::new(3, INF));
}
