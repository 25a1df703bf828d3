#![forbid(unsafe_code)]
use effectif::{week_patterns, Demand, Planner, DAYS_PER_WEEK, REST_DAYS, WORKED_DAYS};
use std::collections::BTreeSet;

#[test]
fn patterns_partition_the_week() {
    let patterns = week_patterns();
    assert_eq!(patterns.len(), DAYS_PER_WEEK);

    for (start, p) in patterns.iter().enumerate() {
        assert_eq!(p.start, start);
        assert_eq!(p.on_duty.len(), WORKED_DAYS);
        assert_eq!(p.off_duty.len(), REST_DAYS);

        let on: BTreeSet<usize> = p.on_duty.iter().copied().collect();
        let off: BTreeSet<usize> = p.off_duty.iter().copied().collect();
        assert!(on.is_disjoint(&off));

        let all: BTreeSet<usize> = on.union(&off).copied().collect();
        assert_eq!(all, (0..DAYS_PER_WEEK).collect::<BTreeSet<_>>());
    }
}

#[test]
fn patterns_wrap_at_week_end() {
    let patterns = week_patterns();
    let last = &patterns[6];
    assert_eq!(last.on_duty, vec![6, 0, 1, 2, 3]);
    assert_eq!(last.off_duty, vec![4, 5]);
}

#[test]
fn patterns_rotate_with_start_day() {
    let patterns = week_patterns();
    for start in 0..DAYS_PER_WEEK {
        let next = (start + 1) % DAYS_PER_WEEK;
        let rotated: BTreeSet<usize> = patterns[start]
            .on_duty
            .iter()
            .map(|&d| (d + 1) % DAYS_PER_WEEK)
            .collect();
        let expected: BTreeSet<usize> = patterns[next].on_duty.iter().copied().collect();
        assert_eq!(rotated, expected);
    }
}

#[test]
fn formulation_agrees_with_both_characterisations() {
    let demand = Demand::new(vec![3, 1, 4, 1, 5, 9, 2]).unwrap();
    let planner = Planner::new();
    let problem = planner.formulate(&demand);
    let patterns = planner.patterns();

    assert_eq!(problem.rows.len(), DAYS_PER_WEEK);
    for row in &problem.rows {
        assert_eq!(row.required, demand.get(row.day));

        let by_off_duty: BTreeSet<usize> = patterns
            .iter()
            .filter(|p| !p.rests(row.day))
            .map(|p| p.start)
            .collect();
        let by_on_duty: BTreeSet<usize> = patterns
            .iter()
            .filter(|p| p.covers(row.day))
            .map(|p| p.start)
            .collect();
        let covering: BTreeSet<usize> = row.covering.iter().copied().collect();

        assert_eq!(covering, by_off_duty);
        assert_eq!(covering, by_on_duty);
        // chaque jour est couvert par exactement 5 des 7 départs
        assert_eq!(covering.len(), WORKED_DAYS);
    }
}

#[test]
fn demand_rejects_bad_input() {
    assert!(Demand::new(vec![1, 2, 3]).is_err());
    assert!(Demand::from_signed(&[1, 2, 3, 4, 5, 6]).is_err());
    assert!(Demand::from_signed(&[1, 2, -3, 4, 5, 6, 7]).is_err());
    assert!(Demand::from_signed(&[0, 0, 0, 0, 0, 0, 0]).is_ok());
}
