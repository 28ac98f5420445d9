//! Integration tests for player stats

use waymark_foundation::{Stat, Stats};

#[test]
fn unset_stats_are_zero() {
    let stats = Stats::new();
    for stat in Stat::ALL {
        assert!(stats.get(stat).abs() < f64::EPSILON);
    }
}

#[test]
fn reduce_stops_at_zero() {
    let mut stats = Stats::new().with(Stat::Weight, 1.0);
    stats.reduce(Stat::Weight);
    stats.reduce(Stat::Weight);
    assert!(stats.get(Stat::Weight).abs() < f64::EPSILON);
}

#[test]
fn adjust_can_go_negative() {
    let mut stats = Stats::new().with(Stat::TimeRemaining, 0.0);
    stats.adjust(Stat::TimeRemaining, -1.0);
    assert!((stats.get(Stat::TimeRemaining) + 1.0).abs() < f64::EPSILON);
}

#[test]
fn names_parse_back() {
    for stat in Stat::ALL {
        assert_eq!(stat.name().parse::<Stat>().unwrap(), stat);
    }
}
