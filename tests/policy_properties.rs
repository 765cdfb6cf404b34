//! Property tests for the replacement policies.
//!
//! The eviction invariants are checked by replaying each trace and
//! rebuilding the bookkeeping a policy is supposed to use.

use std::collections::HashMap;

use framesim::{run, Outcome, PageId, Policy, SimulationReport};
use proptest::prelude::*;

fn sequence() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((0i64..6).prop_map(PageId), 0..40)
}

fn small_sequence() -> impl Strategy<Value = Vec<PageId>> {
    prop::collection::vec((0i64..5).prop_map(PageId), 0..12)
}

fn policy() -> impl Strategy<Value = Policy> {
    prop::sample::select(Policy::ALL.to_vec())
}

/// Fewest faults any demand-paging strategy can achieve.
fn min_faults(refs: &[PageId], capacity: usize) -> u64 {
    fn go(
        refs: &[PageId],
        i: usize,
        resident: Vec<PageId>,
        capacity: usize,
        memo: &mut HashMap<(usize, Vec<PageId>), u64>,
    ) -> u64 {
        if i == refs.len() {
            return 0;
        }
        let key = (i, resident.clone());
        if let Some(&cached) = memo.get(&key) {
            return cached;
        }

        let page = refs[i];
        let best = if resident.contains(&page) {
            go(refs, i + 1, resident, capacity, memo)
        } else if resident.len() < capacity {
            let mut next = resident;
            next.push(page);
            next.sort();
            1 + go(refs, i + 1, next, capacity, memo)
        } else {
            (0..resident.len())
                .map(|victim| {
                    let mut next = resident.clone();
                    next[victim] = page;
                    next.sort();
                    1 + go(refs, i + 1, next, capacity, memo)
                })
                .min()
                .unwrap()
        };

        memo.insert(key, best);
        best
    }

    go(refs, 0, Vec::new(), capacity, &mut HashMap::new())
}

/// (previous frames, victim, step index) for every eviction in the trace.
fn evictions(report: &SimulationReport) -> Vec<(Vec<PageId>, PageId, usize)> {
    let mut previous: Vec<PageId> = Vec::new();
    let mut out = Vec::new();
    for (i, record) in report.trace.iter().enumerate() {
        if let Some(victim) = record.evicted {
            out.push((previous.clone(), victim, i));
        }
        previous = record.frames.clone();
    }
    out
}

proptest! {
    #[test]
    fn faults_match_misses(refs in sequence(), capacity in 1usize..6, policy in policy()) {
        let report = run(policy, capacity, &refs).unwrap();

        let misses = report.trace.iter().filter(|r| r.outcome == Outcome::Miss).count() as u64;
        prop_assert_eq!(report.total_faults, misses);
        prop_assert_eq!(report.trace.len(), refs.len());
        prop_assert_eq!(report.stats().faults, misses);
    }

    #[test]
    fn frames_stay_within_capacity(refs in sequence(), capacity in 1usize..6, policy in policy()) {
        let report = run(policy, capacity, &refs).unwrap();

        for record in &report.trace {
            prop_assert!(record.frames.len() <= capacity);
            prop_assert!(record.frames.contains(&record.page));
            let mut unique = record.frames.clone();
            unique.sort();
            unique.dedup();
            prop_assert_eq!(unique.len(), record.frames.len());
        }
    }

    #[test]
    fn runs_are_deterministic(refs in sequence(), capacity in 1usize..6, policy in policy()) {
        let first = run(policy, capacity, &refs).unwrap();
        let second = run(policy, capacity, &refs).unwrap();

        prop_assert_eq!(first.checksum(), second.checksum());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn fifo_evicts_earliest_admission(refs in sequence(), capacity in 1usize..5) {
        let report = run(Policy::Fifo, capacity, &refs).unwrap();

        let mut admitted: HashMap<PageId, usize> = HashMap::new();
        let mut evicted_at: HashMap<usize, (Vec<PageId>, PageId)> = evictions(&report)
            .into_iter()
            .map(|(frames, victim, i)| (i, (frames, victim)))
            .collect();

        for (i, record) in report.trace.iter().enumerate() {
            if let Some((frames, victim)) = evicted_at.remove(&i) {
                let oldest = frames.iter().min_by_key(|p| admitted[*p]).unwrap();
                prop_assert_eq!(*oldest, victim);
            }
            if record.outcome == Outcome::Miss {
                admitted.insert(record.page, i);
            }
        }
    }

    #[test]
    fn lru_evicts_least_recent_reference(refs in sequence(), capacity in 1usize..5) {
        let report = run(Policy::Lru, capacity, &refs).unwrap();

        let mut last_ref: HashMap<PageId, usize> = HashMap::new();
        let mut evicted_at: HashMap<usize, (Vec<PageId>, PageId)> = evictions(&report)
            .into_iter()
            .map(|(frames, victim, i)| (i, (frames, victim)))
            .collect();

        for (i, record) in report.trace.iter().enumerate() {
            if let Some((frames, victim)) = evicted_at.remove(&i) {
                let least_recent = frames.iter().min_by_key(|p| last_ref[*p]).unwrap();
                prop_assert_eq!(*least_recent, victim);
            }
            last_ref.insert(record.page, i);
        }
    }

    #[test]
    fn optimal_evicts_furthest_next_use(refs in sequence(), capacity in 1usize..5) {
        let report = run(Policy::Optimal, capacity, &refs).unwrap();

        let next_use = |page: PageId, i: usize| {
            refs[i + 1..].iter().position(|&p| p == page).unwrap_or(usize::MAX)
        };

        for (frames, victim, i) in evictions(&report) {
            let victim_distance = next_use(victim, i);
            for &page in &frames {
                prop_assert!(next_use(page, i) <= victim_distance);
            }
            // Ties go to the lowest slot
            let first_max = frames.iter().position(|&p| next_use(p, i) == victim_distance);
            prop_assert_eq!(first_max, frames.iter().position(|&p| p == victim));
        }
    }

    #[test]
    fn optimal_is_minimal(refs in small_sequence(), capacity in 1usize..4) {
        let optimal = run(Policy::Optimal, capacity, &refs).unwrap();
        prop_assert_eq!(optimal.total_faults, min_faults(&refs, capacity));

        for policy in [Policy::Fifo, Policy::Lru] {
            let other = run(policy, capacity, &refs).unwrap();
            prop_assert!(optimal.total_faults <= other.total_faults);
        }
    }
}
