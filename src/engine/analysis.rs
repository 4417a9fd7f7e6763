//! Comparisons across algorithms and frame counts.

use std::ops::RangeInclusive;

use crate::common::PageId;
use crate::engine::{Algorithm, Simulation, SimulationReport};

/// Fault count of one algorithm at one capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    pub capacity: usize,
    pub faults: usize,
}

/// Run every algorithm over the same input, in [`Algorithm::ALL`] order.
pub fn compare(capacity: usize, reference: &[PageId]) -> Vec<SimulationReport> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| Simulation::new(algorithm, capacity).run(reference))
        .collect()
}

/// Fault counts of `algorithm` for each capacity in `capacities`.
pub fn sweep(
    algorithm: Algorithm,
    reference: &[PageId],
    capacities: RangeInclusive<usize>,
) -> Vec<SweepPoint> {
    capacities
        .map(|capacity| SweepPoint {
            capacity,
            faults: Simulation::new(algorithm, capacity).run(reference).faults(),
        })
        .collect()
}

/// Capacities at which faults went up compared with the previous point.
///
/// LRU and Optimal never produce any; FIFO can (Belady's anomaly).
pub fn belady_anomalies(points: &[SweepPoint]) -> Vec<usize> {
    points
        .windows(2)
        .filter(|pair| pair[1].faults > pair[0].faults)
        .map(|pair| pair[1].capacity)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn belady() -> Vec<PageId> {
        [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5]
            .into_iter()
            .map(PageId::new)
            .collect()
    }

    #[test]
    fn test_compare_runs_all_algorithms_in_order() {
        let reports = compare(3, &belady());
        let names: Vec<_> = reports.iter().map(|r| r.algorithm).collect();
        assert_eq!(names, Algorithm::ALL.to_vec());

        let faults: Vec<_> = reports.iter().map(|r| r.faults()).collect();
        assert_eq!(faults, vec![10, 9, 7]);
    }

    #[test]
    fn test_sweep_covers_range() {
        let points = sweep(Algorithm::Lru, &belady(), 0..=5);
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], SweepPoint { capacity: 0, faults: 12 });
        assert_eq!(points[5], SweepPoint { capacity: 5, faults: 5 });
    }

    #[test]
    fn test_fifo_belady_anomaly_detected() {
        let points = sweep(Algorithm::Fifo, &belady(), 1..=5);
        assert_eq!(belady_anomalies(&points), vec![4]);
    }

    #[test]
    fn test_no_anomaly_for_stack_algorithms() {
        for algorithm in [Algorithm::Lru, Algorithm::Optimal] {
            let points = sweep(algorithm, &belady(), 0..=6);
            assert!(belady_anomalies(&points).is_empty());
        }
    }

    #[test]
    fn test_anomalies_on_short_sweeps() {
        assert!(belady_anomalies(&[]).is_empty());
        assert!(belady_anomalies(&[SweepPoint { capacity: 1, faults: 3 }]).is_empty());
    }
}
