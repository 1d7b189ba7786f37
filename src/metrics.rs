//! Aggregates over the generated tables.
//!
//! Every function recomputes from the full table on each call; the tables
//! hold low hundreds of rows and are immutable for the session, so there is
//! no incremental state to maintain.

use std::cmp::Ordering;

use crate::fleet::{VehicleRecord, VehicleStatus};
use crate::roster::DriverRecord;

pub type Predicate<'p, T> = &'p dyn Fn(&T) -> bool;

/// Mean of a numeric column selected by `column`. None on an empty table.
pub fn mean_by<T, F>(rows: &[T], column: F) -> Option<f64>
where
    F: Fn(&T) -> f64,
{
    if rows.is_empty() {
        None
    } else {
        Some(rows.iter().map(|row| column(row)).sum::<f64>() / rows.len() as f64)
    }
}

/// Sum of a numeric column selected by `column`.
pub fn sum_by<T, F>(rows: &[T], column: F) -> f64
where
    F: Fn(&T) -> f64,
{
    rows.iter().map(|row| column(row)).sum()
}

/// The `n` largest rows by `column`, descending. The sort is stable, so ties
/// keep insertion order. Returns fewer than `n` rows on a short table.
pub fn top_n_by<T, F>(rows: &[T], n: usize, column: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = rows.iter().collect();
    ranked.sort_by(|a, b| column(b).partial_cmp(&column(a)).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(n).cloned().collect()
}

/// The `n` smallest rows by `column`, ascending. Stable, like top_n_by.
pub fn bottom_n_by<T, F>(rows: &[T], n: usize, column: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = rows.iter().collect();
    ranked.sort_by(|a, b| column(a).partial_cmp(&column(b)).unwrap_or(Ordering::Equal));
    ranked.into_iter().take(n).cloned().collect()
}

/// Group-by-count over a categorical column. Groups appear in first-seen
/// order, which keeps report output stable for a given table.
pub fn count_by<T, F>(rows: &[T], column: F) -> Vec<(String, usize)>
where
    F: Fn(&T) -> String,
{
    let mut counts: Vec<(String, usize)> = Vec::new();

    for row in rows {
        let key = column(row);
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }

    counts
}

/// Rows satisfying every predicate (compound AND).
pub fn filter_all<'a, T>(rows: &'a [T], predicates: &[Predicate<T>]) -> Vec<&'a T> {
    rows.iter()
        .filter(|row| predicates.iter().all(|pred| pred(*row)))
        .collect()
}

/// Vehicles matching the optional id search text (case-insensitive
/// substring) and the optional status filter. An empty result is a valid,
/// empty table.
pub fn apply_vehicle_filters<'a>(
    vehicles: &'a [VehicleRecord],
    search: Option<&str>,
    status: Option<VehicleStatus>,
) -> Vec<&'a VehicleRecord> {
    let needle = search.map(|s| s.to_lowercase());

    let matches_search = |v: &VehicleRecord| match &needle {
        Some(needle) => v.id.to_lowercase().contains(needle.as_str()),
        None => true,
    };
    let matches_status = |v: &VehicleRecord| match status {
        Some(status) => v.status == status,
        None => true,
    };

    filter_all(
        vehicles,
        &[
            &matches_search as Predicate<VehicleRecord>,
            &matches_status as Predicate<VehicleRecord>,
        ],
    )
}

pub fn count_by_status(vehicles: &[VehicleRecord], status: VehicleStatus) -> usize {
    vehicles.iter().filter(|v| v.status == status).count()
}

/// Vehicles whose next service falls in the inclusive day window.
/// Negative bounds cover overdue services.
pub fn service_due_within(vehicles: &[VehicleRecord], from_days: i64, to_days: i64) -> usize {
    vehicles
        .iter()
        .filter(|v| v.next_service_days >= from_days && v.next_service_days <= to_days)
        .count()
}

/// Fleet-wide maintenance cost per kilometer: total maintenance spend over
/// total distance. None when the fleet has covered no distance.
pub fn fleet_maintenance_cpkm(vehicles: &[VehicleRecord]) -> Option<f64> {
    let total_cost: i64 = vehicles.iter().map(|v| v.maintenance_cost_total).sum();
    let total_odometer: i64 = vehicles.iter().map(|v| v.odometer_km).sum();

    if total_odometer == 0 {
        None
    } else {
        Some(total_cost as f64 / total_odometer as f64)
    }
}

/// Lifetime operating spend for one vehicle.
pub fn vehicle_total_cost(vehicle: &VehicleRecord) -> f64 {
    vehicle.operating_cost_per_km * vehicle.odometer_km as f64
}

pub fn training_complete_count(drivers: &[DriverRecord]) -> usize {
    drivers.iter().filter(|d| d.training_complete).count()
}

pub fn violation_free_count(drivers: &[DriverRecord]) -> usize {
    drivers.iter().filter(|d| d.violations == 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::maintenance_cpkm;

    fn vehicle(id: &str, status: VehicleStatus, next_service_days: i64) -> VehicleRecord {
        let odometer_km = 400_000;
        let maintenance_cost_total = 100_000;
        VehicleRecord {
            id: id.to_string(),
            model: "Heavy Truck 45T",
            status,
            region: "North",
            driver: "Driver A1".to_string(),
            fuel_efficiency_kmpl: 4.1,
            odometer_km,
            daily_distance_km: 350,
            operating_cost_per_km: 30.0,
            maintenance_cost_total,
            maintenance_cpkm: maintenance_cpkm(maintenance_cost_total, odometer_km),
            daily_co2_kg: 20.0,
            idle_time_min: 60,
            avg_speed_kmh: 55,
            last_service_days_ago: 30,
            next_service_days,
            harsh_braking: 2,
            harsh_acceleration: 1,
            overspeed_events: 0,
        }
    }

    #[test]
    fn mean_and_sum_aggregate_the_selected_column() {
        let rows = [("a", 1.0), ("b", 2.0), ("c", 3.0)];
        assert_eq!(mean_by(&rows, |r| r.1), Some(2.0));
        assert_eq!(sum_by(&rows, |r| r.1), 6.0);
        assert_eq!(mean_by::<(&str, f64), _>(&[], |r| r.1), None);
    }

    #[test]
    fn top_n_is_descending_with_stable_ties() {
        let rows = [("first", 5.0), ("second", 9.0), ("third", 5.0), ("fourth", 1.0)];
        let top = top_n_by(&rows, 3, |r| r.1);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].0, "second");
        // the two 5.0 rows keep insertion order
        assert_eq!(top[1].0, "first");
        assert_eq!(top[2].0, "third");
    }

    #[test]
    fn top_n_returns_fewer_rows_on_a_short_table() {
        let rows = [("only", 1.0)];
        assert_eq!(top_n_by(&rows, 10, |r| r.1).len(), 1);
    }

    #[test]
    fn bottom_n_is_ascending() {
        let rows = [("a", 3.0), ("b", 1.0), ("c", 2.0)];
        let bottom = bottom_n_by(&rows, 2, |r| r.1);
        assert_eq!(bottom[0].0, "b");
        assert_eq!(bottom[1].0, "c");
    }

    #[test]
    fn count_by_groups_in_first_seen_order() {
        let rows = ["West", "North", "West", "South", "North", "West"];
        let counts = count_by(&rows, |r| r.to_string());
        assert_eq!(
            counts,
            vec![
                ("West".to_string(), 3),
                ("North".to_string(), 2),
                ("South".to_string(), 1),
            ]
        );
    }

    #[test]
    fn status_filter_returns_only_matching_records() {
        let vehicles = vec![
            vehicle("MH-01-TRK-1000", VehicleStatus::Active, 30),
            vehicle("DL-02-TRK-2000", VehicleStatus::Maintenance, 5),
            vehicle("GJ-03-TRK-3000", VehicleStatus::Maintenance, -2),
        ];
        let result = apply_vehicle_filters(&vehicles, None, Some(VehicleStatus::Maintenance));
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.status == VehicleStatus::Maintenance));
    }

    #[test]
    fn id_search_is_case_insensitive_substring() {
        let vehicles = vec![
            vehicle("MH-12-TRK-1234", VehicleStatus::Active, 30),
            vehicle("DL-02-TRK-2000", VehicleStatus::Idle, 10),
        ];
        let result = apply_vehicle_filters(&vehicles, Some("mh-12"), None);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "MH-12-TRK-1234");

        let empty = apply_vehicle_filters(&vehicles, Some("ZZ-99"), None);
        assert!(empty.is_empty());
    }

    #[test]
    fn compound_filters_are_anded() {
        let vehicles = vec![
            vehicle("MH-12-TRK-1234", VehicleStatus::Maintenance, 5),
            vehicle("MH-13-TRK-5678", VehicleStatus::Active, 5),
            vehicle("DL-02-TRK-2000", VehicleStatus::Maintenance, 10),
        ];
        let result =
            apply_vehicle_filters(&vehicles, Some("MH"), Some(VehicleStatus::Maintenance));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "MH-12-TRK-1234");
    }

    #[test]
    fn service_windows_are_inclusive() {
        let vehicles = vec![
            vehicle("a", VehicleStatus::Active, 0),
            vehicle("b", VehicleStatus::Active, 7),
            vehicle("c", VehicleStatus::Active, 8),
            vehicle("d", VehicleStatus::Active, 15),
            vehicle("e", VehicleStatus::Active, -3),
        ];
        assert_eq!(service_due_within(&vehicles, 0, 7), 2);
        assert_eq!(service_due_within(&vehicles, 8, 15), 2);
        assert_eq!(service_due_within(&vehicles, i64::MIN, -1), 1);
    }

    #[test]
    fn fleet_cpkm_is_total_cost_over_total_distance() {
        let vehicles = vec![
            vehicle("a", VehicleStatus::Active, 10),
            vehicle("b", VehicleStatus::Idle, 10),
        ];
        // each fixture: 100_000 cost over 400_000 km
        assert_eq!(fleet_maintenance_cpkm(&vehicles), Some(0.25));
        assert_eq!(fleet_maintenance_cpkm(&[]), None);
    }

    #[test]
    fn vehicle_total_cost_scales_operating_cost_by_odometer() {
        let v = vehicle("a", VehicleStatus::Active, 10);
        assert_eq!(vehicle_total_cost(&v), 30.0 * 400_000.0);
    }
}
