use rand::Rng;
use serde::Serialize;

use crate::generators::*;

pub const DEFAULT_DRIVER_COUNT: u64 = 145;

/// One row of the driver roster.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DriverRecord {
    pub name: String,
    pub score: i64,
    pub fuel_efficiency_kmpl: f64,
    pub total_trips: i64,
    pub total_distance_km: i64,
    pub avg_distance_per_trip_km: Option<f64>,
    pub violations: i64,
    pub experience_years: i64,
    pub training_complete: bool,
    pub harsh_braking: i64,
    pub harsh_acceleration: i64,
    pub speeding_events: i64,
    pub fatigue_alerts: i64,
    pub monthly_salary: i64,
}

/// Roster name for a 1-based row index. Vehicle records reuse the same
/// scheme so fleet assignments line up with roster rows.
pub fn driver_name(index: u64) -> String {
    let letter = (b'A' + ((index / 10) % 26) as u8) as char;
    format!("Driver {}{}", letter, index % 10)
}

/// Average distance per trip, rounded to one place.
/// Undefined when the trip count is zero; the sampling floor keeps it
/// positive, but hand-built records get None rather than a panic.
pub fn avg_distance_per_trip(distance_km: i64, trips: i64) -> Option<f64> {
    if trips == 0 {
        None
    } else {
        Some(round_to(distance_km as f64 / trips as f64, 1))
    }
}

/// Produces `count` driver records in generation order.
///
/// # Examples
///
/// let roster = generate_drivers(&mut rng, 145);
///
pub fn generate_drivers<R: Rng>(rng: &mut R, count: u64) -> Vec<DriverRecord> {
    let mut drivers = Vec::with_capacity(count as usize);

    for i in 1..=count {
        let total_trips = generate_integer(rng, 50, 150);
        let total_distance_km = generate_integer(rng, 50_000, 200_000);

        drivers.push(DriverRecord {
            name: driver_name(i),
            score: generate_integer(rng, 70, 100),
            fuel_efficiency_kmpl: generate_float(rng, 3.5, 5.0, 2),
            total_trips,
            total_distance_km,
            avg_distance_per_trip_km: avg_distance_per_trip(total_distance_km, total_trips),
            violations: generate_integer(rng, 0, 5),
            experience_years: generate_integer(rng, 2, 15),
            training_complete: generate_flag(rng, 0.87),
            harsh_braking: generate_integer(rng, 0, 20),
            harsh_acceleration: generate_integer(rng, 0, 18),
            speeding_events: generate_integer(rng, 0, 15),
            fatigue_alerts: generate_integer(rng, 0, 8),
            monthly_salary: generate_integer(rng, 35_000, 65_000),
        });
    }

    drivers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn requested_count_is_honored_exactly() {
        let mut rng = StdRng::seed_from_u64(20);
        assert_eq!(generate_drivers(&mut rng, 10).len(), 10);
        assert_eq!(generate_drivers(&mut rng, 145).len(), 145);
    }

    #[test]
    fn sampled_fields_stay_inside_their_ranges() {
        let mut rng = StdRng::seed_from_u64(21);
        for d in generate_drivers(&mut rng, 300) {
            assert!((70..=100).contains(&d.score));
            assert!(d.fuel_efficiency_kmpl >= 3.5 && d.fuel_efficiency_kmpl <= 5.0);
            assert!((50..=150).contains(&d.total_trips));
            assert!((50_000..=200_000).contains(&d.total_distance_km));
            assert!((0..=5).contains(&d.violations));
            assert!((2..=15).contains(&d.experience_years));
            assert!((0..=20).contains(&d.harsh_braking));
            assert!((0..=18).contains(&d.harsh_acceleration));
            assert!((0..=15).contains(&d.speeding_events));
            assert!((0..=8).contains(&d.fatigue_alerts));
            assert!((35_000..=65_000).contains(&d.monthly_salary));
        }
    }

    #[test]
    fn avg_distance_is_derived_from_distance_and_trips() {
        let mut rng = StdRng::seed_from_u64(22);
        for d in generate_drivers(&mut rng, 200) {
            let expected = round_to(d.total_distance_km as f64 / d.total_trips as f64, 1);
            assert_eq!(d.avg_distance_per_trip_km, Some(expected));
        }
    }

    #[test]
    fn zero_trips_yields_undefined_average() {
        assert_eq!(avg_distance_per_trip(80_000, 0), None);
        assert_eq!(avg_distance_per_trip(90_000, 100), Some(900.0));
    }

    #[test]
    fn names_follow_the_letter_digit_scheme() {
        assert_eq!(driver_name(1), "Driver A1");
        assert_eq!(driver_name(10), "Driver B0");
        assert_eq!(driver_name(145), "Driver O5");
        // indexes past Z wrap rather than walking off the alphabet
        assert_eq!(driver_name(261), "Driver A1");
    }
}
