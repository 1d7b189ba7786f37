use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::generators::*;
use crate::roster::driver_name;

pub const DEFAULT_VEHICLE_COUNT: u64 = 150;

const MODELS: [&str; 5] = [
    "Heavy Truck 45T",
    "Heavy Truck 40T",
    "Medium Truck 25T",
    "Light Truck 12T",
    "Multi-Axle 49T",
];
const STATE_CODES: [&str; 10] = ["MH", "DL", "GJ", "KA", "TN", "UP", "RJ", "HR", "PB", "WB"];
const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Central"];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum VehicleStatus {
    Active,
    Idle,
    Maintenance,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 3] = [
        VehicleStatus::Active,
        VehicleStatus::Idle,
        VehicleStatus::Maintenance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Active => "Active",
            VehicleStatus::Idle => "Idle",
            VehicleStatus::Maintenance => "Maintenance",
        }
    }

    pub fn parse(input: &str) -> Result<VehicleStatus, String> {
        match input.to_lowercase().as_str() {
            "active" => Ok(VehicleStatus::Active),
            "idle" => Ok(VehicleStatus::Idle),
            "maintenance" => Ok(VehicleStatus::Maintenance),
            other => Err(format!("Unknown vehicle status: {}", other)),
        }
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One row of the fleet table. All primary fields are sampled; the
/// maintenance cost-per-km is always recomputed from its inputs at
/// construction and never stored independently.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VehicleRecord {
    pub id: String,
    pub model: &'static str,
    pub status: VehicleStatus,
    pub region: &'static str,
    pub driver: String,
    pub fuel_efficiency_kmpl: f64,
    pub odometer_km: i64,
    pub daily_distance_km: i64,
    pub operating_cost_per_km: f64,
    pub maintenance_cost_total: i64,
    pub maintenance_cpkm: Option<f64>,
    pub daily_co2_kg: f64,
    pub idle_time_min: i64,
    pub avg_speed_kmh: i64,
    pub last_service_days_ago: i64,
    pub next_service_days: i64,
    pub harsh_braking: i64,
    pub harsh_acceleration: i64,
    pub overspeed_events: i64,
}

/// Maintenance cost per kilometer, rounded to two places.
/// A zero odometer makes the ratio undefined; the sampling floor keeps it
/// positive, but callers constructing records by hand get None, not a panic.
pub fn maintenance_cpkm(cost_total: i64, odometer_km: i64) -> Option<f64> {
    if odometer_km == 0 {
        None
    } else {
        Some(round_to(cost_total as f64 / odometer_km as f64, 2))
    }
}

/// Produces `count` vehicle records in generation order.
///
/// Identifiers follow the `{state}-{district:02}-TRK-{serial}` scheme and are
/// not guaranteed unique; collisions are acceptable and never deduplicated.
///
/// # Examples
///
/// let fleet = generate_vehicles(&mut rng, 150);
///
pub fn generate_vehicles<R: Rng>(rng: &mut R, count: u64) -> Vec<VehicleRecord> {
    let mut vehicles = Vec::with_capacity(count as usize);

    for i in 1..=count {
        let state = *generate_choice(rng, &STATE_CODES);
        let district = generate_integer(rng, 1, 50);
        let serial = generate_integer(rng, 1000, 9999);

        let odometer_km = generate_integer(rng, 50_000, 550_000);
        let maintenance_cost_total = generate_integer(rng, 50_000, 250_000);

        vehicles.push(VehicleRecord {
            id: format!("{}-{:02}-TRK-{}", state, district, serial),
            model: *generate_choice(rng, &MODELS),
            status: *generate_choice(rng, &VehicleStatus::ALL),
            region: *generate_choice(rng, &REGIONS),
            driver: driver_name(i),
            fuel_efficiency_kmpl: generate_float(rng, 3.2, 5.2, 2),
            odometer_km,
            daily_distance_km: generate_integer(rng, 200, 600),
            operating_cost_per_km: generate_float(rng, 25.0, 45.0, 2),
            maintenance_cost_total,
            maintenance_cpkm: maintenance_cpkm(maintenance_cost_total, odometer_km),
            daily_co2_kg: generate_float(rng, 15.0, 30.0, 1),
            idle_time_min: generate_integer(rng, 20, 180),
            avg_speed_kmh: generate_integer(rng, 45, 75),
            last_service_days_ago: generate_integer(rng, 5, 90),
            next_service_days: generate_integer(rng, -10, 60),
            harsh_braking: generate_integer(rng, 0, 15),
            harsh_acceleration: generate_integer(rng, 0, 12),
            overspeed_events: generate_integer(rng, 0, 10),
        });
    }

    vehicles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn requested_count_is_honored_exactly() {
        let mut rng = StdRng::seed_from_u64(10);
        assert_eq!(generate_vehicles(&mut rng, 10).len(), 10);
        assert_eq!(generate_vehicles(&mut rng, 150).len(), 150);
    }

    #[test]
    fn sampled_fields_stay_inside_their_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for v in generate_vehicles(&mut rng, 300) {
            assert!(v.fuel_efficiency_kmpl >= 3.2 && v.fuel_efficiency_kmpl <= 5.2);
            assert!((50_000..=550_000).contains(&v.odometer_km));
            assert!((200..=600).contains(&v.daily_distance_km));
            assert!(v.operating_cost_per_km >= 25.0 && v.operating_cost_per_km <= 45.0);
            assert!((50_000..=250_000).contains(&v.maintenance_cost_total));
            assert!(v.daily_co2_kg >= 15.0 && v.daily_co2_kg <= 30.0);
            assert!((20..=180).contains(&v.idle_time_min));
            assert!((45..=75).contains(&v.avg_speed_kmh));
            assert!((5..=90).contains(&v.last_service_days_ago));
            assert!((-10..=60).contains(&v.next_service_days));
            assert!((0..=15).contains(&v.harsh_braking));
            assert!((0..=12).contains(&v.harsh_acceleration));
            assert!((0..=10).contains(&v.overspeed_events));
        }
    }

    #[test]
    fn cpkm_is_recomputed_from_cost_and_odometer() {
        let mut rng = StdRng::seed_from_u64(12);
        for v in generate_vehicles(&mut rng, 200) {
            let expected = round_to(v.maintenance_cost_total as f64 / v.odometer_km as f64, 2);
            assert_eq!(v.maintenance_cpkm, Some(expected));
        }
    }

    #[test]
    fn zero_odometer_yields_undefined_cpkm() {
        assert_eq!(maintenance_cpkm(120_000, 0), None);
        assert_eq!(maintenance_cpkm(100_000, 400_000), Some(0.25));
    }

    #[test]
    fn identifier_follows_the_plate_scheme() {
        let mut rng = StdRng::seed_from_u64(13);
        for v in generate_vehicles(&mut rng, 50) {
            let parts: Vec<&str> = v.id.split('-').collect();
            assert_eq!(parts.len(), 4);
            assert!(STATE_CODES.contains(&parts[0]));
            assert_eq!(parts[1].len(), 2);
            assert!(parts[1].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(parts[2], "TRK");
            assert_eq!(parts[3].len(), 4);
            assert!(parts[3].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(VehicleStatus::parse("maintenance"), Ok(VehicleStatus::Maintenance));
        assert_eq!(VehicleStatus::parse("ACTIVE"), Ok(VehicleStatus::Active));
        assert!(VehicleStatus::parse("parked").is_err());
    }
}
