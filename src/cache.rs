use std::collections::HashMap;

use log::{debug, info};
use rand::Rng;

use crate::fleet::{self, VehicleRecord};
use crate::roster::{self, DriverRecord};

/// Explicit per-session memoization of the generated tables, keyed by the
/// requested row count. Entries are never invalidated within a session:
/// every page render re-reads the same immutable tables, so a cache hit
/// must not touch the RNG.
#[derive(Default)]
pub struct SessionCache {
    vehicles: HashMap<u64, Vec<VehicleRecord>>,
    drivers: HashMap<u64, Vec<DriverRecord>>,
}

impl SessionCache {
    pub fn new() -> SessionCache {
        SessionCache::default()
    }

    /// The vehicle table for `count` rows, generating it on first request.
    pub fn vehicles<R: Rng>(&mut self, rng: &mut R, count: u64) -> &[VehicleRecord] {
        if !self.vehicles.contains_key(&count) {
            info!("Generating {} vehicle records", count);
            self.vehicles.insert(count, fleet::generate_vehicles(rng, count));
        } else {
            debug!("Vehicle table ({} rows) served from session cache", count);
        }
        &self.vehicles[&count]
    }

    /// The driver table for `count` rows, generating it on first request.
    pub fn drivers<R: Rng>(&mut self, rng: &mut R, count: u64) -> &[DriverRecord] {
        if !self.drivers.contains_key(&count) {
            info!("Generating {} driver records", count);
            self.drivers.insert(count, roster::generate_drivers(rng, count));
        } else {
            debug!("Driver table ({} rows) served from session cache", count);
        }
        &self.drivers[&count]
    }

    /// Both tables at once, for callers that hold them side by side.
    pub fn tables<R: Rng>(
        &mut self,
        rng: &mut R,
        vehicle_count: u64,
        driver_count: u64,
    ) -> (&[VehicleRecord], &[DriverRecord]) {
        if !self.vehicles.contains_key(&vehicle_count) {
            info!("Generating {} vehicle records", vehicle_count);
            self.vehicles
                .insert(vehicle_count, fleet::generate_vehicles(rng, vehicle_count));
        }
        if !self.drivers.contains_key(&driver_count) {
            info!("Generating {} driver records", driver_count);
            self.drivers
                .insert(driver_count, roster::generate_drivers(rng, driver_count));
        }
        (&self.vehicles[&vehicle_count], &self.drivers[&driver_count])
    }
}
