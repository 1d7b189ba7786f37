use std::io::{self, Write};

use pad::{Alignment, PadStr};

use crate::fleet::{VehicleRecord, VehicleStatus};
use crate::join_row;
use crate::metrics::*;
use crate::roster::DriverRecord;

/// Everything a page render reads: the two immutable tables plus the
/// read-only display filters.
pub struct Dashboard<'a> {
    pub vehicles: &'a [VehicleRecord],
    pub drivers: &'a [DriverRecord],
    pub search: Option<&'a str>,
    pub status_filter: Option<VehicleStatus>,
}

pub type RenderFn = fn(&mut dyn Write, &Dashboard) -> io::Result<()>;

/// The dashboard's navigation choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Overview,
    VehicleAnalysis,
    DriverPerformance,
    Co2Analytics,
    Maintenance,
    CostAnalysis,
    Compliance,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Overview,
        Page::VehicleAnalysis,
        Page::DriverPerformance,
        Page::Co2Analytics,
        Page::Maintenance,
        Page::CostAnalysis,
        Page::Compliance,
    ];

    pub fn parse(input: &str) -> Result<Page, String> {
        match input.to_lowercase().as_str() {
            "overview" => Ok(Page::Overview),
            "vehicles" | "vehicle_analysis" => Ok(Page::VehicleAnalysis),
            "drivers" | "driver_performance" => Ok(Page::DriverPerformance),
            "co2" => Ok(Page::Co2Analytics),
            "maintenance" => Ok(Page::Maintenance),
            "cost" => Ok(Page::CostAnalysis),
            "compliance" => Ok(Page::Compliance),
            other => Err(format!("Unknown page: {}", other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Page::Overview => "overview",
            Page::VehicleAnalysis => "vehicles",
            Page::DriverPerformance => "drivers",
            Page::Co2Analytics => "co2",
            Page::Maintenance => "maintenance",
            Page::CostAnalysis => "cost",
            Page::Compliance => "compliance",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Overview => "Fleet Overview",
            Page::VehicleAnalysis => "Vehicle Analysis",
            Page::DriverPerformance => "Driver Performance",
            Page::Co2Analytics => "CO2 Analytics",
            Page::Maintenance => "Maintenance & CPKM",
            Page::CostAnalysis => "Cost Analysis",
            Page::Compliance => "Compliance",
        }
    }

    /// The render function for this page, selected once per interaction.
    pub fn renderer(&self) -> RenderFn {
        match self {
            Page::Overview => render_overview,
            Page::VehicleAnalysis => render_vehicle_analysis,
            Page::DriverPerformance => render_driver_performance,
            Page::Co2Analytics => render_co2_analytics,
            Page::Maintenance => render_maintenance,
            Page::CostAnalysis => render_cost_analysis,
            Page::Compliance => render_compliance,
        }
    }
}

/// Renders one page: title banner, then the page body.
pub fn render_page(page: Page, out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    writeln!(out, "{}", page.title())?;
    writeln!(out, "{}", "=".repeat(page.title().len()))?;
    (page.renderer())(out, data)
}

fn left(text: &str, width: usize) -> String {
    text.pad_to_width_with_alignment(width, Alignment::Left)
}

fn right(text: impl ToString, width: usize) -> String {
    text.to_string()
        .pad_to_width_with_alignment(width, Alignment::Right)
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

fn render_overview(out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    let avg_fe = mean_by(data.vehicles, |v| v.fuel_efficiency_kmpl).unwrap_or(0.0);
    let active = count_by_status(data.vehicles, VehicleStatus::Active);
    let total_co2 = sum_by(data.vehicles, |v| v.daily_co2_kg);

    writeln!(out, "Fleet efficiency:  {:.2} km/L", avg_fe)?;
    writeln!(out, "Active vehicles:   {}/{}", active, data.vehicles.len())?;
    writeln!(out, "Total drivers:     {}", data.drivers.len())?;
    writeln!(out, "Daily CO2:         {:.0} kg", total_co2)?;
    writeln!(out)?;

    writeln!(out, "Regional distribution")?;
    for (region, count) in count_by(data.vehicles, |v| v.region.to_string()) {
        writeln!(out, "  {}{}", left(&region, 10), count)?;
    }
    writeln!(out)?;

    writeln!(out, "Status distribution")?;
    for (status, count) in count_by(data.vehicles, |v| v.status.to_string()) {
        writeln!(out, "  {}{}", left(&status, 13), count)?;
    }
    Ok(())
}

fn render_vehicle_analysis(out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    let avg_fe = mean_by(data.vehicles, |v| v.fuel_efficiency_kmpl).unwrap_or(0.0);
    let avg_odometer = mean_by(data.vehicles, |v| v.odometer_km as f64).unwrap_or(0.0);
    let in_maintenance = count_by_status(data.vehicles, VehicleStatus::Maintenance);

    writeln!(out, "Total vehicles:      {}", data.vehicles.len())?;
    writeln!(out, "Avg efficiency:      {:.2} km/L", avg_fe)?;
    writeln!(out, "Avg odometer:        {:.0}K km", avg_odometer / 1000.0)?;
    writeln!(out, "Maintenance needed:  {}", in_maintenance)?;
    writeln!(out)?;

    let filtered = apply_vehicle_filters(data.vehicles, data.search, data.status_filter);
    writeln!(out, "Vehicles ({} shown)", filtered.len())?;
    writeln!(
        out,
        "{}",
        join_row![
            "  ";
            left("Vehicle ID", 15),
            left("Model", 16),
            left("Status", 11),
            left("Driver", 9),
            right("FE km/L", 7),
            right("Odometer", 8),
            right("Daily km", 8)
        ]
    )?;
    for v in filtered {
        writeln!(
            out,
            "{}",
            join_row![
                "  ";
                left(&v.id, 15),
                left(v.model, 16),
                left(v.status.as_str(), 11),
                left(&v.driver, 9),
                right(format!("{:.2}", v.fuel_efficiency_kmpl), 7),
                right(v.odometer_km, 8),
                right(v.daily_distance_km, 8)
            ]
        )?;
    }
    Ok(())
}

fn render_driver_performance(out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    let avg_fe = mean_by(data.drivers, |d| d.fuel_efficiency_kmpl).unwrap_or(0.0);
    let avg_score = mean_by(data.drivers, |d| d.score as f64).unwrap_or(0.0);
    let trained = training_complete_count(data.drivers);

    writeln!(out, "Total drivers:      {}", data.drivers.len())?;
    writeln!(out, "Avg efficiency:     {:.2} km/L", avg_fe)?;
    writeln!(out, "Avg score:          {:.0}/100", avg_score)?;
    writeln!(out, "Training complete:  {}/{}", trained, data.drivers.len())?;
    writeln!(out)?;

    writeln!(out, "Roster by score")?;
    writeln!(
        out,
        "{}",
        join_row![
            "  ";
            left("Name", 10),
            right("Score", 5),
            right("FE km/L", 7),
            right("Trips", 5),
            right("Avg km/trip", 11),
            right("Violations", 10),
            right("Years", 5)
        ]
    )?;
    for d in top_n_by(data.drivers, data.drivers.len(), |d| d.score as f64) {
        writeln!(
            out,
            "{}",
            join_row![
                "  ";
                left(&d.name, 10),
                right(d.score, 5),
                right(format!("{:.2}", d.fuel_efficiency_kmpl), 7),
                right(d.total_trips, 5),
                right(fmt_opt(d.avg_distance_per_trip_km), 11),
                right(d.violations, 10),
                right(d.experience_years, 5)
            ]
        )?;
    }
    Ok(())
}

fn render_co2_analytics(out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    let total_co2 = sum_by(data.vehicles, |v| v.daily_co2_kg);

    writeln!(out, "Daily emissions:    {:.0} kg", total_co2)?;
    writeln!(out, "Monthly emissions:  {:.1} tonnes", total_co2 * 30.0 / 1000.0)?;
    writeln!(out)?;

    writeln!(out, "Top 15 emitters")?;
    writeln!(out, "{}", join_row!["  "; left("Vehicle ID", 15), right("Daily CO2 kg", 12)])?;
    for v in top_n_by(data.vehicles, 15, |v| v.daily_co2_kg) {
        writeln!(
            out,
            "{}",
            join_row!["  "; left(&v.id, 15), right(format!("{:.1}", v.daily_co2_kg), 12)]
        )?;
    }
    Ok(())
}

fn render_maintenance(out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    let total_cost = sum_by(data.vehicles, |v| v.maintenance_cost_total as f64);
    let fleet_cpkm = fleet_maintenance_cpkm(data.vehicles);
    let due_7 = service_due_within(data.vehicles, 0, 7);
    let due_15 = service_due_within(data.vehicles, 8, 15);
    let overdue = service_due_within(data.vehicles, i64::MIN, -1);

    writeln!(out, "Fleet maintenance CPKM:  {}", fmt_opt(fleet_cpkm))?;
    writeln!(out, "Total maintenance cost:  {:.2}L", total_cost / 100_000.0)?;
    writeln!(out, "Service due in 7 days:   {}", due_7)?;
    writeln!(out, "Service due in 15 days:  {}", due_15)?;
    writeln!(out, "Service overdue:         {}", overdue)?;
    writeln!(out)?;

    writeln!(out, "Top 10 CPKM vehicles")?;
    writeln!(out, "{}", join_row!["  "; left("Vehicle ID", 15), right("CPKM", 6)])?;
    for v in top_n_by(data.vehicles, 10, |v| v.maintenance_cpkm.unwrap_or(0.0)) {
        writeln!(
            out,
            "{}",
            join_row!["  "; left(&v.id, 15), right(fmt_opt(v.maintenance_cpkm), 6)]
        )?;
    }
    writeln!(out)?;

    writeln!(out, "Vehicle-wise maintenance")?;
    writeln!(
        out,
        "{}",
        join_row![
            "  ";
            left("Vehicle ID", 15),
            left("Model", 16),
            right("Odometer", 8),
            right("Cost", 8),
            right("CPKM", 6),
            right("Last svc", 8),
            right("Next svc", 8)
        ]
    )?;
    for v in top_n_by(data.vehicles, data.vehicles.len(), |v| {
        v.maintenance_cpkm.unwrap_or(0.0)
    }) {
        writeln!(
            out,
            "{}",
            join_row![
                "  ";
                left(&v.id, 15),
                left(v.model, 16),
                right(v.odometer_km, 8),
                right(v.maintenance_cost_total, 8),
                right(fmt_opt(v.maintenance_cpkm), 6),
                right(v.last_service_days_ago, 8),
                right(v.next_service_days, 8)
            ]
        )?;
    }
    Ok(())
}

fn render_cost_analysis(out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    let avg_cost = mean_by(data.vehicles, |v| v.operating_cost_per_km).unwrap_or(0.0);
    let total_maintenance = sum_by(data.vehicles, |v| v.maintenance_cost_total as f64);

    writeln!(out, "Avg cost per km:    {:.2}", avg_cost)?;
    writeln!(out, "Maintenance cost:   {:.2}L", total_maintenance / 100_000.0)?;
    writeln!(out)?;

    writeln!(out, "Vehicle-wise cost (by lifetime spend)")?;
    writeln!(
        out,
        "{}",
        join_row![
            "  ";
            left("Vehicle ID", 15),
            right("Op cost/km", 10),
            right("Maint CPKM", 10),
            right("Odometer", 8),
            right("Total cost", 14)
        ]
    )?;
    for v in top_n_by(data.vehicles, data.vehicles.len(), vehicle_total_cost) {
        writeln!(
            out,
            "{}",
            join_row![
                "  ";
                left(&v.id, 15),
                right(format!("{:.2}", v.operating_cost_per_km), 10),
                right(fmt_opt(v.maintenance_cpkm), 10),
                right(v.odometer_km, 8),
                right(format!("{:.0}", vehicle_total_cost(&v)), 14)
            ]
        )?;
    }
    Ok(())
}

fn render_compliance(out: &mut dyn Write, data: &Dashboard) -> io::Result<()> {
    let trained = training_complete_count(data.drivers);
    let clean = violation_free_count(data.drivers);
    let total_violations = sum_by(data.drivers, |d| d.violations as f64);
    let training_rate = if data.drivers.is_empty() {
        0.0
    } else {
        trained as f64 / data.drivers.len() as f64 * 100.0
    };

    writeln!(out, "Training completion:     {:.0}%", training_rate)?;
    writeln!(out, "Violation-free drivers:  {}/{}", clean, data.drivers.len())?;
    writeln!(out, "Total violations:        {:.0}", total_violations)?;
    Ok(())
}
