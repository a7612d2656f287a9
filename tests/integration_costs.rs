//! Cost model properties over the full lookup tables.

mod common;

use common::{approx_eq, household_snapshot, snapshot_for};
use solar_payback::cost::{compute_results, generator_cost, grid_cost};
use solar_payback::tables::{PackageSize, ServiceTier, fuel_rate_lph, select_package};
use solar_payback::wizard::InputSnapshot;

#[test]
fn household_end_to_end() {
    let r = compute_results(&household_snapshot());

    assert!(approx_eq(r.generator.daily_energy_kwh, 20.0 * 4.0 / 24.0, 1e-9));
    assert_eq!(r.supply.fuel_liters_per_hour, 2.0);
    assert!(
        approx_eq(r.generator.daily_cost, 9873.97, 0.01),
        "generator daily cost {}",
        r.generator.daily_cost
    );

    // grid bills the tier's nominal kWh, not the consumption override
    assert_eq!(r.grid.daily_cost, 24.0 * 210.0);

    assert_eq!(r.solar.package, PackageSize::Medium);
    assert_eq!(r.solar.system_cost, 2_750_000.0);
    assert!(approx_eq(
        r.solar.payback_years,
        2_750_000.0 / r.generator.yearly_cost,
        1e-12
    ));
}

#[test]
fn grid_daily_cost_matches_table_for_every_tier() {
    for tier in ServiceTier::ALL {
        let band = tier.band();
        let r = grid_cost(&snapshot_for(tier));
        assert_eq!(r.daily_cost, band.avg_kwh_per_day * band.tariff_per_kwh, "tier {tier}");
        assert_eq!(r.monthly_cost, r.daily_cost * 30.0);
        assert_eq!(r.yearly_cost, r.daily_cost * 365.0);
        assert_eq!(r.daily_energy_kwh, band.avg_kwh_per_day);
    }
}

#[test]
fn grid_is_zero_without_tier() {
    let r = grid_cost(&InputSnapshot::default());
    assert_eq!(r.daily_cost, 0.0);
    assert_eq!(r.yearly_cost, 0.0);
    assert_eq!(r.daily_energy_kwh, 0.0);
}

#[test]
fn idle_generator_costs_only_maintenance() {
    let s = InputSnapshot {
        daily_generator_hours: vec![0.0; 7],
        ..household_snapshot()
    };
    let r = generator_cost(&s);
    assert_eq!(r.daily_cost, 100_000.0 / 365.0);
    assert_eq!(r.daily_energy_kwh, 0.0);
}

#[test]
fn generator_cost_grows_with_hours() {
    let mut previous = 0.0;
    for hours in [1.0, 2.0, 6.0, 12.0] {
        let s = InputSnapshot {
            daily_generator_hours: vec![hours; 7],
            ..household_snapshot()
        };
        let daily = generator_cost(&s).daily_cost;
        assert!(daily > previous);
        previous = daily;
    }
}

#[test]
fn fuel_table_covers_supported_sizes() {
    for kva in 3..=10 {
        let lph = fuel_rate_lph(f64::from(kva));
        assert!(approx_eq(lph, 0.4 * f64::from(kva), 1e-12), "{kva} kVA");
    }
    assert_eq!(fuel_rate_lph(2.0), 0.0);
    assert_eq!(fuel_rate_lph(11.0), 0.0);
}

#[test]
fn package_selection_by_generator_size() {
    assert_eq!(select_package(3.0).size, PackageSize::Small);
    assert_eq!(select_package(5.0).size, PackageSize::Medium);
    assert_eq!(select_package(5.0).capacity_kw, 5.0);
    assert_eq!(select_package(10.0).size, PackageSize::Large);
}

#[test]
fn no_savings_means_no_payback() {
    let s = InputSnapshot {
        daily_generator_hours: vec![0.0; 7],
        yearly_maintenance_cost: 0.0,
        ..household_snapshot()
    };
    let r = compute_results(&s);
    assert!(r.solar.payback_years.is_infinite());
    assert_eq!(r.solar.lifetime_savings, -2_750_000.0);
}

#[test]
fn report_lists_every_scenario() {
    let report = compute_results(&household_snapshot()).to_string();
    for label in [
        "Grid daily:",
        "Generator yearly:",
        "Solar package:",
        "Payback period:",
        "Lifetime savings:",
    ] {
        assert!(report.contains(label), "missing `{label}` in:\n{report}");
    }
}
