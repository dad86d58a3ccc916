mod cost;
mod energy;

pub use cost::{CostKind, annualize, derive_cost};
pub use energy::{EnergyResult, derive_energy};

use crate::core::unit::{DegreeCelsius, LitersPerMinute};
use crate::snapshot::SensorSnapshot;

/// User-supplied tariff and operating schedule, rebuilt for every
/// calculation request. Nothing here is persisted.
#[derive(Debug, Clone, Copy)]
pub struct Tariff {
    pub kind: CostKind,
    pub unit_price: f64,
    pub operating_hours_per_day: f64,
    pub operating_days_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostResult {
    pub instantaneous: f64,
    pub yearly: f64,
}

/// Output of the pipeline: the cost of running without heat recovery next
/// to the benefit gained from the recovery device, both under the same
/// tariff and snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostComparison {
    pub current: CostResult,
    pub recovery_benefit: CostResult,
}

/// Runs the energy → cost → annualization chain for both scenarios.
///
/// The current-operation delta is drain-in minus supply-in (heat discharged
/// without recovery); the recovery delta is supply-out minus supply-in
/// (heat gained on the supply side). Both use the snapshot's flow. The
/// asymmetry is part of the domain contract.
pub fn calculate(snapshot: &SensorSnapshot, tariff: &Tariff) -> CostComparison {
    let current_delta = snapshot.temp_drain_in - snapshot.temp_supply_in;
    let recovery_delta = snapshot.temp_supply_out - snapshot.temp_supply_in;

    CostComparison {
        current: scenario(current_delta, snapshot.flow, tariff),
        recovery_benefit: scenario(recovery_delta, snapshot.flow, tariff),
    }
}

fn scenario(temp_delta: DegreeCelsius, flow: LitersPerMinute, tariff: &Tariff) -> CostResult {
    let energy = derive_energy(temp_delta, flow);
    let instantaneous = derive_cost(&energy, tariff.kind, tariff.unit_price);
    let yearly = annualize(
        instantaneous,
        tariff.operating_hours_per_day,
        tariff.operating_days_per_year,
    );

    CostResult { instantaneous, yearly }
}
