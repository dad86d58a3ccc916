use crate::core::unit::{DegreeCelsius, LitersPerMinute};

const WATER_DENSITY: f64 = 1000.0; // kg/m³
const WATER_SPECIFIC_HEAT: f64 = 4.186; // kJ/(kg·°C)

// Reconciles the flow meter's native l/min with the SI inputs of the heat formula.
const FLOW_UNIT_FACTOR: f64 = 1e-6;

const KJ_TO_KW: f64 = 0.278 * 60.0;

// Latent heat of vaporization of water (kJ/kg). The kW figure divided by it
// gives the equivalent condensate mass flow used for fuel-based tariffs.
const LATENT_HEAT_OF_VAPORIZATION: f64 = 2257.0;

/// Three equivalent representations of one instantaneous energy transfer.
/// Values keep full precision; rendering rounds at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyResult {
    pub energy_kilojoules: f64,
    pub energy_kilowatts: f64,
    pub mass_flow_kg_per_hour: f64,
}

/// Derives the recovered heat from a temperature delta and a flow rate.
///
/// Total over finite inputs: a zero delta or zero flow yields zero energy,
/// never an error.
pub fn derive_energy(temp_delta: DegreeCelsius, flow: LitersPerMinute) -> EnergyResult {
    let energy_kilojoules =
        f64::from(temp_delta) * f64::from(flow) * WATER_DENSITY * WATER_SPECIFIC_HEAT * FLOW_UNIT_FACTOR;
    let energy_kilowatts = energy_kilojoules * KJ_TO_KW;
    let mass_flow_kg_per_hour = energy_kilowatts / LATENT_HEAT_OF_VAPORIZATION * 3600.0;

    EnergyResult {
        energy_kilojoules,
        energy_kilowatts,
        mass_flow_kg_per_hour,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_representations_stay_proportional() {
        let energy = derive_energy(DegreeCelsius(25.0), LitersPerMinute(10.0));

        assert!((energy.energy_kilowatts - energy.energy_kilojoules * 16.68).abs() < 1e-12);
        assert!((energy.mass_flow_kg_per_hour - energy.energy_kilowatts * 3600.0 / 2257.0).abs() < 1e-12);
    }

    #[test]
    fn test_known_reading() {
        let energy = derive_energy(DegreeCelsius(25.0), LitersPerMinute(10.0));

        assert!((energy.energy_kilojoules - 1.0465).abs() < 1e-9);
        assert!((energy.energy_kilowatts - 1.0465 * 16.68).abs() < 1e-9);
    }

    #[test]
    fn test_zero_delta_yields_zero_energy() {
        for flow in [0.0, 1.0, 123.45, -7.0] {
            let energy = derive_energy(DegreeCelsius(0.0), LitersPerMinute(flow));
            assert_eq!(energy.energy_kilojoules, 0.0);
            assert_eq!(energy.energy_kilowatts, 0.0);
            assert_eq!(energy.mass_flow_kg_per_hour, 0.0);
        }
    }

    #[test]
    fn test_zero_flow_yields_zero_energy() {
        let energy = derive_energy(DegreeCelsius(42.0), LitersPerMinute(0.0));
        assert_eq!(energy.energy_kilojoules, 0.0);
        assert_eq!(energy.energy_kilowatts, 0.0);
        assert_eq!(energy.mass_flow_kg_per_hour, 0.0);
    }

    #[test]
    fn test_negative_delta_is_accepted() {
        let energy = derive_energy(DegreeCelsius(-10.0), LitersPerMinute(5.0));
        assert!(energy.energy_kilojoules < 0.0);
        assert!(energy.energy_kilowatts < 0.0);
        assert!(energy.mass_flow_kg_per_hour < 0.0);
    }
}
