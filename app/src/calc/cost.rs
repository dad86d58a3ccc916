use serde::Deserialize;

use super::energy::EnergyResult;

/// The tariff kind selected by the user. Electricity is priced per kWh and
/// therefore uses the kW representation; every fuel kind is priced per kg
/// and uses the equivalent mass flow. The Japanese labels are what the
/// legacy client sends and are kept as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum CostKind {
    #[serde(rename = "electricity", alias = "電気")]
    Electricity,
    #[serde(rename = "propane", alias = "プロパンガス")]
    Propane,
    #[serde(rename = "kerosene", alias = "灯油")]
    Kerosene,
    #[serde(rename = "heavy-oil", alias = "重油")]
    HeavyOil,
    #[serde(rename = "city-gas", alias = "ガス(13A)")]
    CityGas,
}

/// Hourly cost of the given energy transfer under the tariff kind.
///
/// A zero or negative unit price is accepted and simply produces a zero or
/// negative cost; tariff sanity is a presentation concern.
pub fn derive_cost(energy: &EnergyResult, kind: CostKind, unit_price: f64) -> f64 {
    match kind {
        CostKind::Electricity => energy.energy_kilowatts * unit_price,
        _ => energy.mass_flow_kg_per_hour * unit_price,
    }
}

/// Scales an hourly cost by the operating schedule.
pub fn annualize(cost_per_hour: f64, hours_per_day: f64, days_per_year: f64) -> f64 {
    cost_per_hour * hours_per_day * days_per_year
}

#[cfg(test)]
mod tests {
    use super::*;

    fn energy() -> EnergyResult {
        EnergyResult {
            energy_kilojoules: 1.0,
            energy_kilowatts: 5.0,
            mass_flow_kg_per_hour: 100.0,
        }
    }

    #[test]
    fn test_electricity_uses_kilowatts_only() {
        let cost = derive_cost(&energy(), CostKind::Electricity, 3.0);
        assert_eq!(cost, 15.0);
    }

    #[test]
    fn test_fuels_use_mass_flow_only() {
        for kind in [CostKind::Propane, CostKind::Kerosene, CostKind::HeavyOil, CostKind::CityGas] {
            let cost = derive_cost(&energy(), kind, 3.0);
            assert_eq!(cost, 300.0);
        }
    }

    #[test]
    fn test_zero_and_negative_unit_price_are_accepted() {
        assert_eq!(derive_cost(&energy(), CostKind::Propane, 0.0), 0.0);
        assert_eq!(derive_cost(&energy(), CostKind::Electricity, -2.0), -10.0);
    }

    #[test]
    fn test_annualize() {
        assert_eq!(annualize(835.34, 8.0, 365.0), 835.34 * 8.0 * 365.0);
        assert_eq!(annualize(0.0, 8.0, 365.0), 0.0);
        assert_eq!(annualize(10.0, 0.0, 365.0), 0.0);
        assert_eq!(annualize(10.0, 24.0, 0.0), 0.0);
    }

    #[test]
    fn test_wire_tokens() {
        let kind: CostKind = serde_json::from_str("\"electricity\"").unwrap();
        assert_eq!(kind, CostKind::Electricity);

        let kind: CostKind = serde_json::from_str("\"heavy-oil\"").unwrap();
        assert_eq!(kind, CostKind::HeavyOil);

        // legacy client labels
        let kind: CostKind = serde_json::from_str("\"電気\"").unwrap();
        assert_eq!(kind, CostKind::Electricity);

        let kind: CostKind = serde_json::from_str("\"ガス(13A)\"").unwrap();
        assert_eq!(kind, CostKind::CityGas);

        assert!(serde_json::from_str::<CostKind>("\"diesel\"").is_err());
    }
}
