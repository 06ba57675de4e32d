use serde::{Deserialize, Serialize};
use std::fmt;

/// Product category a sample belongs to. Drives which concentration
/// formula applies (chlorine bleach has its own mg/L-based variant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    ChlorineBleach,
    PeroxideBleach,
    Disinfectant,
    Antifungal,
    Multipurpose,
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductCategory::ChlorineBleach => write!(f, "chlorine bleach"),
            ProductCategory::PeroxideBleach => write!(f, "peroxide bleach"),
            ProductCategory::Disinfectant => write!(f, "disinfectant"),
            ProductCategory::Antifungal => write!(f, "antifungal"),
            ProductCategory::Multipurpose => write!(f, "multipurpose"),
        }
    }
}

impl ProductCategory {
    pub fn from_str_loose(s: &str) -> Option<ProductCategory> {
        let lower = s.trim().to_lowercase();
        if lower.contains("chlorine") || lower.contains("cloro") {
            Some(ProductCategory::ChlorineBleach)
        } else if lower.contains("peroxide") || lower.contains("perox") {
            Some(ProductCategory::PeroxideBleach)
        } else if lower.contains("disinf") {
            Some(ProductCategory::Disinfectant)
        } else if lower.contains("fung") {
            Some(ProductCategory::Antifungal)
        } else if lower.contains("multi") {
            Some(ProductCategory::Multipurpose)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "%")]
    #[default]
    Percent,
    #[serde(rename = "mol/L")]
    MolPerL,
    #[serde(rename = "kg")]
    Kg,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Percent => write!(f, "%"),
            Unit::MolPerL => write!(f, "mol/L"),
            Unit::Kg => write!(f, "kg"),
        }
    }
}

/// Display unit for reaction quantities. The balancer computes in kg;
/// conversion assumes density 1 kg/L, so liters are an identity and
/// milliliters scale by 1000. Presentation-layer concern only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    #[serde(rename = "kg")]
    #[default]
    Kg,
    #[serde(rename = "l")]
    Liters,
    #[serde(rename = "ml")]
    Milliliters,
}

impl MassUnit {
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            MassUnit::Kg | MassUnit::Liters => kg,
            MassUnit::Milliliters => kg * 1000.0,
        }
    }

    pub fn from_str_loose(s: &str) -> Option<MassUnit> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Some(MassUnit::Kg),
            "l" | "liter" | "liters" => Some(MassUnit::Liters),
            "ml" => Some(MassUnit::Milliliters),
            _ => None,
        }
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassUnit::Kg => write!(f, "kg"),
            MassUnit::Liters => write!(f, "L"),
            MassUnit::Milliliters => write!(f, "mL"),
        }
    }
}

/// Interpretation of a mass-balance difference (inlet minus outlet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MassBalanceStatus {
    Accumulation,
    Loss,
    Equilibrium,
}

impl fmt::Display for MassBalanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MassBalanceStatus::Accumulation => write!(f, "accumulation in the system"),
            MassBalanceStatus::Loss => write!(f, "loss from the system"),
            MassBalanceStatus::Equilibrium => write!(f, "system in equilibrium"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str_loose() {
        assert_eq!(
            ProductCategory::from_str_loose("Chlorine Bleach"),
            Some(ProductCategory::ChlorineBleach)
        );
        assert_eq!(
            ProductCategory::from_str_loose("peroxide"),
            Some(ProductCategory::PeroxideBleach)
        );
        assert_eq!(ProductCategory::from_str_loose("soap"), None);
    }

    #[test]
    fn test_mass_unit_conversion() {
        assert_eq!(MassUnit::Kg.from_kg(2.5), 2.5);
        assert_eq!(MassUnit::Liters.from_kg(2.5), 2.5);
        assert_eq!(MassUnit::Milliliters.from_kg(2.5), 2500.0);
    }

    #[test]
    fn test_mass_unit_from_str() {
        assert_eq!(MassUnit::from_str_loose("mL"), Some(MassUnit::Milliliters));
        assert_eq!(MassUnit::from_str_loose("L"), Some(MassUnit::Liters));
        assert_eq!(MassUnit::from_str_loose("stone"), None);
    }

    #[test]
    fn test_category_serde_snake_case() {
        let json = serde_json::to_string(&ProductCategory::ChlorineBleach).unwrap();
        assert_eq!(json, "\"chlorine_bleach\"");
    }
}
