use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabin class a passenger books into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FareTier {
    Economy,
    Business,
    First,
}

impl fmt::Display for FareTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FareTier::Economy => "Economy",
            FareTier::Business => "Business",
            FareTier::First => "First",
        };
        f.write_str(name)
    }
}

/// Fare policy applied when a booking is priced.
///
/// Each policy is a fixed multiplier table over the base fare. The discount
/// table is tabulated on its own and is not the standard table scaled down.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PricingPolicy {
    #[default]
    Standard,
    Discount,
}

impl PricingPolicy {
    pub fn multiplier(&self, tier: FareTier) -> f64 {
        match (self, tier) {
            (PricingPolicy::Standard, FareTier::Economy) => 1.0,
            (PricingPolicy::Standard, FareTier::Business) => 2.5,
            (PricingPolicy::Standard, FareTier::First) => 4.0,
            (PricingPolicy::Discount, FareTier::Economy) => 0.8,
            (PricingPolicy::Discount, FareTier::Business) => 2.0,
            (PricingPolicy::Discount, FareTier::First) => 3.2,
        }
    }

    pub fn calculate_price(&self, base_fare: f64, tier: FareTier) -> f64 {
        base_fare * self.multiplier(tier)
    }
}

impl fmt::Display for PricingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingPolicy::Standard => f.write_str("standard"),
            PricingPolicy::Discount => f.write_str("discount"),
        }
    }
}
