pub mod flight;
pub mod pricing;
pub mod inventory;

pub use flight::{Flight, FlightError, FlightKind};
pub use pricing::{FareTier, PricingPolicy};
pub use inventory::{CatalogError, FlightCatalog};
