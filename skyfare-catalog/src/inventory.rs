use crate::flight::Flight;
use std::collections::HashMap;

/// Flight catalog and seat inventory.
///
/// Flights live in insertion order; `index` maps a flight number to its slot.
#[derive(Debug, Default)]
pub struct FlightCatalog {
    flights: Vec<Flight>,
    index: HashMap<String, usize>,
}

impl FlightCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flight to the catalog. Flight numbers must be unique.
    pub fn add_flight(&mut self, flight: Flight) -> Result<(), CatalogError> {
        if self.index.contains_key(&flight.flight_number) {
            return Err(CatalogError::DuplicateFlight(flight.flight_number));
        }

        tracing::info!(
            "Flight added: {} {} -> {} ({}, {} seats)",
            flight.flight_number,
            flight.origin,
            flight.destination,
            flight.kind,
            flight.total_seats()
        );
        self.index.insert(flight.flight_number.clone(), self.flights.len());
        self.flights.push(flight);
        Ok(())
    }

    pub fn get(&self, flight_number: &str) -> Option<&Flight> {
        self.index.get(flight_number).map(|&slot| &self.flights[slot])
    }

    /// All flights in insertion order
    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Sell one seat on a flight. Returns the seats left afterwards.
    pub fn reserve_seat(&mut self, flight_number: &str) -> Result<u32, CatalogError> {
        let slot = *self
            .index
            .get(flight_number)
            .ok_or_else(|| CatalogError::NotFound(flight_number.to_string()))?;
        let flight = &mut self.flights[slot];

        if !flight.book_seat() {
            return Err(CatalogError::SoldOut {
                flight_number: flight_number.to_string(),
            });
        }

        Ok(flight.available_seats())
    }

    pub fn get_utilization(&self, flight_number: &str) -> Option<f64> {
        self.get(flight_number).map(Flight::utilization)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Flight already in catalog: {0}")]
    DuplicateFlight(String),

    #[error("Flight not found: {0}")]
    NotFound(String),

    #[error("Flight sold out: {flight_number}")]
    SoldOut {
        flight_number: String,
    },
}
