use crate::manager::ReservationError;
use crate::models::{Passenger, PassengerId};
use std::collections::HashMap;

/// Registered passengers, looked up by the id bookings carry.
#[derive(Debug, Default)]
pub struct PassengerDirectory {
    passengers: HashMap<PassengerId, Passenger>,
    next_id: u64,
}

impl PassengerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a passenger. A passport number can only be registered once.
    pub fn register(&mut self, passenger: Passenger) -> Result<PassengerId, ReservationError> {
        if let Some(existing) = self.find_by_passport(passenger.passport_number.expose()) {
            return Err(ReservationError::DuplicatePassenger(existing));
        }

        self.next_id += 1;
        let id = PassengerId(self.next_id);
        tracing::info!("Passenger registered: {} ({})", id, passenger.name);
        self.passengers.insert(id, passenger);
        Ok(id)
    }

    pub fn get(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(&id)
    }

    pub fn find_by_passport(&self, passport_number: &str) -> Option<PassengerId> {
        self.passengers
            .iter()
            .find(|(_, p)| p.passport_number.expose() == passport_number)
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }
}
