use crate::finance;
use crate::models::{Booking, BookingId, Passenger, PassengerId};
use crate::passengers::PassengerDirectory;
use skyfare_catalog::{CatalogError, FareTier, Flight, FlightCatalog, PricingPolicy};
use skyfare_core::{search, sort};

/// First counter value used for booking ids unless configured otherwise
pub const DEFAULT_FIRST_BOOKING_ID: u64 = 1000;

/// Owns the flight catalog, passenger directory and booking ledger, and
/// prices bookings with the active policy.
#[derive(Debug)]
pub struct ReservationManager {
    catalog: FlightCatalog,
    passengers: PassengerDirectory,
    bookings: Vec<Booking>,
    pricing: PricingPolicy,
    next_booking_id: u64,
}

impl ReservationManager {
    pub fn new(pricing: PricingPolicy) -> Self {
        Self::with_first_booking_id(pricing, DEFAULT_FIRST_BOOKING_ID)
    }

    pub fn with_first_booking_id(pricing: PricingPolicy, first_booking_id: u64) -> Self {
        Self {
            catalog: FlightCatalog::new(),
            passengers: PassengerDirectory::new(),
            bookings: Vec::new(),
            pricing,
            next_booking_id: first_booking_id,
        }
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        self.pricing
    }

    pub fn add_flight(&mut self, flight: Flight) -> Result<(), ReservationError> {
        self.catalog.add_flight(flight)?;
        Ok(())
    }

    pub fn register_passenger(&mut self, passenger: Passenger) -> Result<PassengerId, ReservationError> {
        self.passengers.register(passenger)
    }

    /// Create a pending booking priced by the active policy.
    ///
    /// Seats are not touched until the booking is confirmed.
    pub fn create_booking(
        &mut self,
        passenger_id: PassengerId,
        flight_number: &str,
        fare_tier: FareTier,
    ) -> Result<&Booking, ReservationError> {
        let flight = self
            .catalog
            .get(flight_number)
            .ok_or_else(|| ReservationError::FlightNotFound(flight_number.to_string()))?;
        if self.passengers.get(passenger_id).is_none() {
            return Err(ReservationError::PassengerNotFound(passenger_id));
        }

        let price = self.pricing.calculate_price(flight.base_fare(), fare_tier);
        let id = BookingId(self.next_booking_id);
        self.next_booking_id += 1;

        tracing::info!(
            "Booking created: {} on {} ({}, {} pricing) for {}",
            id,
            flight_number,
            fare_tier,
            self.pricing,
            price
        );

        self.bookings.push(Booking::new(
            id,
            flight_number.to_string(),
            passenger_id,
            fare_tier,
            price,
        ));
        self.bookings
            .last()
            .ok_or(ReservationError::BookingNotFound(id))
    }

    /// Confirm a booking by taking a seat on its flight.
    ///
    /// Fails without changing anything if the booking is already confirmed
    /// or the flight has no seats left.
    pub fn confirm_booking(&mut self, booking_id: BookingId) -> Result<(), ReservationError> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id() == booking_id)
            .ok_or(ReservationError::BookingNotFound(booking_id))?;

        if booking.is_confirmed() {
            tracing::warn!("Booking {} is already confirmed", booking_id);
            return Err(ReservationError::AlreadyConfirmed(booking_id));
        }

        let remaining = match self.catalog.reserve_seat(booking.flight_number()) {
            Ok(remaining) => remaining,
            Err(CatalogError::SoldOut { flight_number }) => {
                tracing::warn!("Booking {} rejected: {} is sold out", booking_id, flight_number);
                return Err(ReservationError::SoldOut(flight_number));
            }
            Err(e) => return Err(e.into()),
        };

        booking.confirm();
        tracing::info!(
            "Booking confirmed: {} on {} ({} seats left)",
            booking_id,
            booking.flight_number(),
            remaining
        );
        Ok(())
    }

    /// First flight in catalog order arriving at `city`
    pub fn find_by_destination(&self, city: &str) -> Option<&Flight> {
        self.catalog.flights().iter().find(|f| f.destination == city)
    }

    /// Flights whose base fare lies in `[min_price, max_price]`, in catalog order
    pub fn find_by_price_range(&self, min_price: f64, max_price: f64) -> Vec<&Flight> {
        search::filter_in_range(self.catalog.flights(), min_price, max_price, Flight::base_fare)
    }

    /// The most expensive flight whose base fare is still within `max_price`.
    pub fn find_cheapest_under_budget(&self, max_price: f64) -> Option<&Flight> {
        let mut by_price: Vec<&Flight> = self.catalog.flights().iter().collect();
        by_price.sort_by(|a, b| a.base_fare().total_cmp(&b.base_fare()));

        search::rightmost_at_most(&by_price, max_price, |f| f.base_fare()).map(|i| by_price[i])
    }

    /// Catalog flights ordered by base fare. The catalog itself keeps its order.
    pub fn flights_by_price(&self) -> Vec<&Flight> {
        let mut flights: Vec<&Flight> = self.catalog.flights().iter().collect();
        sort::quick_sort_by_key(&mut flights, |f| f.base_fare());
        flights
    }

    /// Reorder the ledger by total price; equal prices keep their order.
    pub fn sort_bookings_by_price(&mut self) {
        sort::merge_sort_by_key(&mut self.bookings, Booking::total_price);
    }

    /// Sum of prices over confirmed bookings
    pub fn total_revenue(&self) -> f64 {
        finance::total_revenue(&self.bookings)
    }

    pub fn revenue_report(&self) -> serde_json::Value {
        finance::revenue_report(&self.bookings, self.pricing)
    }

    pub fn find_flight(&self, flight_number: &str) -> Option<&Flight> {
        self.catalog.get(flight_number)
    }

    pub fn catalog(&self) -> &FlightCatalog {
        &self.catalog
    }

    pub fn passenger(&self, id: PassengerId) -> Option<&Passenger> {
        self.passengers.get(id)
    }

    pub fn booking(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id() == id)
    }

    /// Ledger in its current order
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

impl Default for ReservationManager {
    fn default() -> Self {
        Self::new(PricingPolicy::default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Passenger not found: {0}")]
    PassengerNotFound(PassengerId),

    #[error("Passenger already registered: {0}")]
    DuplicatePassenger(PassengerId),

    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Flight sold out: {0}")]
    SoldOut(String),

    #[error("Booking already confirmed: {0}")]
    AlreadyConfirmed(BookingId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use skyfare_catalog::FlightKind;

    fn flight(number: &str, kind: FlightKind, destination: &str, seats: u32) -> Flight {
        let t = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
        Flight::new(number, kind, "Delhi", destination, t, t, seats)
    }

    fn manager_with_passenger() -> (ReservationManager, PassengerId) {
        let mut manager = ReservationManager::new(PricingPolicy::Standard);
        manager.add_flight(flight("AI101", FlightKind::Domestic, "Mumbai", 2)).unwrap();
        manager.add_flight(flight("AI301", FlightKind::International, "New York", 300)).unwrap();
        let pax = manager
            .register_passenger(Passenger::new("John Doe", "P123456", "+91-9876543210", "john@example.com"))
            .unwrap();
        (manager, pax)
    }

    #[test]
    fn test_booking_lifecycle() {
        let (mut manager, pax) = manager_with_passenger();

        let booking = manager.create_booking(pax, "AI301", FareTier::Business).unwrap();
        assert_eq!(booking.id(), BookingId(1000));
        assert_eq!(booking.total_price(), 62500.0);
        assert!(!booking.is_confirmed());
        assert_eq!(manager.find_flight("AI301").unwrap().available_seats(), 300);

        manager.confirm_booking(BookingId(1000)).unwrap();
        assert!(manager.booking(BookingId(1000)).unwrap().is_confirmed());
        assert_eq!(manager.find_flight("AI301").unwrap().available_seats(), 299);
    }

    #[test]
    fn test_second_confirmation_is_rejected() {
        let (mut manager, pax) = manager_with_passenger();
        let id = manager.create_booking(pax, "AI101", FareTier::Economy).unwrap().id();

        manager.confirm_booking(id).unwrap();
        let result = manager.confirm_booking(id);
        assert!(matches!(result, Err(ReservationError::AlreadyConfirmed(_))));
        assert_eq!(manager.find_flight("AI101").unwrap().available_seats(), 1);
    }

    #[test]
    fn test_sold_out_leaves_booking_pending() {
        let (mut manager, pax) = manager_with_passenger();
        let ids: Vec<BookingId> = (0..3)
            .map(|_| manager.create_booking(pax, "AI101", FareTier::Economy).unwrap().id())
            .collect();

        manager.confirm_booking(ids[0]).unwrap();
        manager.confirm_booking(ids[1]).unwrap();
        assert!(matches!(manager.confirm_booking(ids[2]), Err(ReservationError::SoldOut(_))));

        assert!(!manager.booking(ids[2]).unwrap().is_confirmed());
        assert_eq!(manager.find_flight("AI101").unwrap().available_seats(), 0);
        assert_eq!(manager.total_revenue(), 10000.0);
    }

    #[test]
    fn test_unknown_references() {
        let (mut manager, pax) = manager_with_passenger();

        assert!(matches!(
            manager.create_booking(pax, "ZZ999", FareTier::First),
            Err(ReservationError::FlightNotFound(_))
        ));
        assert!(matches!(
            manager.create_booking(PassengerId(99), "AI101", FareTier::First),
            Err(ReservationError::PassengerNotFound(_))
        ));
        assert!(matches!(
            manager.confirm_booking(BookingId(5)),
            Err(ReservationError::BookingNotFound(_))
        ));
        assert!(manager.bookings().is_empty());

        // Failed attempts do not consume ids
        let id = manager.create_booking(pax, "AI101", FareTier::First).unwrap().id();
        assert_eq!(id, BookingId(1000));
    }

    #[test]
    fn test_discount_policy_prices_bookings() {
        let mut manager = ReservationManager::with_first_booking_id(PricingPolicy::Discount, 1);
        manager.add_flight(flight("AI101", FlightKind::Domestic, "Mumbai", 10)).unwrap();
        let pax = manager.register_passenger(Passenger::new("Jane", "P1", "", "")).unwrap();

        let booking = manager.create_booking(pax, "AI101", FareTier::Business).unwrap();
        assert_eq!(booking.id(), BookingId(1));
        assert_eq!(booking.total_price(), 10000.0);
    }

    #[test]
    fn test_duplicate_flight_is_rejected() {
        let (mut manager, _) = manager_with_passenger();
        let result = manager.add_flight(flight("AI101", FlightKind::International, "Paris", 5));
        assert!(matches!(result, Err(ReservationError::Catalog(CatalogError::DuplicateFlight(_)))));
        assert_eq!(manager.catalog().len(), 2);
    }
}
