use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skyfare_catalog::FareTier;
use skyfare_shared::Masked;
use std::fmt;

/// Booking reference, rendered as `BK<counter>`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BK{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PassengerId(pub u64);

impl fmt::Display for PassengerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAX{}", self.0)
    }
}

/// Traveller details. Never modified once registered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passenger {
    pub name: String,
    pub passport_number: Masked<String>,
    pub contact_number: Masked<String>,
    pub email: Masked<String>,
}

impl Passenger {
    pub fn new(
        name: impl Into<String>,
        passport_number: impl Into<String>,
        contact_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            passport_number: Masked::new(passport_number.into()),
            contact_number: Masked::new(contact_number.into()),
            email: Masked::new(email.into()),
        }
    }
}

impl fmt::Display for Passenger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Passport: {}", self.passport_number)?;
        writeln!(f, "Contact: {}", self.contact_number)?;
        write!(f, "Email: {}", self.email)
    }
}

/// A seat request on one flight for one passenger.
///
/// The price is fixed when the booking is created. Confirmation happens at
/// most once, and only after a seat was taken from the flight's inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    id: BookingId,
    flight_number: String,
    passenger_id: PassengerId,
    fare_tier: FareTier,
    total_price: f64,
    confirmed: bool,
    created_at: DateTime<Utc>,
    confirmed_at: Option<DateTime<Utc>>,
}

impl Booking {
    pub(crate) fn new(
        id: BookingId,
        flight_number: String,
        passenger_id: PassengerId,
        fare_tier: FareTier,
        total_price: f64,
    ) -> Self {
        Self {
            id,
            flight_number,
            passenger_id,
            fare_tier,
            total_price,
            confirmed: false,
            created_at: Utc::now(),
            confirmed_at: None,
        }
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn passenger_id(&self) -> PassengerId {
        self.passenger_id
    }

    pub fn fare_tier(&self) -> FareTier {
        self.fare_tier
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn confirmed_at(&self) -> Option<DateTime<Utc>> {
        self.confirmed_at
    }

    pub(crate) fn confirm(&mut self) {
        self.confirmed = true;
        self.confirmed_at = Some(Utc::now());
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking ID: {}", self.id)?;
        writeln!(f, "Flight: {}", self.flight_number)?;
        writeln!(f, "Class: {}", self.fare_tier)?;
        writeln!(f, "Total Price: ${}", self.total_price)?;
        write!(f, "Status: {}", if self.confirmed { "Confirmed" } else { "Pending" })
    }
}
