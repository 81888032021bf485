use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flight kinds, each with a fixed base fare
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FlightKind {
    Domestic,
    International,
}

impl FlightKind {
    pub fn base_fare(&self) -> f64 {
        match self {
            FlightKind::Domestic => 5000.0,
            FlightKind::International => 25000.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FlightKind::Domestic => "Domestic",
            FlightKind::International => "International",
        }
    }
}

impl fmt::Display for FlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlightKind {
    type Err = FlightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Domestic" => Ok(FlightKind::Domestic),
            "International" => Ok(FlightKind::International),
            other => Err(FlightError::UnknownKind(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FlightError {
    #[error("Unknown flight kind: {0}")]
    UnknownKind(String),

    #[error("Flight {flight_number} has {available} seats available out of {total}")]
    InvalidSeatCount {
        flight_number: String,
        available: u32,
        total: u32,
    },
}

/// A scheduled flight with a finite number of seats.
///
/// `available_seats` starts at `total_seats` and only ever goes down.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FlightRecord")]
pub struct Flight {
    pub flight_number: String,
    pub kind: FlightKind,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveTime,
    pub arrival_time: NaiveTime,
    total_seats: u32,
    available_seats: u32,
}

/// Serialized form of [`Flight`], checked before it becomes one
#[derive(Deserialize)]
struct FlightRecord {
    flight_number: String,
    kind: FlightKind,
    origin: String,
    destination: String,
    departure_time: NaiveTime,
    arrival_time: NaiveTime,
    total_seats: u32,
    available_seats: u32,
}

impl TryFrom<FlightRecord> for Flight {
    type Error = FlightError;

    fn try_from(record: FlightRecord) -> Result<Self, Self::Error> {
        if record.available_seats > record.total_seats {
            return Err(FlightError::InvalidSeatCount {
                flight_number: record.flight_number,
                available: record.available_seats,
                total: record.total_seats,
            });
        }

        Ok(Self {
            flight_number: record.flight_number,
            kind: record.kind,
            origin: record.origin,
            destination: record.destination,
            departure_time: record.departure_time,
            arrival_time: record.arrival_time,
            total_seats: record.total_seats,
            available_seats: record.available_seats,
        })
    }
}

impl Flight {
    pub fn new(
        flight_number: impl Into<String>,
        kind: FlightKind,
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_time: NaiveTime,
        arrival_time: NaiveTime,
        seats: u32,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            kind,
            origin: origin.into(),
            destination: destination.into(),
            departure_time,
            arrival_time,
            total_seats: seats,
            available_seats: seats,
        }
    }

    pub fn base_fare(&self) -> f64 {
        self.kind.base_fare()
    }

    pub fn total_seats(&self) -> u32 {
        self.total_seats
    }

    pub fn available_seats(&self) -> u32 {
        self.available_seats
    }

    pub fn is_sold_out(&self) -> bool {
        self.available_seats == 0
    }

    /// Share of seats sold, 0.0 for a flight without seats
    pub fn utilization(&self) -> f64 {
        if self.total_seats == 0 {
            0.0
        } else {
            1.0 - (self.available_seats as f64 / self.total_seats as f64)
        }
    }

    /// Take one seat. Returns false, leaving the count at 0, when sold out.
    pub(crate) fn book_seat(&mut self) -> bool {
        if self.available_seats > 0 {
            self.available_seats -= 1;
            true
        } else {
            false
        }
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} -> {} ({} - {})",
            self.flight_number,
            self.origin,
            self.destination,
            self.departure_time.format("%H:%M"),
            self.arrival_time.format("%H:%M"),
        )?;
        write!(f, "Available seats: {}/{}", self.available_seats, self.total_seats)
    }
}
