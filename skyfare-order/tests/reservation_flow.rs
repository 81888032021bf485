use chrono::NaiveTime;
use skyfare_catalog::{FareTier, Flight, FlightKind, PricingPolicy};
use skyfare_order::{BookingId, Passenger, ReservationError, ReservationManager};

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn demo_manager() -> ReservationManager {
    let mut manager = ReservationManager::new(PricingPolicy::Standard);
    manager
        .add_flight(Flight::new("AI101", FlightKind::Domestic, "Delhi", "Mumbai", time(10, 0), time(11, 30), 150))
        .unwrap();
    manager
        .add_flight(Flight::new("AI301", FlightKind::International, "Delhi", "New York", time(22, 0), time(6, 0), 300))
        .unwrap();
    manager
}

#[test]
fn test_book_confirm_and_report_revenue() {
    let mut manager = demo_manager();
    let john = manager
        .register_passenger(Passenger::new("John Doe", "P123456", "+91-9876543210", "john@example.com"))
        .unwrap();
    let jane = manager
        .register_passenger(Passenger::new("Jane Smith", "P789012", "+1-555-0123", "jane@example.com"))
        .unwrap();

    let first = manager.create_booking(john, "AI101", FareTier::Economy).unwrap().id();
    let second = manager.create_booking(jane, "AI301", FareTier::Business).unwrap().id();
    let third = manager.create_booking(jane, "AI101", FareTier::First).unwrap().id();
    assert_eq!((first, second, third), (BookingId(1000), BookingId(1001), BookingId(1002)));

    manager.confirm_booking(first).unwrap();
    manager.confirm_booking(second).unwrap();

    // The pending First booking is not revenue yet
    assert_eq!(manager.total_revenue(), 5000.0 + 62500.0);
    assert_eq!(manager.find_flight("AI101").unwrap().available_seats(), 149);

    let report = manager.revenue_report();
    assert_eq!(report["metrics"]["pending_value"], 20000.0);
}

#[test]
fn test_capacity_is_never_oversold() {
    let mut manager = ReservationManager::default();
    manager
        .add_flight(Flight::new("SG8", FlightKind::Domestic, "Pune", "Goa", time(7, 0), time(8, 0), 5))
        .unwrap();
    let pax = manager.register_passenger(Passenger::new("Ann", "X1", "", "")).unwrap();

    let ids: Vec<BookingId> = (0..6)
        .map(|_| manager.create_booking(pax, "SG8", FareTier::Economy).unwrap().id())
        .collect();

    for (n, id) in ids.iter().take(5).enumerate() {
        manager.confirm_booking(*id).unwrap();
        assert_eq!(manager.find_flight("SG8").unwrap().available_seats(), 5 - (n as u32 + 1));
    }

    assert!(matches!(manager.confirm_booking(ids[5]), Err(ReservationError::SoldOut(_))));
    assert_eq!(manager.find_flight("SG8").unwrap().available_seats(), 0);
    assert!(!manager.booking(ids[5]).unwrap().is_confirmed());
}

#[test]
fn test_searches() {
    let mut manager = demo_manager();
    manager
        .add_flight(Flight::new("6E22", FlightKind::Domestic, "Chennai", "Mumbai", time(6, 0), time(8, 0), 180))
        .unwrap();

    // First match in catalog order, not the cheapest
    assert_eq!(manager.find_by_destination("Mumbai").unwrap().flight_number, "AI101");
    assert!(manager.find_by_destination("Tokyo").is_none());

    let in_range: Vec<&str> = manager
        .find_by_price_range(4000.0, 6000.0)
        .into_iter()
        .map(|f| f.flight_number.as_str())
        .collect();
    assert_eq!(in_range, vec!["AI101", "6E22"]);
    assert_eq!(manager.find_by_price_range(5000.0, 25000.0).len(), 3);

    assert_eq!(manager.find_cheapest_under_budget(10000.0).unwrap().base_fare(), 5000.0);
    assert_eq!(manager.find_cheapest_under_budget(30000.0).unwrap().flight_number, "AI301");
    assert!(manager.find_cheapest_under_budget(1000.0).is_none());
}

#[test]
fn test_flights_by_price_leaves_catalog_order() {
    let mut manager = ReservationManager::default();
    let kinds = [
        ("I1", FlightKind::International),
        ("D1", FlightKind::Domestic),
        ("I2", FlightKind::International),
        ("D2", FlightKind::Domestic),
    ];
    for (number, kind) in kinds {
        manager
            .add_flight(Flight::new(number, kind, "A", "B", time(1, 0), time(2, 0), 10))
            .unwrap();
    }

    let fares: Vec<f64> = manager.flights_by_price().iter().map(|f| f.base_fare()).collect();
    assert_eq!(fares, vec![5000.0, 5000.0, 25000.0, 25000.0]);

    let catalog_order: Vec<&str> = manager
        .catalog()
        .flights()
        .iter()
        .map(|f| f.flight_number.as_str())
        .collect();
    assert_eq!(catalog_order, vec!["I1", "D1", "I2", "D2"]);
}

#[test]
fn test_sort_bookings_is_stable() {
    let mut manager = demo_manager();
    let pax = manager.register_passenger(Passenger::new("Ann", "X1", "", "")).unwrap();

    let tiers = [
        ("AI301", FareTier::Economy),  // 25000
        ("AI101", FareTier::First),    // 20000
        ("AI101", FareTier::Economy),  // 5000
        ("AI101", FareTier::Business), // 12500
        ("AI101", FareTier::Economy),  // 5000
        ("AI301", FareTier::Economy),  // 25000
    ];
    for (flight, tier) in tiers {
        manager.create_booking(pax, flight, tier).unwrap();
    }

    manager.sort_bookings_by_price();

    let order: Vec<(u64, f64)> = manager
        .bookings()
        .iter()
        .map(|b| (b.id().0, b.total_price()))
        .collect();
    assert_eq!(
        order,
        vec![
            (1002, 5000.0),
            (1004, 5000.0),
            (1003, 12500.0),
            (1001, 20000.0),
            (1000, 25000.0),
            (1005, 25000.0),
        ]
    );
}
