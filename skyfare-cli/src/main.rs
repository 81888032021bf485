mod app_config;

use anyhow::Context;
use app_config::Config;
use skyfare_catalog::{FareTier, PricingPolicy};
use skyfare_core::{RouteOptimizer, SeatAssigner};
use skyfare_order::{Passenger, ReservationManager};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Starting skyfare with {} pricing, {} flights",
        config.pricing.policy,
        config.flights.len()
    );

    let mut manager = ReservationManager::with_first_booking_id(config.pricing.policy, config.booking.first_id);
    for flight in &config.flights {
        manager.add_flight(flight.to_flight()?)?;
    }

    run_bookings(&mut manager)?;
    run_searches(&mut manager);
    run_routes(&config)?;
    run_seating(&config);
    run_pricing();

    Ok(())
}

fn run_bookings(manager: &mut ReservationManager) -> anyhow::Result<()> {
    println!("=== BOOKINGS ===");

    let john = manager.register_passenger(Passenger::new(
        "John Doe",
        "P123456",
        "+91-9876543210",
        "john@example.com",
    ))?;
    let jane = manager.register_passenger(Passenger::new(
        "Jane Smith",
        "P789012",
        "+1-555-0123",
        "jane@example.com",
    ))?;

    let requests = [(john, "AI101", FareTier::Economy), (jane, "AI301", FareTier::Business)];
    for (passenger, flight_number, tier) in requests {
        let id = match manager.create_booking(passenger, flight_number, tier) {
            Ok(booking) => booking.id(),
            Err(e) => {
                println!("Could not book {}: {}", flight_number, e);
                continue;
            }
        };
        if let Err(e) = manager.confirm_booking(id) {
            println!("Could not confirm {}: {}", id, e);
        }
    }

    println!("Available Flights:");
    for flight in manager.catalog().flights() {
        println!("{}", flight);
        println!("Base Price: ${}\n", flight.base_fare());
    }

    println!("All Bookings:");
    for booking in manager.bookings() {
        if let Some(passenger) = manager.passenger(booking.passenger_id()) {
            println!("{}", passenger);
        }
        println!("{}", booking);
        println!("------------------------");
    }

    println!("Total Revenue: ${}", manager.total_revenue());
    println!("{}\n", serde_json::to_string_pretty(&manager.revenue_report())?);
    Ok(())
}

fn run_searches(manager: &mut ReservationManager) {
    println!("=== SEARCH AND SORT ===");

    if let Some(flight) = manager.find_by_destination("Mumbai") {
        println!("Found flight to Mumbai: {}", flight.flight_number);
    }

    let affordable = manager.find_by_price_range(4000.0, 6000.0);
    println!("Flights in price range $4000-$6000: {}", affordable.len());

    match manager.find_cheapest_under_budget(10000.0) {
        Some(flight) => println!(
            "Best flight under $10000: {} (${})",
            flight.flight_number,
            flight.base_fare()
        ),
        None => println!("No flight under $10000"),
    }

    println!("Flights sorted by price:");
    for flight in manager.flights_by_price() {
        println!("{}: ${}", flight.flight_number, flight.base_fare());
    }

    manager.sort_bookings_by_price();
    println!("Bookings sorted by total price:");
    for booking in manager.bookings() {
        let name = manager
            .passenger(booking.passenger_id())
            .map(|p| p.name.as_str())
            .unwrap_or("unknown");
        println!("{}: ${}", name, booking.total_price());
    }
    println!();
}

fn run_routes(config: &Config) -> anyhow::Result<()> {
    println!("=== ROUTES ===");

    let mut optimizer = RouteOptimizer::new();
    for route in &config.routes {
        optimizer.add_route(&route.from, &route.to, route.price)?;
    }

    let cost = optimizer.cheapest_route("Delhi", "Bangalore");
    if cost.is_finite() {
        println!("Cheapest route Delhi -> Bangalore: ${}\n", cost);
    } else {
        println!("No route from Delhi to Bangalore\n");
    }
    Ok(())
}

fn run_seating(config: &Config) {
    println!("=== SEATING ===");

    let mut assigner = SeatAssigner::new(config.seating.rows, config.seating.cols);
    for _ in 0..5 {
        match assigner.assign_best_seat() {
            Some(seat) => println!("Assigned seat: {}", seat),
            None => println!("No seats available"),
        }
    }

    println!("Seat Map (O = occupied, . = available):");
    println!("{}\n", assigner.render());
}

fn run_pricing() {
    println!("=== PRICING POLICIES ===");

    let base_fare = 5000.0;
    println!("Base price: ${}", base_fare);
    for policy in [PricingPolicy::Standard, PricingPolicy::Discount] {
        println!(
            "{} Business class: ${}",
            policy,
            policy.calculate_price(base_fare, FareTier::Business)
        );
    }
}
