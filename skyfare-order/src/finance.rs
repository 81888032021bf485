use crate::models::Booking;
use chrono::Utc;
use skyfare_catalog::PricingPolicy;

/// Revenue from confirmed bookings. Pending bookings count for nothing.
pub fn total_revenue(bookings: &[Booking]) -> f64 {
    bookings
        .iter()
        .filter(|b| b.is_confirmed())
        .map(Booking::total_price)
        .sum()
}

/// Summary of the ledger split into confirmed and pending value
pub fn revenue_report(bookings: &[Booking], policy: PricingPolicy) -> serde_json::Value {
    let mut confirmed_revenue = 0.0;
    let mut pending_value = 0.0;
    let mut confirmed_count = 0;
    let mut pending_count = 0;

    for booking in bookings {
        if booking.is_confirmed() {
            confirmed_revenue += booking.total_price();
            confirmed_count += 1;
        } else {
            pending_value += booking.total_price();
            pending_count += 1;
        }
    }

    serde_json::json!({
        "report_date": Utc::now().to_rfc3339(),
        "pricing_policy": policy,
        "metrics": {
            "confirmed_revenue": confirmed_revenue,
            "pending_value": pending_value,
            "confirmed_bookings": confirmed_count,
            "pending_bookings": pending_count
        }
    })
}
