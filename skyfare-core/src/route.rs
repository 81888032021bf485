use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Cost reported by [`RouteOptimizer::cheapest_route`] when no path exists.
pub const UNREACHABLE: f64 = f64::INFINITY;

/// One direction of an undirected route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEdge {
    pub destination: String,
    pub price: f64,
}

/// Weighted undirected graph of cities used for route pricing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RouteOptimizer {
    graph: HashMap<String, Vec<RouteEdge>>,
}

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("Invalid route price {price} between {from} and {to}")]
    InvalidPrice {
        from: String,
        to: String,
        price: f64,
    },
}

/// Min-heap entry: `BinaryHeap` is a max-heap, so the ordering is reversed.
/// Ties on cost pop the lexicographically smaller city first.
#[derive(Debug)]
struct QueueEntry<'a> {
    cost: f64,
    city: &'a str,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.city.cmp(self.city))
    }
}

impl RouteOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route in both directions. Repeating a pair adds a parallel edge.
    pub fn add_route(&mut self, city_a: &str, city_b: &str, price: f64) -> Result<(), RouteError> {
        if !price.is_finite() || price < 0.0 {
            return Err(RouteError::InvalidPrice {
                from: city_a.to_string(),
                to: city_b.to_string(),
                price,
            });
        }

        self.graph.entry(city_a.to_string()).or_default().push(RouteEdge {
            destination: city_b.to_string(),
            price,
        });
        self.graph.entry(city_b.to_string()).or_default().push(RouteEdge {
            destination: city_a.to_string(),
            price,
        });

        tracing::debug!("Route added: {} <-> {} ({})", city_a, city_b, price);
        Ok(())
    }

    /// Cheapest total price from `start` to `end` (Dijkstra with lazy deletion).
    ///
    /// Returns [`UNREACHABLE`] when `end` is unknown or not connected to `start`.
    pub fn cheapest_route(&self, start: &str, end: &str) -> f64 {
        let mut best: HashMap<&str, f64> = self
            .graph
            .keys()
            .map(|city| (city.as_str(), UNREACHABLE))
            .collect();
        best.insert(start, 0.0);

        let mut queue = BinaryHeap::new();
        queue.push(QueueEntry { cost: 0.0, city: start });

        while let Some(QueueEntry { cost, city }) = queue.pop() {
            // Stale entry: a cheaper path to this city was already settled
            if cost > best.get(city).copied().unwrap_or(UNREACHABLE) {
                continue;
            }

            for edge in self.neighbors(city) {
                let candidate = cost + edge.price;
                let known = best.get(edge.destination.as_str()).copied().unwrap_or(UNREACHABLE);
                if candidate < known {
                    best.insert(edge.destination.as_str(), candidate);
                    queue.push(QueueEntry {
                        cost: candidate,
                        city: edge.destination.as_str(),
                    });
                }
            }
        }

        let cost = best.get(end).copied().unwrap_or(UNREACHABLE);
        if cost.is_finite() {
            tracing::debug!("Cheapest route {} -> {}: {}", start, end, cost);
        } else {
            tracing::debug!("No route from {} to {}", start, end);
        }
        cost
    }

    pub fn neighbors(&self, city: &str) -> &[RouteEdge] {
        self.graph.get(city).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.graph.contains_key(city)
    }

    pub fn city_count(&self) -> usize {
        self.graph.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn india_network() -> RouteOptimizer {
        let mut optimizer = RouteOptimizer::new();
        optimizer.add_route("Delhi", "Mumbai", 5000.0).unwrap();
        optimizer.add_route("Mumbai", "Bangalore", 3000.0).unwrap();
        optimizer.add_route("Delhi", "Bangalore", 8000.0).unwrap();
        optimizer
    }

    #[test]
    fn test_direct_and_two_hop_tie() {
        let optimizer = india_network();
        assert_eq!(optimizer.cheapest_route("Delhi", "Bangalore"), 8000.0);
        assert_eq!(optimizer.cheapest_route("Bangalore", "Delhi"), 8000.0);
        assert_eq!(optimizer.cheapest_route("Delhi", "Mumbai"), 5000.0);
    }

    #[test]
    fn test_cheaper_multi_hop_wins() {
        let mut optimizer = india_network();
        optimizer.add_route("Delhi", "Chennai", 1000.0).unwrap();
        optimizer.add_route("Chennai", "Bangalore", 1500.0).unwrap();
        assert_eq!(optimizer.cheapest_route("Delhi", "Bangalore"), 2500.0);
        assert_eq!(optimizer.cheapest_route("Mumbai", "Chennai"), 4500.0);
    }

    #[test]
    fn test_unknown_or_disconnected_is_unreachable() {
        let mut optimizer = india_network();
        assert_eq!(optimizer.cheapest_route("Delhi", "Unknown"), UNREACHABLE);
        assert!(optimizer.cheapest_route("Unknown", "Delhi").is_infinite());

        optimizer.add_route("London", "Paris", 900.0).unwrap();
        assert_eq!(optimizer.cheapest_route("Delhi", "Paris"), UNREACHABLE);
    }

    #[test]
    fn test_same_city_costs_nothing() {
        let optimizer = india_network();
        assert_eq!(optimizer.cheapest_route("Delhi", "Delhi"), 0.0);
        assert_eq!(optimizer.cheapest_route("Nowhere", "Nowhere"), 0.0);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut optimizer = RouteOptimizer::new();
        optimizer.add_route("Delhi", "Goa", 7000.0).unwrap();
        optimizer.add_route("Delhi", "Goa", 6500.0).unwrap();

        assert_eq!(optimizer.neighbors("Delhi").len(), 2);
        assert_eq!(optimizer.neighbors("Goa").len(), 2);
        assert_eq!(optimizer.cheapest_route("Goa", "Delhi"), 6500.0);
        assert_eq!(optimizer.city_count(), 2);
    }

    #[test]
    fn test_rejects_negative_price() {
        let mut optimizer = RouteOptimizer::new();
        assert!(optimizer.add_route("A", "B", -1.0).is_err());
        assert!(optimizer.add_route("A", "B", f64::NAN).is_err());
        assert!(!optimizer.contains_city("A"));
    }
}
