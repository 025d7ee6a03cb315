//! Mapping-service client for place lookup, routing and distance matrices.
//!
//! The original front end delegated these to a hosted mapping SDK; here the
//! boundary keeps the same request/response shape — async calls with explicit
//! success/failure results — but is served by a deterministic offline
//! implementation: a gazetteer of Ilocos Norte municipalities and road
//! estimates derived from great-circle distance. Callers treat every call as
//! fallible and must survive a failure without losing their current state.

use catalog::Coordinate;
use thiserror::Error;
use tracing::debug;

/// Assumed ratio of road distance to great-circle distance.
const ROAD_FACTOR: f64 = 1.3;

/// Assumed average driving speed on provincial roads, km/h.
const AVG_SPEED_KMH: f64 = 40.0;

/// Gazetteer of Ilocos Norte municipalities (town proper coordinates).
const GAZETTEER: &[(&str, f64, f64)] = &[
    ("Laoag", 18.1978, 120.5936),
    ("Batac", 18.0554, 120.5649),
    ("Paoay", 18.0620, 120.5220),
    ("Currimao", 18.0180, 120.4890),
    ("Badoc", 17.9250, 120.4750),
    ("Sarrat", 18.1600, 120.6400),
    ("Dingras", 18.1040, 120.6980),
    ("Vintar", 18.2290, 120.6480),
    ("Pasuquin", 18.3330, 120.6170),
    ("Bangui", 18.5350, 120.7670),
    ("Burgos", 18.5050, 120.6480),
    ("Pagudpud", 18.5660, 120.7870),
    ("Adams", 18.4610, 120.9010),
];

/// Errors that can occur when talking to the mapping service.
#[derive(Error, Debug)]
pub enum MapsError {
    #[error("No place found for query: {0}")]
    PlaceNotFound(String),

    #[error("Invalid coordinate ({lat}, {lng})")]
    InvalidCoordinate { lat: f64, lng: f64 },
}

/// Summary of one routing or distance-matrix leg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteSummary {
    /// Estimated road distance in kilometres.
    pub distance_km: f64,
    /// Estimated driving duration in minutes.
    pub duration_min: f64,
}

/// Client for the mapping service.
///
/// Cheap to clone; holds no connection state.
#[derive(Debug, Clone, Default)]
pub struct MapsClient;

impl MapsClient {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a town name to a coordinate.
    ///
    /// Matches gazetteer entries case-insensitively, accepting a prefix of
    /// the municipality name (the way an autocomplete box would).
    pub async fn geocode(&self, query: &str) -> Result<Coordinate, MapsError> {
        let wanted = query.trim().to_ascii_lowercase();
        if wanted.is_empty() {
            return Err(MapsError::PlaceNotFound(query.to_string()));
        }
        debug!("Geocoding place query: {query}");
        GAZETTEER
            .iter()
            .find(|(name, _, _)| name.to_ascii_lowercase().starts_with(&wanted))
            .map(|&(_, lat, lng)| Coordinate::new(lat, lng))
            .ok_or_else(|| MapsError::PlaceNotFound(query.to_string()))
    }

    /// Estimate a driving route between two coordinates.
    pub async fn route(
        &self,
        origin: Coordinate,
        destination: Coordinate,
    ) -> Result<RouteSummary, MapsError> {
        for point in [origin, destination] {
            if !point.is_valid() {
                return Err(MapsError::InvalidCoordinate {
                    lat: point.lat,
                    lng: point.lng,
                });
            }
        }
        let distance_km = origin.distance_km(destination) * ROAD_FACTOR;
        let duration_min = distance_km / AVG_SPEED_KMH * 60.0;
        debug!(
            "Routed {:.1} km (~{:.0} min) from ({}, {}) to ({}, {})",
            distance_km, duration_min, origin.lat, origin.lng, destination.lat, destination.lng
        );
        Ok(RouteSummary {
            distance_km,
            duration_min,
        })
    }

    /// Estimate routes from one origin to many destinations.
    ///
    /// Results come back in destination order, one summary per input.
    pub async fn distance_matrix(
        &self,
        origin: Coordinate,
        destinations: &[Coordinate],
    ) -> Result<Vec<RouteSummary>, MapsError> {
        let mut rows = Vec::with_capacity(destinations.len());
        for &dest in destinations {
            rows.push(self.route(origin, dest).await?);
        }
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_geocode_known_town() {
        let client = MapsClient::new();
        let laoag = client.geocode("Laoag").await.unwrap();
        assert!((laoag.lat - 18.1978).abs() < 1e-6);

        // Prefix and casing both accepted, like an autocomplete box.
        let pagudpud = client.geocode("pagud").await.unwrap();
        assert!((pagudpud.lng - 120.787).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_geocode_unknown_town_fails() {
        let client = MapsClient::new();
        let err = client.geocode("Vigan").await.unwrap_err();
        assert!(matches!(err, MapsError::PlaceNotFound(_)));
        assert!(client.geocode("   ").await.is_err());
    }

    #[tokio::test]
    async fn test_route_is_at_least_great_circle() {
        let client = MapsClient::new();
        let laoag = Coordinate::new(18.198, 120.593);
        let paoay = Coordinate::new(18.062, 120.522);

        let summary = client.route(laoag, paoay).await.unwrap();
        assert!(summary.distance_km >= laoag.distance_km(paoay));
        assert!(summary.duration_min > 0.0);
    }

    #[tokio::test]
    async fn test_route_rejects_invalid_coordinates() {
        let client = MapsClient::new();
        let err = client
            .route(Coordinate::new(95.0, 0.0), Coordinate::new(18.0, 120.5))
            .await
            .unwrap_err();
        assert!(matches!(err, MapsError::InvalidCoordinate { .. }));
    }

    #[tokio::test]
    async fn test_distance_matrix_preserves_order() {
        let client = MapsClient::new();
        let origin = Coordinate::new(18.198, 120.593);
        let destinations = vec![
            Coordinate::new(18.062, 120.522),
            Coordinate::new(18.566, 120.787),
            origin,
        ];

        let rows = client.distance_matrix(origin, &destinations).await.unwrap();
        assert_eq!(rows.len(), 3);
        // Third destination is the origin itself.
        assert!(rows[2].distance_km.abs() < 1e-9);
        assert!(rows[1].distance_km > rows[0].distance_km);
    }
}
