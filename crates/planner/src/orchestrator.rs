//! # Stay Planner
//!
//! This module coordinates a recommendation pass end to end:
//! 1. Snapshot the user's preferences (the caller assembles them)
//! 2. Rank the catalog on a blocking thread (CPU-bound, no I/O)
//! 3. Decorate the top results with road distances from the maps client
//! 4. Return the decorated list
//!
//! A failed maps call never costs the user the ranked list: the planner
//! logs a warning and returns the results without distance decoration.
//! Each failure is terminal for that one request; there are no retries.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

use catalog::{Catalog, Coordinate, Price, StayId};
use maps_client::{MapsClient, RouteSummary};
use recommender::{PreferenceSet, Recommender, ScoredStay, ScoringWeights};

/// Final recommendation returned to the presentation layer.
#[derive(Debug, Clone)]
pub struct StayRecommendation {
    pub id: StayId,
    pub name: String,
    pub area: String,
    pub price: Price,
    pub rating: Option<f64>,
    pub score: f64,
    /// Estimated road leg from the preference's reference coordinate,
    /// when one was set and the maps call succeeded.
    pub road: Option<RouteSummary>,
    pub explanation: String,
}

/// Coordinates catalog, recommender and maps client for the front end.
#[derive(Clone)]
pub struct StayPlanner {
    catalog: Arc<Catalog>,
    recommender: Arc<Recommender>,
    maps: MapsClient,
}

impl StayPlanner {
    /// Create a planner over a shared catalog with the given weight table.
    pub fn new(catalog: Arc<Catalog>, weights: &ScoringWeights, maps: MapsClient) -> Self {
        Self {
            catalog,
            recommender: Arc::new(Recommender::with_weights(weights)),
            maps,
        }
    }

    /// Main entry point: rank the catalog under a preference snapshot and
    /// return the top `limit` results, best first.
    pub async fn recommend(
        &self,
        prefs: PreferenceSet,
        limit: usize,
    ) -> Result<Vec<StayRecommendation>> {
        let start_time = Instant::now();
        let center = prefs.center;

        let mut ranked = self.rank_blocking(prefs).await?;
        ranked.truncate(limit);
        info!(
            "Ranked catalog in {:.2?}, keeping top {}",
            start_time.elapsed(),
            ranked.len()
        );

        let roads = self.decorate_with_roads(center, &ranked).await;
        let recommendations = ranked
            .into_iter()
            .zip(roads)
            .map(|(scored, road)| to_recommendation(scored, road))
            .collect();
        Ok(recommendations)
    }

    /// Town search: geocode the query, return records in matching areas
    /// ranked under the geocoded center; with no area match, fall back to
    /// the `limit` nearest records so the user always sees something.
    pub async fn search_town(&self, query: &str, limit: usize) -> Result<Vec<StayRecommendation>> {
        let center = self
            .maps
            .geocode(query)
            .await
            .with_context(|| format!("Could not resolve town {query:?}"))?;

        let prefs = PreferenceSet {
            center: Some(center),
            ..PreferenceSet::new()
        };
        let ranked = self.rank_blocking(prefs).await?;

        let wanted = query.trim().to_ascii_lowercase();
        let mut matching: Vec<ScoredStay> = ranked
            .iter()
            .filter(|s| s.stay.area.to_ascii_lowercase().contains(&wanted))
            .cloned()
            .collect();
        if matching.is_empty() {
            info!("No records in area matching {query:?}, falling back to nearest");
            let nearest_ids: Vec<StayId> = self
                .catalog
                .nearest(center, limit)
                .iter()
                .map(|s| s.id)
                .collect();
            matching = nearest_ids
                .iter()
                .filter_map(|id| ranked.iter().find(|s| s.stay.id == *id).cloned())
                .collect();
        }
        matching.truncate(limit);

        let roads = self.decorate_with_roads(Some(center), &matching).await;
        Ok(matching
            .into_iter()
            .zip(roads)
            .map(|(scored, road)| to_recommendation(scored, road))
            .collect())
    }

    /// Route from an origin (typically the user's position) to one record.
    pub async fn plan_route(
        &self,
        origin: Coordinate,
        stay_id: StayId,
    ) -> Result<(String, RouteSummary)> {
        let stay = self
            .catalog
            .get(stay_id)
            .ok_or_else(|| anyhow!("No accommodation with id {stay_id}"))?;
        let summary = self
            .maps
            .route(origin, stay.location)
            .await
            .with_context(|| format!("Routing to {} failed", stay.name))?;
        Ok((stay.name.clone(), summary))
    }

    /// Road distance from an origin to every record in the catalog,
    /// in catalog order.
    pub async fn distances_from(&self, origin: Coordinate) -> Result<Vec<(String, RouteSummary)>> {
        let destinations: Vec<Coordinate> =
            self.catalog.stays().iter().map(|s| s.location).collect();
        let rows = self
            .maps
            .distance_matrix(origin, &destinations)
            .await
            .context("Distance matrix request failed")?;
        Ok(self
            .catalog
            .stays()
            .iter()
            .map(|s| s.name.clone())
            .zip(rows)
            .collect())
    }

    /// The catalog this planner serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the pure ranking pass on a blocking thread.
    async fn rank_blocking(&self, prefs: PreferenceSet) -> Result<Vec<ScoredStay>> {
        let catalog = self.catalog.clone();
        let recommender = self.recommender.clone();
        tokio::task::spawn_blocking(move || recommender.rank(&catalog, &prefs))
            .await
            .context("Ranking task panicked")
    }

    /// Fetch road legs for the given results, one entry per result.
    ///
    /// Returns all-None when no reference coordinate is set or the maps
    /// call fails; the ranked list itself is never discarded.
    async fn decorate_with_roads(
        &self,
        center: Option<Coordinate>,
        ranked: &[ScoredStay],
    ) -> Vec<Option<RouteSummary>> {
        let Some(origin) = center else {
            return vec![None; ranked.len()];
        };
        let destinations: Vec<Coordinate> = ranked.iter().map(|s| s.stay.location).collect();
        match self.maps.distance_matrix(origin, &destinations).await {
            Ok(rows) => rows.into_iter().map(Some).collect(),
            Err(e) => {
                warn!("Distance decoration failed, returning list without distances: {e}");
                vec![None; ranked.len()]
            }
        }
    }
}

/// Flatten a scored record into the presentation shape.
fn to_recommendation(scored: ScoredStay, road: Option<RouteSummary>) -> StayRecommendation {
    let contributing: Vec<String> = scored
        .breakdown
        .iter()
        .filter(|t| t.value != 0.0)
        .map(|t| format!("{} {:+.1}", t.term, t.value))
        .collect();
    StayRecommendation {
        id: scored.stay.id,
        name: scored.stay.name,
        area: scored.stay.area,
        price: scored.stay.price,
        rating: scored.stay.rating,
        score: scored.score,
        road,
        explanation: contributing.join(", "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::loader;
    use recommender::Budget;

    fn test_planner() -> StayPlanner {
        let catalog = Arc::new(loader::load_embedded().expect("embedded catalog"));
        StayPlanner::new(catalog, &ScoringWeights::classic(), MapsClient::new())
    }

    #[tokio::test]
    async fn test_recommend_returns_sorted_limited_list() {
        let planner = test_planner();
        let prefs = PreferenceSet {
            budget: Some(Budget::Ceiling(1500.0)),
            min_rating: Some(4.0),
            ..PreferenceSet::new()
        };

        let recs = planner.recommend(prefs, 3).await.unwrap();
        assert_eq!(recs.len(), 3);
        for pair in recs.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // No reference coordinate set, so no road decoration.
        assert!(recs.iter().all(|r| r.road.is_none()));
        assert!(!recs[0].explanation.is_empty());
    }

    #[tokio::test]
    async fn test_recommend_decorates_distances_when_centered() {
        let planner = test_planner();
        let prefs = PreferenceSet {
            center: Some(Coordinate::new(18.198, 120.593)),
            ..PreferenceSet::new()
        };

        let recs = planner.recommend(prefs, 5).await.unwrap();
        assert!(recs.iter().all(|r| r.road.is_some()));
    }

    #[tokio::test]
    async fn test_maps_failure_keeps_the_ranked_list() {
        let planner = test_planner();
        // An out-of-range center makes the distance matrix fail; the
        // ranked list must still come back, just undecorated.
        let prefs = PreferenceSet {
            center: Some(Coordinate::new(95.0, 500.0)),
            ..PreferenceSet::new()
        };

        let recs = planner.recommend(prefs, 5).await.unwrap();
        assert_eq!(recs.len(), 5);
        assert!(recs.iter().all(|r| r.road.is_none()));
    }

    #[tokio::test]
    async fn test_search_town_prefers_matching_area() {
        let planner = test_planner();
        let recs = planner.search_town("Paoay", 5).await.unwrap();
        assert!(!recs.is_empty());
        assert!(recs.iter().all(|r| r.area == "Paoay"));
    }

    #[tokio::test]
    async fn test_search_town_falls_back_to_nearest() {
        let planner = test_planner();
        // Vintar is in the gazetteer but has no records in the catalog.
        let recs = planner.search_town("Vintar", 4).await.unwrap();
        assert_eq!(recs.len(), 4);
        assert!(recs.iter().all(|r| r.road.is_some()));
    }

    #[tokio::test]
    async fn test_search_unknown_town_is_an_error() {
        let planner = test_planner();
        assert!(planner.search_town("Vigan", 5).await.is_err());
    }

    #[tokio::test]
    async fn test_plan_route_to_known_and_unknown_ids() {
        let planner = test_planner();
        let origin = Coordinate::new(18.198, 120.593);

        let (name, summary) = planner.plan_route(origin, 2).await.unwrap();
        assert_eq!(name, "Paoay Heritage Inn");
        assert!(summary.distance_km > 0.0);

        assert!(planner.plan_route(origin, 999).await.is_err());
    }

    #[tokio::test]
    async fn test_distances_cover_the_whole_catalog() {
        let planner = test_planner();
        let origin = Coordinate::new(18.198, 120.593);
        let rows = planner.distances_from(origin).await.unwrap();
        assert_eq!(rows.len(), planner.catalog().len());
    }
}
