//! Route queries.
//!
//! Ties the engine, reconstruction, fares and directions together behind a
//! single call: given two stations and the fare flags, return the fastest
//! route as plain data.

use serde::Serialize;
use tracing::debug;

use crate::domain::{Station, StationId};
use crate::network::Network;

use super::config::PlannerConfig;
use super::directions::{RouteWarning, Step, directions};
use super::dijkstra::shortest_paths;
use super::fare::{FareDay, apply_card_discount, fare};
use super::path::{dedup_by_name, path_distance, reconstruct};

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Station id is not part of the network
    #[error("invalid station {0}")]
    InvalidStation(StationId),

    /// Start and end are the same station
    #[error("start and end are the same station ({0})")]
    SameStation(StationId),

    /// No connection exists between the stations
    #[error("no route from {start} to {end}")]
    NoRouteFound { start: StationId, end: StationId },

    /// Shortest-path links are inconsistent; indicates a bug or corrupt network
    #[error("internal error: path from {start} to {end} could not be reconstructed")]
    Unreachable { start: StationId, end: StationId },
}

/// A route query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuery {
    pub start: StationId,
    pub end: StationId,
    pub is_holiday: bool,
    pub has_card: bool,
}

impl RouteQuery {
    /// Create a query with regular fares and no travel card.
    pub fn new(start: StationId, end: StationId) -> Self {
        Self {
            start,
            end,
            is_holiday: false,
            has_card: false,
        }
    }

    pub fn holiday(mut self, is_holiday: bool) -> Self {
        self.is_holiday = is_holiday;
        self
    }

    pub fn card(mut self, has_card: bool) -> Self {
        self.has_card = has_card;
        self
    }

    /// Validate the query against a network.
    ///
    /// Identical ids are rejected before anything else is checked. Two
    /// different nodes of the same named interchange also count as the same
    /// station.
    pub fn validate(&self, network: &Network) -> Result<(), RouteError> {
        if self.start == self.end {
            return Err(RouteError::SameStation(self.start));
        }

        let start = network
            .station(self.start)
            .map_err(|_| RouteError::InvalidStation(self.start))?;
        let end = network
            .station(self.end)
            .map_err(|_| RouteError::InvalidStation(self.end))?;

        if start.same_place(end) {
            return Err(RouteError::SameStation(self.start));
        }

        Ok(())
    }
}

/// The fastest route for a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    /// Rider-facing stops, each named station once.
    pub stops: Vec<Station>,

    /// Node path as found by the engine, interchange twins included.
    pub raw_path: Vec<StationId>,

    /// Total travel time including interchange transfers.
    pub total_minutes: u32,

    /// Distance travelled, excluding interchange transfers.
    pub total_km: f64,

    /// Tier fare before any card discount.
    pub base_fare: u32,

    /// Fare payable; equals `base_fare` without a card.
    pub final_fare: u32,

    pub is_holiday: bool,
    pub has_card: bool,

    pub directions: Vec<Step>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<RouteWarning>,
}

impl RouteResult {
    /// Number of line changes in the directions.
    pub fn line_changes(&self) -> usize {
        self.directions
            .iter()
            .filter(|s| matches!(s, Step::Change { .. }))
            .count()
    }

    /// Ids of the rider-facing stops.
    pub fn stop_ids(&self) -> Vec<StationId> {
        self.stops.iter().map(|s| s.id).collect()
    }

    /// Check whether a card discount was applied.
    pub fn discounted(&self) -> bool {
        self.final_fare < self.base_fare
    }
}

/// Route planner over a frozen network.
///
/// Holds only shared references, so any number of planners may query the
/// same network at once.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a PlannerConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a PlannerConfig) -> Self {
        Self { network, config }
    }

    /// Find the fastest route for a query.
    pub fn plan(&self, query: &RouteQuery) -> Result<RouteResult, RouteError> {
        query.validate(self.network)?;

        let paths = shortest_paths(self.network, query.start, self.config.selection)?;
        let Some(total_minutes) = paths.minutes_to(query.end) else {
            debug!(start = %query.start, end = %query.end, "No route found");
            return Err(RouteError::NoRouteFound {
                start: query.start,
                end: query.end,
            });
        };

        let raw_path = reconstruct(query.start, query.end, &paths)?;
        let stop_ids = dedup_by_name(self.network, &raw_path);
        let stops = stop_ids
            .iter()
            .map(|&id| {
                self.network
                    .station(id)
                    .cloned()
                    .map_err(|_| RouteError::InvalidStation(id))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let total_km = path_distance(self.network, &raw_path)?;
        let base_fare = fare(total_km, FareDay::from(query.is_holiday));
        let final_fare = if query.has_card {
            apply_card_discount(base_fare, self.config.card_discount_percent)
        } else {
            base_fare
        };

        let steps = directions(self.network, &stops);

        debug!(
            start = %query.start,
            end = %query.end,
            minutes = total_minutes,
            km = total_km,
            stops = stops.len(),
            changes = steps.line_changes(),
            "Route planned"
        );

        Ok(RouteResult {
            stops,
            raw_path,
            total_minutes,
            total_km,
            base_fare,
            final_fare,
            is_holiday: query.is_holiday,
            has_card: query.has_card,
            directions: steps.steps,
            warnings: steps.warnings,
        })
    }
}

/// Find the fastest route with the default configuration.
pub fn plan(network: &Network, query: &RouteQuery) -> Result<RouteResult, RouteError> {
    Planner::new(network, &PlannerConfig::default()).plan(query)
}
