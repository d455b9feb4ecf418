#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use crate::models::NodeId;
use crate::utils::GenericError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Specifies which accumulated cost a tour was optimized for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Travel time in hours.
    #[default]
    Time,
    /// Travel distance in kilometers.
    Distance,
    /// Monetary cost in local currency.
    Cost,
}

impl Priority {
    /// Returns all priorities in index order.
    pub fn all() -> [Priority; 3] {
        [Priority::Time, Priority::Distance, Priority::Cost]
    }

    /// Returns a lowercase name used in titles.
    pub fn name(&self) -> &'static str {
        match self {
            Priority::Time => "time",
            Priority::Distance => "distance",
            Priority::Cost => "cost",
        }
    }

    /// Returns a unit of measure.
    pub fn unit(&self) -> &'static str {
        match self {
            Priority::Time => "hours",
            Priority::Distance => "km",
            Priority::Cost => "local currency",
        }
    }
}

impl TryFrom<usize> for Priority {
    type Error = GenericError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Priority::all()
            .get(index)
            .copied()
            .ok_or_else(|| format!("unknown cost type index: '{index}', expected value in range [0, 2]").into())
    }
}

impl FromStr for Priority {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "time" => Ok(Priority::Time),
            "distance" => Ok(Priority::Distance),
            "cost" => Ok(Priority::Cost),
            _ => value
                .parse::<usize>()
                .map_err(|_| GenericError::from(format!("unknown priority: '{value}'")))
                .and_then(Priority::try_from),
        }
    }
}

/// Accumulated time, distance and monetary cost of a tour.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(from = "[f64; 3]", into = "[f64; 3]")]
pub struct CostBreakdown {
    /// Total time in hours.
    pub time: f64,
    /// Total distance in kilometers.
    pub distance: f64,
    /// Total monetary cost.
    pub cost: f64,
}

impl From<[f64; 3]> for CostBreakdown {
    fn from([time, distance, cost]: [f64; 3]) -> Self {
        Self { time, distance, cost }
    }
}

impl From<CostBreakdown> for [f64; 3] {
    fn from(breakdown: CostBreakdown) -> Self {
        [breakdown.time, breakdown.distance, breakdown.cost]
    }
}

/// A tour cost: either a single value of the optimized priority or a full breakdown.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TourCost {
    /// A single accumulated value.
    Single(f64),
    /// Time, distance and cost values.
    Breakdown(CostBreakdown),
}

impl TourCost {
    /// Returns the value which corresponds to the given priority.
    pub fn value(&self, priority: Priority) -> f64 {
        match (self, priority) {
            (TourCost::Single(value), _) => *value,
            (TourCost::Breakdown(breakdown), Priority::Time) => breakdown.time,
            (TourCost::Breakdown(breakdown), Priority::Distance) => breakdown.distance,
            (TourCost::Breakdown(breakdown), Priority::Cost) => breakdown.cost,
        }
    }
}

/// An ordered visiting sequence computed elsewhere. A closed tour repeats its start node at the end.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Tour {
    /// Visited nodes in order.
    pub path: Vec<NodeId>,
    /// Accumulated cost along the path.
    pub cost: TourCost,
}

impl Tour {
    /// Creates a new instance of `Tour`.
    pub fn new(path: Vec<NodeId>, cost: TourCost) -> Self {
        Self { path, cost }
    }

    /// Returns the first visited node.
    pub fn start(&self) -> Option<NodeId> {
        self.path.first().copied()
    }

    /// Returns consecutive node pairs along the path.
    pub fn legs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.path.iter().copied().tuple_windows()
    }
}
