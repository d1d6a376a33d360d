//! Category/region filter applied before clustering.

#[cfg(test)]
mod tests;

use crate::point::{Point, normalize_label};
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Select at least one category")]
    EmptyCategories,

    #[error("Select at least one region")]
    EmptyRegions,
}

/// Categories and regions a planner wants to serve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    categories: BTreeSet<String>,
    regions: BTreeSet<String>,
}

impl Selection {
    /// Build a selection; both sets must be non-empty.
    ///
    /// Categories are normalized the same way the loader normalizes them, so
    /// `"toys"` selects points labeled `"Toys"`.
    pub fn new<C, R>(categories: C, regions: R) -> Result<Self, SelectionError>
    where
        C: IntoIterator,
        C::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let categories: BTreeSet<String> = categories
            .into_iter()
            .map(|c| normalize_label(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect();
        let regions: BTreeSet<String> = regions
            .into_iter()
            .map(|r| r.as_ref().trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();

        if categories.is_empty() {
            return Err(SelectionError::EmptyCategories);
        }
        if regions.is_empty() {
            return Err(SelectionError::EmptyRegions);
        }

        Ok(Self {
            categories,
            regions,
        })
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(String::as_str)
    }

    /// True when the point's category and region are both selected
    pub fn matches(&self, point: &Point) -> bool {
        self.categories.contains(&normalize_label(point.category()))
            && self.regions.contains(point.region().trim())
    }

    /// Matching points in input order
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        let selected: Vec<Point> = points.iter().filter(|p| self.matches(p)).cloned().collect();
        debug!(
            total = points.len(),
            selected = selected.len(),
            "applied selection"
        );
        selected
    }
}
