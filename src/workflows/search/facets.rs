use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::Property;

/// Distinct locations available as filter choices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationFacets {
    pub cities: Vec<String>,
    pub states: Vec<String>,
}

impl LocationFacets {
    /// Collect the sorted, de-duplicated city and state names of `properties`, skipping blanks.
    pub fn from_properties(properties: &[Property]) -> Self {
        let mut cities = BTreeSet::new();
        let mut states = BTreeSet::new();

        for property in properties {
            if !property.city.is_empty() {
                cities.insert(property.city.clone());
            }
            if !property.state.is_empty() {
                states.insert(property.state.clone());
            }
        }

        Self {
            cities: cities.into_iter().collect(),
            states: states.into_iter().collect(),
        }
    }
}

/// Render a 0–5 rating as full, half and empty stars.
pub fn rating_stars(rating: f64) -> String {
    let rating = if rating.is_finite() {
        rating.clamp(0.0, 5.0)
    } else {
        0.0
    };
    let full = rating.floor() as usize;
    let half = usize::from(rating.fract() >= 0.5);
    let empty = 5 - full - half;

    format!(
        "{}{}{}",
        "★".repeat(full),
        if half == 1 { "½" } else { "" },
        "☆".repeat(empty)
    )
}
