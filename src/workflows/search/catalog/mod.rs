mod parser;

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::domain::{Property, PropertyId, SearchFilters, SortSpec};
use super::engine;
use super::facets::LocationFacets;
use crate::workflows::envelope::{ApiEnvelope, EnvelopeError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read listing catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid listing JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("listing response rejected: {0}")]
    Envelope(#[from] EnvelopeError),
}

/// JSON catalogs are either a bare array or a backend response envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<Property>),
    Wrapped(ApiEnvelope<Vec<Property>>),
}

/// The unfiltered listing set a search runs over, with its location facets.
///
/// Facets are derived once when the set is loaded, so they never narrow with a search.
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
    facets: LocationFacets,
}

impl PropertyCatalog {
    pub fn new(properties: Vec<Property>) -> Self {
        let facets = LocationFacets::from_properties(&properties);
        Self { properties, facets }
    }

    /// Load a catalog file; `.csv` files are read as listing exports, anything else as JSON.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);

        let catalog = if is_csv {
            Self::from_csv_reader(file)?
        } else {
            Self::from_json_reader(file)?
        };

        info!(
            path = %path.display(),
            listings = catalog.len(),
            cities = catalog.facets.cities.len(),
            "listing catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Ok(Self::new(parser::parse_csv(reader)?))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let properties = match serde_json::from_reader(reader)? {
            JsonCatalog::Bare(properties) => properties,
            JsonCatalog::Wrapped(envelope) => envelope.into_data()?,
        };
        Ok(Self::new(properties))
    }

    pub fn facets(&self) -> &LocationFacets {
        &self.facets
    }

    pub fn get(&self, property_id: PropertyId) -> Option<&Property> {
        self.properties
            .iter()
            .find(|property| property.property_id == property_id)
    }

    pub fn search(&self, filters: &SearchFilters, sort: SortSpec) -> Vec<Property> {
        engine::search(&self.properties, filters, sort)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::search::domain::{Amenity, PropertyStatus};
    use std::io::Cursor;

    const CSV_EXPORT: &str = "\
propertyId,propertyName,noOfRooms,noOfBathrooms,maxNoOfGuests,pricePerDay,city,state,country,propertyStatus,propertyRate,hasWifi,hasPool,hasAc
1,Palm Villa,3,2,6,4500,Panaji,Goa,India,AVAILABLE,4.6,yes,true,1
2,City Studio,1,,2,1200,Pune,Maharashtra,India,BOOKED,,no,false,0
";

    #[test]
    fn csv_export_loads_with_flags_and_blanks() {
        let catalog =
            PropertyCatalog::from_csv_reader(Cursor::new(CSV_EXPORT)).expect("csv parses");

        assert_eq!(catalog.len(), 2);
        let villa = catalog.get(PropertyId(1)).expect("villa present");
        assert!(villa.amenities.has(Amenity::Wifi));
        assert!(villa.amenities.has(Amenity::Pool));
        assert!(villa.amenities.has(Amenity::AirConditioning));
        assert!(!villa.amenities.has(Amenity::Heater));

        let studio = catalog.get(PropertyId(2)).expect("studio present");
        assert_eq!(studio.no_of_bathrooms, 0);
        assert_eq!(studio.property_rate, 0.0);
        assert_eq!(
            studio.property_status,
            PropertyStatus::Other("BOOKED".to_string())
        );
        assert_eq!(catalog.facets().cities, vec!["Panaji", "Pune"]);
    }

    #[test]
    fn json_catalog_accepts_envelopes() {
        let body = r#"{
            "success": true,
            "message": "Properties loaded",
            "data": [{
                "propertyId": 9,
                "propertyName": "Tea Estate Bungalow",
                "noOfRooms": 4,
                "maxNoOfGuests": 8,
                "pricePerDay": 6800,
                "city": "Munnar",
                "state": "Kerala",
                "propertyStatus": "AVAILABLE"
            }]
        }"#;

        let catalog = PropertyCatalog::from_json_reader(Cursor::new(body)).expect("json parses");

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.facets().states, vec!["Kerala"]);
    }

    #[test]
    fn rejected_envelope_is_an_error() {
        let body = r#"{ "success": false, "message": "Server error", "data": null }"#;
        let err = PropertyCatalog::from_json_reader(Cursor::new(body)).expect_err("rejected");
        assert!(matches!(err, CatalogError::Envelope(_)));
    }

    #[test]
    fn search_runs_over_available_listings() {
        let catalog =
            PropertyCatalog::from_csv_reader(Cursor::new(CSV_EXPORT)).expect("csv parses");
        let results = catalog.search(&SearchFilters::default(), SortSpec::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].property_id, PropertyId(1));

        let goa_only = catalog.search(
            &SearchFilters {
                state: "goa".to_string(),
                ..SearchFilters::default()
            },
            SortSpec::default(),
        );
        assert_eq!(goa_only.len(), 1);
        assert_eq!(catalog.facets().states, vec!["Goa", "Maharashtra"]);
    }
}
