//! Listing search: predicate filtering, amenity matching and ordering over a result set.

pub mod catalog;
pub mod domain;
mod engine;
mod facets;
pub mod router;

pub use catalog::{CatalogError, PropertyCatalog};
pub use domain::{
    Amenity, AmenityFlags, Property, PropertyId, PropertyStatus, SearchFilters, SortKey,
    SortOrder, SortSpec, UnknownAmenity,
};
pub use engine::{matches, search, sort_properties};
pub use facets::{rating_stars, LocationFacets};
pub use router::search_router;
