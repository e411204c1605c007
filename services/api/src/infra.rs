use chrono::NaiveDate;
use homestay::config::CatalogConfig;
use homestay::error::AppError;
use homestay::workflows::bookings::Booking;
use homestay::workflows::dates;
use homestay::workflows::envelope::ApiEnvelope;
use homestay::workflows::search::{Amenity, PropertyCatalog, SortKey, SortOrder};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Booking exports arrive as a bare array or inside the backend envelope.
#[derive(Deserialize)]
#[serde(untagged)]
enum BookingFeed {
    Bare(Vec<Booking>),
    Wrapped(ApiEnvelope<Vec<Booking>>),
}

pub(crate) fn read_bookings<R: Read>(reader: R) -> Result<Vec<Booking>, AppError> {
    match serde_json::from_reader(reader)? {
        BookingFeed::Bare(bookings) => Ok(bookings),
        BookingFeed::Wrapped(envelope) => Ok(envelope.into_data()?),
    }
}

pub(crate) fn load_bookings<P: AsRef<Path>>(path: P) -> Result<Vec<Booking>, AppError> {
    let file = std::fs::File::open(path)?;
    read_bookings(file)
}

/// Load the configured listing catalog, or start empty when none is configured.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<PropertyCatalog, AppError> {
    match &config.path {
        Some(path) => Ok(PropertyCatalog::from_path(path)?),
        None => {
            warn!("HOMESTAY_CATALOG_PATH not set; search requests must supply listings");
            Ok(PropertyCatalog::default())
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    dates::parse_date(raw)
}

pub(crate) fn parse_amenity(raw: &str) -> Result<Amenity, String> {
    raw.parse::<Amenity>().map_err(|err| err.to_string())
}

pub(crate) fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "price" => Ok(SortKey::Price),
        "rating" => Ok(SortKey::Rating),
        "name" => Ok(SortKey::Name),
        "rooms" => Ok(SortKey::Rooms),
        other => Err(format!(
            "unknown sort key '{other}' (expected price, rating, name or rooms)"
        )),
    }
}

pub(crate) fn parse_sort_order(raw: &str) -> Result<SortOrder, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "asc" | "ascending" => Ok(SortOrder::Ascending),
        "desc" | "descending" => Ok(SortOrder::Descending),
        other => Err(format!("unknown sort order '{other}' (expected asc or desc)")),
    }
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| {
        dates::parse_calendar_date(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognised date '{value}'")))
    })
    .transpose()
}
