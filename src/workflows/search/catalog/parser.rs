use serde::{Deserialize, Deserializer};
use std::io::Read;

use crate::workflows::search::domain::{AmenityFlags, Property, PropertyId, PropertyStatus};

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<Property>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut properties = Vec::new();

    for record in csv_reader.deserialize::<PropertyRow>() {
        properties.push(record?.into_property());
    }

    Ok(properties)
}

/// One row of a listing export, using the backend's column names.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyRow {
    property_id: u64,
    property_name: String,
    #[serde(default)]
    property_description: String,
    no_of_rooms: u32,
    #[serde(default, deserialize_with = "empty_as_default")]
    no_of_bathrooms: u32,
    max_no_of_guests: u32,
    price_per_day: f64,
    #[serde(rename = "imageURL", default)]
    image_url: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    country: String,
    property_status: String,
    #[serde(default, deserialize_with = "empty_as_default")]
    property_rate: f64,
    #[serde(default, deserialize_with = "empty_as_default")]
    property_rating_count: u32,
    #[serde(default, deserialize_with = "flag")]
    has_wifi: bool,
    #[serde(default, deserialize_with = "flag")]
    has_parking: bool,
    #[serde(default, deserialize_with = "flag")]
    has_pool: bool,
    #[serde(default, deserialize_with = "flag")]
    has_ac: bool,
    #[serde(default, deserialize_with = "flag")]
    has_heater: bool,
    #[serde(default, deserialize_with = "flag")]
    has_pet_friendly: bool,
}

impl PropertyRow {
    fn into_property(self) -> Property {
        Property {
            property_id: PropertyId(self.property_id),
            property_name: self.property_name,
            property_description: self.property_description,
            no_of_rooms: self.no_of_rooms,
            no_of_bathrooms: self.no_of_bathrooms,
            max_no_of_guests: self.max_no_of_guests,
            price_per_day: self.price_per_day,
            image_url: self.image_url,
            city: self.city,
            state: self.state,
            country: self.country,
            property_status: PropertyStatus::from(self.property_status),
            property_rate: self.property_rate,
            property_rating_count: self.property_rating_count,
            amenities: AmenityFlags {
                has_wifi: self.has_wifi,
                has_parking: self.has_parking,
                has_pool: self.has_pool,
                has_ac: self.has_ac,
                has_heater: self.has_heater,
                has_pet_friendly: self.has_pet_friendly,
            },
        }
    }
}

fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: std::str::FromStr + Default,
    T::Err: std::fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse().map_err(serde::de::Error::custom)
}

/// Spreadsheet exports spell booleans many ways.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" => Ok(true),
        other => Err(serde::de::Error::custom(format!(
            "expected a yes/no flag, found '{other}'"
        ))),
    }
}
