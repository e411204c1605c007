use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier wrapper for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(pub u64);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Listing status. Only `Available` listings are ever returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PropertyStatus {
    Available,
    Other(String),
}

impl From<String> for PropertyStatus {
    fn from(value: String) -> Self {
        if value.trim() == "AVAILABLE" {
            Self::Available
        } else {
            Self::Other(value)
        }
    }
}

impl From<PropertyStatus> for String {
    fn from(value: PropertyStatus) -> Self {
        match value {
            PropertyStatus::Available => "AVAILABLE".to_string(),
            PropertyStatus::Other(code) => code,
        }
    }
}

/// Amenities a listing can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Wifi,
    Parking,
    Pool,
    AirConditioning,
    Heater,
    PetFriendly,
}

impl Amenity {
    pub const ALL: [Self; 6] = [
        Self::Wifi,
        Self::Parking,
        Self::Pool,
        Self::AirConditioning,
        Self::Heater,
        Self::PetFriendly,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            Self::Wifi => "wifi",
            Self::Parking => "parking",
            Self::Pool => "pool",
            Self::AirConditioning => "air_conditioning",
            Self::Heater => "heater",
            Self::PetFriendly => "pet_friendly",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Wifi => "WiFi",
            Self::Parking => "Parking",
            Self::Pool => "Pool",
            Self::AirConditioning => "Air Conditioning",
            Self::Heater => "Heater",
            Self::PetFriendly => "Pet Friendly",
        }
    }

    /// Field name used by the listing backend.
    pub const fn backend_field(self) -> &'static str {
        match self {
            Self::Wifi => "hasWifi",
            Self::Parking => "hasParking",
            Self::Pool => "hasPool",
            Self::AirConditioning => "hasAc",
            Self::Heater => "hasHeater",
            Self::PetFriendly => "hasPetFriendly",
        }
    }
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAmenity(pub String);

impl fmt::Display for UnknownAmenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown amenity '{}'", self.0)
    }
}

impl std::error::Error for UnknownAmenity {}

impl FromStr for Amenity {
    type Err = UnknownAmenity;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|amenity| {
                trimmed.eq_ignore_ascii_case(amenity.key())
                    || trimmed.eq_ignore_ascii_case(amenity.backend_field())
            })
            .or(match trimmed.to_ascii_lowercase().as_str() {
                "ac" => Some(Self::AirConditioning),
                "pets" | "pet" => Some(Self::PetFriendly),
                _ => None,
            })
            .ok_or_else(|| UnknownAmenity(trimmed.to_string()))
    }
}

/// The six amenity flags carried on a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityFlags {
    #[serde(default)]
    pub has_wifi: bool,
    #[serde(default)]
    pub has_parking: bool,
    #[serde(default)]
    pub has_pool: bool,
    #[serde(default)]
    pub has_ac: bool,
    #[serde(default)]
    pub has_heater: bool,
    #[serde(default)]
    pub has_pet_friendly: bool,
}

impl AmenityFlags {
    pub const fn has(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Wifi => self.has_wifi,
            Amenity::Parking => self.has_parking,
            Amenity::Pool => self.has_pool,
            Amenity::AirConditioning => self.has_ac,
            Amenity::Heater => self.has_heater,
            Amenity::PetFriendly => self.has_pet_friendly,
        }
    }

    pub fn set(&mut self, amenity: Amenity, present: bool) {
        let flag = match amenity {
            Amenity::Wifi => &mut self.has_wifi,
            Amenity::Parking => &mut self.has_parking,
            Amenity::Pool => &mut self.has_pool,
            Amenity::AirConditioning => &mut self.has_ac,
            Amenity::Heater => &mut self.has_heater,
            Amenity::PetFriendly => &mut self.has_pet_friendly,
        };
        *flag = present;
    }

    pub fn present(&self) -> impl Iterator<Item = Amenity> + '_ {
        Amenity::ALL.into_iter().filter(|amenity| self.has(*amenity))
    }
}

/// A listing snapshot as served by the search and detail endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub property_id: PropertyId,
    pub property_name: String,
    #[serde(default)]
    pub property_description: String,
    pub no_of_rooms: u32,
    #[serde(default)]
    pub no_of_bathrooms: u32,
    pub max_no_of_guests: u32,
    pub price_per_day: f64,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub country: String,
    pub property_status: PropertyStatus,
    #[serde(default)]
    pub property_rate: f64,
    #[serde(default)]
    pub property_rating_count: u32,
    #[serde(flatten)]
    pub amenities: AmenityFlags,
}

impl Property {
    pub fn is_available(&self) -> bool {
        self.property_status == PropertyStatus::Available
    }
}

/// Narrowing criteria applied by [`crate::workflows::search::search`].
///
/// Every field at its default value lets all listings through, except that listings must
/// always be available.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchFilters {
    pub search_term: String,
    pub city: String,
    pub state: String,
    pub min_price: f64,
    /// Inclusive ceiling; `None` leaves the range open.
    pub max_price: Option<f64>,
    pub min_rooms: u32,
    /// Number of guests the listing must be able to host, compared against
    /// `max_no_of_guests`.
    pub max_guests: u32,
    pub amenities: BTreeSet<Amenity>,
}

impl SearchFilters {
    /// Add the amenity when missing, drop it when already required.
    pub fn toggle_amenity(&mut self, amenity: Amenity) {
        if !self.amenities.remove(&amenity) {
            self.amenities.insert(amenity);
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Price,
    Rating,
    Name,
    Rooms,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SortSpec {
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}
