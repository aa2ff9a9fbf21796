// src/models/category.rs
// DOCUMENTATION: Static place category and travel mode metadata
// PURPOSE: Fixed enumerations the UI renders as filters, plus the mapping
// between our coarse categories and the provider's place types

use serde::{Deserialize, Serialize};

/// Category key used for filtering nearby searches
/// DOCUMENTATION: `All` is only valid as a search filter; a NearbyPlace always
/// carries one of the concrete keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceCategoryKey {
    All,
    TouristAttraction,
    GasStation,
    Restaurant,
    Hospital,
    Police,
}

/// Display metadata for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceCategory {
    pub key: PlaceCategoryKey,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Provider type → category lookup, first match in a place's type list wins
const PROVIDER_TYPE_TABLE: &[(&str, PlaceCategoryKey)] = &[
    ("tourist_attraction", PlaceCategoryKey::TouristAttraction),
    ("museum", PlaceCategoryKey::TouristAttraction),
    ("park", PlaceCategoryKey::TouristAttraction),
    ("zoo", PlaceCategoryKey::TouristAttraction),
    ("amusement_park", PlaceCategoryKey::TouristAttraction),
    ("art_gallery", PlaceCategoryKey::TouristAttraction),
    ("hindu_temple", PlaceCategoryKey::TouristAttraction),
    ("gas_station", PlaceCategoryKey::GasStation),
    ("restaurant", PlaceCategoryKey::Restaurant),
    ("cafe", PlaceCategoryKey::Restaurant),
    ("food", PlaceCategoryKey::Restaurant),
    ("meal_takeaway", PlaceCategoryKey::Restaurant),
    ("hospital", PlaceCategoryKey::Hospital),
    ("doctor", PlaceCategoryKey::Hospital),
    ("pharmacy", PlaceCategoryKey::Hospital),
    ("police", PlaceCategoryKey::Police),
];

impl PlaceCategoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategoryKey::All => "all",
            PlaceCategoryKey::TouristAttraction => "tourist_attraction",
            PlaceCategoryKey::GasStation => "gas_station",
            PlaceCategoryKey::Restaurant => "restaurant",
            PlaceCategoryKey::Hospital => "hospital",
            PlaceCategoryKey::Police => "police",
        }
    }

    /// Parse a category filter, falling back to `All` for anything unknown
    pub fn parse_or_all(raw: &str) -> Self {
        match raw.trim() {
            "tourist_attraction" => PlaceCategoryKey::TouristAttraction,
            "gas_station" => PlaceCategoryKey::GasStation,
            "restaurant" => PlaceCategoryKey::Restaurant,
            "hospital" => PlaceCategoryKey::Hospital,
            "police" => PlaceCategoryKey::Police,
            _ => PlaceCategoryKey::All,
        }
    }

    /// Provider place types searched for this category
    pub fn provider_types(&self) -> &'static [&'static str] {
        match self {
            PlaceCategoryKey::All => &[
                "tourist_attraction",
                "gas_station",
                "restaurant",
                "hospital",
                "police",
            ],
            PlaceCategoryKey::TouristAttraction => &["tourist_attraction", "museum", "park", "zoo"],
            PlaceCategoryKey::GasStation => &["gas_station"],
            PlaceCategoryKey::Restaurant => &["restaurant", "cafe"],
            PlaceCategoryKey::Hospital => &["hospital"],
            PlaceCategoryKey::Police => &["police"],
        }
    }

    /// Map a provider's type list back to our coarse category
    /// DOCUMENTATION: Unmapped type lists default to TouristAttraction
    pub fn from_provider_types<S: AsRef<str>>(types: &[S]) -> Self {
        types
            .iter()
            .find_map(|t| {
                PROVIDER_TYPE_TABLE
                    .iter()
                    .find(|(provider_type, _)| *provider_type == t.as_ref())
                    .map(|(_, key)| *key)
            })
            .unwrap_or(PlaceCategoryKey::TouristAttraction)
    }
}

/// All categories in display order ("All Places" first)
pub fn place_categories() -> Vec<PlaceCategory> {
    vec![
        PlaceCategory {
            key: PlaceCategoryKey::All,
            label: "All Places",
            icon: "📍",
            color: "#6366f1",
        },
        PlaceCategory {
            key: PlaceCategoryKey::TouristAttraction,
            label: "Tourist Attractions",
            icon: "🏛️",
            color: "#8b5cf6",
        },
        PlaceCategory {
            key: PlaceCategoryKey::GasStation,
            label: "Petrol Pumps",
            icon: "⛽",
            color: "#f59e0b",
        },
        PlaceCategory {
            key: PlaceCategoryKey::Restaurant,
            label: "Restaurants",
            icon: "🍽️",
            color: "#ef4444",
        },
        PlaceCategory {
            key: PlaceCategoryKey::Hospital,
            label: "Hospitals",
            icon: "🏥",
            color: "#10b981",
        },
        PlaceCategory {
            key: PlaceCategoryKey::Police,
            label: "Police Stations",
            icon: "🚓",
            color: "#3b82f6",
        },
    ]
}

/// Travel mode accepted by directions lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelModeKind {
    #[default]
    Driving,
    Walking,
    Transit,
}

impl TravelModeKind {
    /// Value of the provider's `mode` query parameter
    pub fn as_provider_param(&self) -> &'static str {
        match self {
            TravelModeKind::Driving => "driving",
            TravelModeKind::Walking => "walking",
            TravelModeKind::Transit => "transit",
        }
    }
}

/// Display metadata for one travel mode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelMode {
    pub mode: TravelModeKind,
    pub label: &'static str,
    pub icon: &'static str,
    pub available: bool,
}

pub fn travel_modes() -> Vec<TravelMode> {
    vec![
        TravelMode {
            mode: TravelModeKind::Driving,
            label: "Driving",
            icon: "🚗",
            available: true,
        },
        TravelMode {
            mode: TravelModeKind::Walking,
            label: "Walking",
            icon: "🚶",
            available: true,
        },
        TravelMode {
            mode: TravelModeKind::Transit,
            label: "Transit",
            icon: "🚌",
            available: true,
        },
    ]
}
