//! Raw hotel records as each supplier publishes them.
//!
//! ## Observed shapes
//!
//! ### paperflies
//! snake_case fields; the richest descriptive text. Location is nested
//! (`location.address`, `location.country`), amenities are split into
//! `general` and `room`, and images carry a `caption`.
//!
//! ### patagonia
//! Short field names (`destination`, `lat`, `lng`, `info`). Amenities are a
//! flat list that describes rooms. Images carry a `url` and a `description`.
//!
//! ### acme
//! PascalCase field names. `Facilities` are compact compound tokens such as
//! `"BusinessCentre"`. `Latitude`/`Longitude` are numbers in most records but
//! have been observed as `""`; anything that is not a number is read as
//! absent.
//!
//! Every supplier omits fields or sends `null` freely, and occasionally a
//! value of the wrong type. Only the two key fields are required. Any other
//! field that is `null` or mistyped reads as absent or empty, and list
//! entries that are `null` or mistyped are dropped.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperFliesHotel {
    pub hotel_id: String,
    pub destination_id: i32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hotel_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub location: PaperFliesLocation,
    #[serde(default, deserialize_with = "lenient_text")]
    pub details: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub amenities: PaperFliesAmenities,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub images: PaperFliesImages,
    #[serde(default, deserialize_with = "lenient_list")]
    pub booking_conditions: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperFliesLocation {
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperFliesAmenities {
    #[serde(default, deserialize_with = "lenient_list")]
    pub general: Vec<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub room: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperFliesImages {
    #[serde(default, deserialize_with = "lenient_list")]
    pub rooms: Vec<PaperFliesImage>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub site: Vec<PaperFliesImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PaperFliesImage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatagoniaHotel {
    pub id: String,
    pub destination: i32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub info: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub images: PatagoniaImages,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatagoniaImages {
    #[serde(default, deserialize_with = "lenient_list")]
    pub rooms: Vec<PatagoniaImage>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub amenities: Vec<PatagoniaImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatagoniaImage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AcmeHotel {
    pub id: String,
    pub destination_id: i32,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub postal_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub facilities: Vec<String>,
}

/// Either a well-typed value or anything else, which is discarded.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(#[allow(dead_code)] IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Lenient<String>>::deserialize(deserializer)?.and_then(Lenient::into_option))
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<Lenient<T>>::deserialize(deserializer)?
        .and_then(Lenient::into_option)
        .unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Vec<Lenient<T>> = lenient_or_default(deserializer)?;
    Ok(entries.into_iter().filter_map(Lenient::into_option).collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
    Other(#[allow(dead_code)] IgnoredAny),
}

/// Accepts a JSON number or a numeric string. Anything blank, unparseable
/// or of another type reads as `None`.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(n)) => Some(n),
        Some(NumberOrText::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(NumberOrText::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paperflies_parses_nested_record() {
        let raw = serde_json::json!({
            "hotel_id": "iJhz",
            "destination_id": 5432,
            "hotel_name": "Beach Villas Singapore",
            "location": {"address": "8 Sentosa Gateway", "country": "Singapore"},
            "details": "Surrounded by tropical gardens",
            "amenities": {"general": ["outdoor pool"], "room": ["tv"]},
            "images": {
                "rooms": [{"link": "https://x/2.jpg", "caption": "Double room"}],
                "site": [{"link": "https://x/1.jpg", "caption": "Front"}]
            },
            "booking_conditions": ["All children are welcome."]
        });
        let hotel: PaperFliesHotel = serde_json::from_value(raw).unwrap();
        assert_eq!(hotel.hotel_id, "iJhz");
        assert_eq!(hotel.location.country.as_deref(), Some("Singapore"));
        assert_eq!(hotel.amenities.room, vec!["tv"]);
        assert_eq!(hotel.images.site[0].caption.as_deref(), Some("Front"));
        assert_eq!(hotel.booking_conditions.len(), 1);
    }

    #[test]
    fn paperflies_null_collections_read_as_empty() {
        let raw = serde_json::json!({
            "hotel_id": "f8c9",
            "destination_id": 1122,
            "location": null,
            "amenities": null,
            "images": {"rooms": null},
            "booking_conditions": null
        });
        let hotel: PaperFliesHotel = serde_json::from_value(raw).unwrap();
        assert!(hotel.location.address.is_none());
        assert!(hotel.amenities.general.is_empty());
        assert!(hotel.images.rooms.is_empty());
        assert!(hotel.booking_conditions.is_empty());
    }

    #[test]
    fn patagonia_parses_short_field_names() {
        let raw = serde_json::json!({
            "id": "iJhz",
            "destination": 5432,
            "name": "Beach Villas Singapore",
            "lat": 1.264751,
            "lng": 103.824006,
            "address": "8 Sentosa Gateway, Beach Villas, 098269",
            "info": null,
            "amenities": ["Aircon", "Tv"],
            "images": {"amenities": [{"url": "https://x/0.jpg", "description": "RTM"}]}
        });
        let hotel: PatagoniaHotel = serde_json::from_value(raw).unwrap();
        assert_eq!(hotel.destination, 5432);
        assert_eq!(hotel.lat, Some(1.264_751));
        assert!(hotel.info.is_none());
        assert!(hotel.images.rooms.is_empty());
        assert_eq!(hotel.images.amenities[0].url.as_deref(), Some("https://x/0.jpg"));
    }

    #[test]
    fn acme_parses_pascal_case_and_blank_coordinates() {
        let raw = serde_json::json!({
            "Id": "f8c9",
            "DestinationId": 1122,
            "Name": "Hilton Tokyo Shinjuku",
            "Latitude": "",
            "Longitude": "139.69",
            "Address": "160-0023, SHINJUKU-KU, 6-6-2 NISHI-SHINJUKU, JAPAN",
            "City": "Tokyo",
            "Country": "JP",
            "PostalCode": "160-0023",
            "Description": "Hilton Tokyo is located in Shinjuku",
            "Facilities": ["Pool", "BusinessCenter"]
        });
        let hotel: AcmeHotel = serde_json::from_value(raw).unwrap();
        assert_eq!(hotel.destination_id, 1122);
        assert_eq!(hotel.latitude, None);
        assert_eq!(hotel.longitude, Some(139.69));
        assert_eq!(hotel.postal_code.as_deref(), Some("160-0023"));
        assert_eq!(hotel.facilities, vec!["Pool", "BusinessCenter"]);
    }

    #[test]
    fn acme_missing_key_field_is_an_error() {
        let raw = serde_json::json!({"Id": "f8c9"});
        assert!(serde_json::from_value::<AcmeHotel>(raw).is_err());
    }

    #[test]
    fn null_and_mistyped_list_entries_are_dropped() {
        let raw = serde_json::json!({
            "hotel_id": "iJhz",
            "destination_id": 5432,
            "amenities": {"general": ["pool", null, 3], "room": "tv"},
            "images": {"site": [null, "x", {"link": "https://x/1.jpg", "caption": 7}]},
            "booking_conditions": [null, "Pets are not allowed."]
        });
        let hotel: PaperFliesHotel = serde_json::from_value(raw).unwrap();
        assert_eq!(hotel.amenities.general, vec!["pool"]);
        assert!(hotel.amenities.room.is_empty());
        assert_eq!(hotel.images.site.len(), 1);
        assert_eq!(hotel.images.site[0].link.as_deref(), Some("https://x/1.jpg"));
        assert!(hotel.images.site[0].caption.is_none());
        assert_eq!(hotel.booking_conditions, vec!["Pets are not allowed."]);
    }

    #[test]
    fn mistyped_optional_fields_read_as_absent() {
        let raw = serde_json::json!({
            "id": "SjyX",
            "destination": 5432,
            "name": 42,
            "lat": true,
            "lng": "103.8",
            "info": {"text": "nested"},
            "amenities": ["Tv", null],
            "images": "none"
        });
        let hotel: PatagoniaHotel = serde_json::from_value(raw).unwrap();
        assert!(hotel.name.is_none());
        assert!(hotel.lat.is_none());
        assert_eq!(hotel.lng, Some(103.8));
        assert!(hotel.info.is_none());
        assert_eq!(hotel.amenities, vec!["Tv"]);
        assert!(hotel.images.rooms.is_empty());
    }

    #[test]
    fn acme_null_facilities_entry_is_skipped() {
        let raw = serde_json::json!({
            "Id": "f8c9",
            "DestinationId": 1122,
            "Country": null,
            "Facilities": ["Pool", null, "WiFi"]
        });
        let hotel: AcmeHotel = serde_json::from_value(raw).unwrap();
        assert!(hotel.country.is_none());
        assert_eq!(hotel.facilities, vec!["Pool", "WiFi"]);
    }
}
