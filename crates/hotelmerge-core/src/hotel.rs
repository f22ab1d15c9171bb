//! The canonical hotel record produced by merging every supplier's view of
//! the same property.

use indexmap::{IndexMap, IndexSet};
use serde::{Serialize, Serializer};

/// Composite identity of a canonical hotel: the supplier-agnostic hotel id
/// plus the destination group it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HotelKey {
    pub id: String,
    pub destination_id: i32,
}

impl HotelKey {
    #[must_use]
    pub fn new(id: impl Into<String>, destination_id: i32) -> Self {
        Self {
            id: id.into(),
            destination_id,
        }
    }
}

impl std::fmt::Display for HotelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.id, self.destination_id)
    }
}

/// A hotel as published in the merged catalog.
///
/// `id` and `destination_id` are fixed at creation; every other field is
/// filled or grown by later supplier folds and never cleared.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hotel {
    pub id: String,
    pub destination_id: i32,
    pub name: Option<String>,
    pub location: Location,
    pub description: Option<String>,
    pub amenities: Amenities,
    pub images: Images,
    pub booking_conditions: IndexSet<String>,
}

impl Hotel {
    /// An empty record for `key`, with no scalar values and empty collections.
    #[must_use]
    pub fn new(key: HotelKey) -> Self {
        Self {
            id: key.id,
            destination_id: key.destination_id,
            name: None,
            location: Location::default(),
            description: None,
            amenities: Amenities::default(),
            images: Images::default(),
            booking_conditions: IndexSet::new(),
        }
    }

    #[must_use]
    pub fn key(&self) -> HotelKey {
        HotelKey::new(self.id.clone(), self.destination_id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Location {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

/// Normalized amenity names, deduplicated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Amenities {
    pub general: IndexSet<String>,
    pub room: IndexSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Images {
    pub rooms: ImageSet,
    pub site: ImageSet,
    pub amenities: ImageSet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageDetail {
    pub link: Option<String>,
    pub description: Option<String>,
}

impl ImageDetail {
    #[must_use]
    pub fn new(link: Option<String>, description: Option<String>) -> Self {
        Self { link, description }
    }
}

/// Images keyed by `link` alone. Inserting an image whose link is already
/// present is a no-op, so the first description seen for a link is kept.
///
/// Serialized as a plain JSON array in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet(IndexMap<Option<String>, ImageDetail>);

impl ImageSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `image` unless an image with the same link exists. Returns
    /// whether it was added.
    pub fn insert(&mut self, image: ImageDetail) -> bool {
        match self.0.entry(image.link.clone()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(image);
                true
            }
        }
    }

    #[must_use]
    pub fn get(&self, link: &str) -> Option<&ImageDetail> {
        self.0.get(&Some(link.to_owned()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageDetail> {
        self.0.values()
    }
}

impl Extend<ImageDetail> for ImageSet {
    fn extend<I: IntoIterator<Item = ImageDetail>>(&mut self, iter: I) {
        for image in iter {
            self.insert(image);
        }
    }
}

impl FromIterator<ImageDetail> for ImageSet {
    fn from_iter<I: IntoIterator<Item = ImageDetail>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Serialize for ImageSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.values())
    }
}
