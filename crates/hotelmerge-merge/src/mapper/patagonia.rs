use hotelmerge_core::normalize::{beautify_lower, beautify_nullable, non_empty};
use hotelmerge_core::raw::PatagoniaImage;
use hotelmerge_core::{Hotel, HotelKey, ImageDetail, PatagoniaHotel, Supplier};

use crate::rules::{fill_coordinate, fill_if_empty, union_images, union_tokens};

use super::SupplierMapper;

/// Supplier B. Contributes geocoordinates, room amenities and room/amenity
/// images; its text fields only fill gaps.
pub struct PatagoniaMapper;

impl SupplierMapper for PatagoniaMapper {
    type Record = PatagoniaHotel;

    const SUPPLIER: Supplier = Supplier::Patagonia;

    fn key(record: &PatagoniaHotel) -> HotelKey {
        HotelKey::new(record.id.clone(), record.destination)
    }

    fn update(hotel: &mut Hotel, record: &PatagoniaHotel) {
        fill_if_empty(&mut hotel.name, non_empty(record.name.as_deref()));
        fill_if_empty(&mut hotel.description, non_empty(record.info.as_deref()));

        fill_coordinate(&mut hotel.location.latitude, record.lat);
        fill_coordinate(&mut hotel.location.longitude, record.lng);
        fill_if_empty(&mut hotel.location.address, non_empty(record.address.as_deref()));

        union_tokens(&mut hotel.amenities.room, &record.amenities, beautify_lower);

        union_images(&mut hotel.images.rooms, record.images.rooms.iter().map(to_image));
        union_images(
            &mut hotel.images.amenities,
            record.images.amenities.iter().map(to_image),
        );
    }
}

fn to_image(image: &PatagoniaImage) -> ImageDetail {
    ImageDetail::new(
        beautify_nullable(image.url.as_deref()),
        beautify_nullable(image.description.as_deref()),
    )
}
