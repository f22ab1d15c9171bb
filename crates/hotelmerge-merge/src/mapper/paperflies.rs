use hotelmerge_core::normalize::{beautify, beautify_lower, beautify_nullable, non_empty};
use hotelmerge_core::raw::PaperFliesImage;
use hotelmerge_core::{Hotel, HotelKey, ImageDetail, PaperFliesHotel, Supplier};

use crate::rules::{fill_if_empty, overwrite_if_present, union_images, union_tokens};

use super::SupplierMapper;

/// Supplier A. Primary source for names, descriptions, addresses, both
/// amenity lists, room/site images and booking conditions.
///
/// Its `country` is the one scalar that is not fill-if-empty: any non-empty
/// value replaces what the record already holds.
pub struct PaperFliesMapper;

impl SupplierMapper for PaperFliesMapper {
    type Record = PaperFliesHotel;

    const SUPPLIER: Supplier = Supplier::PaperFlies;

    fn key(record: &PaperFliesHotel) -> HotelKey {
        HotelKey::new(record.hotel_id.clone(), record.destination_id)
    }

    fn update(hotel: &mut Hotel, record: &PaperFliesHotel) {
        fill_if_empty(&mut hotel.name, non_empty(record.hotel_name.as_deref()));
        fill_if_empty(&mut hotel.description, non_empty(record.details.as_deref()));

        let location = &record.location;
        fill_if_empty(&mut hotel.location.address, non_empty(location.address.as_deref()));
        overwrite_if_present(&mut hotel.location.country, non_empty(location.country.as_deref()));

        union_tokens(&mut hotel.amenities.general, &record.amenities.general, beautify_lower);
        union_tokens(&mut hotel.amenities.room, &record.amenities.room, beautify_lower);

        union_images(&mut hotel.images.rooms, record.images.rooms.iter().map(to_image));
        union_images(&mut hotel.images.site, record.images.site.iter().map(to_image));

        union_tokens(&mut hotel.booking_conditions, &record.booking_conditions, beautify);
    }
}

fn to_image(image: &PaperFliesImage) -> ImageDetail {
    ImageDetail::new(
        beautify_nullable(image.link.as_deref()),
        beautify_nullable(image.caption.as_deref()),
    )
}
