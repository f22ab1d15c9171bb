use hotelmerge_core::normalize::{beautify_split_lower, non_empty};
use hotelmerge_core::{AcmeHotel, Hotel, HotelKey, Supplier};

use crate::rules::{fill_coordinate, fill_if_empty, union_tokens};

use super::SupplierMapper;

/// Supplier C. Fills remaining address, city and country gaps and adds
/// general amenities, whose compact compound tokens (`"BusinessCenter"`)
/// are split into lowercase phrases.
pub struct AcmeMapper;

impl SupplierMapper for AcmeMapper {
    type Record = AcmeHotel;

    const SUPPLIER: Supplier = Supplier::Acme;

    fn key(record: &AcmeHotel) -> HotelKey {
        HotelKey::new(record.id.clone(), record.destination_id)
    }

    fn update(hotel: &mut Hotel, record: &AcmeHotel) {
        fill_if_empty(&mut hotel.name, non_empty(record.name.as_deref()));
        fill_if_empty(&mut hotel.description, non_empty(record.description.as_deref()));

        let location = &mut hotel.location;
        fill_coordinate(&mut location.latitude, record.latitude);
        fill_coordinate(&mut location.longitude, record.longitude);
        fill_if_empty(&mut location.address, non_empty(record.address.as_deref()));
        fill_if_empty(&mut location.city, non_empty(record.city.as_deref()));
        fill_if_empty(&mut location.country, non_empty(record.country.as_deref()));

        union_tokens(
            &mut hotel.amenities.general,
            &record.facilities,
            beautify_split_lower,
        );
    }
}
