use crate::models::{FileRef, FormState, Intent};
use serde::Serialize;

/// Wire shape for a sale listing, field names as the CMS expects them
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SaleListing {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub property_address: String,
    pub maps_long_lat: String,
    pub property_type: String,
    pub bedroom_number: i64,
    pub bathroom_number: i64,
    pub building_size: i64,
    pub land_size: i64,
    pub property_description: Option<String>,
    pub tenure: String,
    pub remaining_lease: i64,
    pub building_permits: String,
    pub listing_price: i64,
    pub villa_photos: Option<Vec<FileRef>>,
}

/// Wire shape for a rental listing
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RentListing {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub phone_number: String,
    pub property_address: String,
    pub maps_long_lat: String,
    pub property_type: String,
    pub bedroom_number: i64,
    pub bathroom_number: i64,
    pub building_size: i64,
    pub land_size: i64,
    pub property_description: Option<String>,
    pub rental_type: String,
    pub managed_property: bool,
    pub company_name: Option<String>,
    pub rental_price: i64,
    pub rental_period: String,
    pub villa_photos: Option<Vec<FileRef>>,
}

/// The two entity shapes the backend accepts, keyed by intent
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ListingPayload {
    Sale(SaleListing),
    Rent(RentListing),
}

/// The CMS wraps every entity write in a `data` object
#[derive(Debug, Serialize)]
pub struct Envelope<'a> {
    pub data: &'a ListingPayload,
}

/// Numeric form inputs default to zero when blank or unparseable
fn int_or_zero(value: &str) -> i64 {
    value.trim().parse().unwrap_or(0)
}

/// Empty strings become explicit nulls; the backend treats "" and null
/// differently, so this must never pass an empty string through
fn text_or_null(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// An empty upload batch becomes null, never an empty array
fn refs_or_null(refs: &[FileRef]) -> Option<Vec<FileRef>> {
    if refs.is_empty() {
        None
    } else {
        Some(refs.to_vec())
    }
}

/// Pure transform from form state to the backend entity shape.
/// Total: never fails, whatever the field contents.
pub fn build(state: &FormState, intent: Intent, refs: &[FileRef]) -> ListingPayload {
    match intent {
        Intent::Sale => ListingPayload::Sale(SaleListing {
            first_name: state.first_name.clone(),
            last_name: state.last_name.clone(),
            email_address: state.email.clone(),
            phone_number: state.phone.clone(),
            property_address: state.property_address.clone(),
            maps_long_lat: state.location_pin.clone(),
            property_type: state.property_type.clone(),
            bedroom_number: int_or_zero(&state.bedrooms),
            bathroom_number: int_or_zero(&state.bathrooms),
            building_size: int_or_zero(&state.building_size),
            land_size: int_or_zero(&state.land_size),
            property_description: text_or_null(&state.property_description),
            tenure: state.tenure.clone(),
            remaining_lease: int_or_zero(&state.lease_years),
            building_permits: state.building_permits.clone(),
            listing_price: int_or_zero(&state.price),
            villa_photos: refs_or_null(refs),
        }),
        Intent::Rent => {
            let managed = state.managed_by_company == "yes";
            ListingPayload::Rent(RentListing {
                first_name: state.first_name.clone(),
                last_name: state.last_name.clone(),
                email_address: state.email.clone(),
                phone_number: state.phone.clone(),
                property_address: state.property_address.clone(),
                maps_long_lat: state.location_pin.clone(),
                property_type: state.property_type.clone(),
                bedroom_number: int_or_zero(&state.bedrooms),
                bathroom_number: int_or_zero(&state.bathrooms),
                building_size: int_or_zero(&state.building_size),
                land_size: int_or_zero(&state.land_size),
                property_description: text_or_null(&state.property_description),
                rental_type: state.rent_duration.clone(),
                managed_property: managed,
                company_name: if managed {
                    Some(state.company_name.clone())
                } else {
                    None
                },
                rental_price: int_or_zero(&state.price),
                rental_period: state.price_period.clone(),
                villa_photos: refs_or_null(refs),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_state() -> FormState {
        FormState {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "j@x.com".to_string(),
            phone: "555".to_string(),
            property_address: "Jl. Test 1".to_string(),
            location_pin: "https://maps.example/pin".to_string(),
            bedrooms: "3".to_string(),
            bathrooms: "2".to_string(),
            building_size: "120".to_string(),
            land_size: "200".to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn empty_description_becomes_null() {
        let mut state = filled_state();
        state.property_description = String::new();
        let payload = build(&state, Intent::Sale, &[]);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["property_description"], json!(null));
    }

    #[test]
    fn no_uploads_means_null_photos_not_empty_array() {
        let payload = build(&filled_state(), Intent::Sale, &[]);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["villa_photos"], json!(null));
    }

    #[test]
    fn uploaded_refs_serialize_as_plain_ids() {
        let refs = [FileRef(7), FileRef(8)];
        let payload = build(&filled_state(), Intent::Rent, &refs);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["villa_photos"], json!([7, 8]));
    }

    #[test]
    fn numeric_fields_parse_int_or_zero() {
        let mut state = filled_state();
        state.bedrooms = "not a number".to_string();
        state.price = "5000000".to_string();
        state.lease_years = String::new();
        let payload = build(&state, Intent::Sale, &[]);
        match payload {
            ListingPayload::Sale(sale) => {
                assert_eq!(sale.bedroom_number, 0);
                assert_eq!(sale.listing_price, 5_000_000);
                assert_eq!(sale.remaining_lease, 0);
            }
            ListingPayload::Rent(_) => panic!("expected sale payload"),
        }
    }

    #[test]
    fn sale_payload_carries_tenure_fields() {
        let mut state = filled_state();
        state.tenure = "leasehold".to_string();
        state.lease_years = "20".to_string();
        state.building_permits = "img_pbg".to_string();
        state.price = "900000000".to_string();
        let value = serde_json::to_value(&build(&state, Intent::Sale, &[])).unwrap();
        assert_eq!(value["tenure"], json!("leasehold"));
        assert_eq!(value["remaining_lease"], json!(20));
        assert_eq!(value["building_permits"], json!("img_pbg"));
        assert_eq!(value["listing_price"], json!(900000000i64));
        assert!(value.get("rental_price").is_none());
    }

    #[test]
    fn managed_rental_carries_company_name() {
        let mut state = filled_state();
        state.managed_by_company = "yes".to_string();
        state.company_name = "Acme Villas".to_string();
        state.rent_duration = "monthly".to_string();
        let value = serde_json::to_value(&build(&state, Intent::Rent, &[])).unwrap();
        assert_eq!(value["managed_property"], json!(true));
        assert_eq!(value["company_name"], json!("Acme Villas"));
    }

    #[test]
    fn self_managed_rental_nulls_company_name() {
        let mut state = filled_state();
        state.managed_by_company = "no".to_string();
        state.company_name = "ignored".to_string();
        let value = serde_json::to_value(&build(&state, Intent::Rent, &[])).unwrap();
        assert_eq!(value["managed_property"], json!(false));
        assert_eq!(value["company_name"], json!(null));
    }

    #[test]
    fn envelope_wraps_payload_in_data() {
        let payload = build(&filled_state(), Intent::Rent, &[]);
        let value = serde_json::to_value(Envelope { data: &payload }).unwrap();
        assert!(value.get("data").is_some());
        assert_eq!(value["data"]["first_name"], json!("Jane"));
    }
}
