use crate::models::{Intent, SelectOption};

/// Full property-type list, offered as-is for sale listings
pub const ALL_PROPERTY_TYPES: [SelectOption; 5] = [
    SelectOption { label: "Villa", value: "villa" },
    SelectOption { label: "Townhouse", value: "townhouse" },
    SelectOption { label: "Apartment", value: "apartment" },
    SelectOption { label: "Land", value: "land" },
    SelectOption { label: "Other", value: "other" },
];

pub const RENTAL_DURATIONS: [SelectOption; 2] = [
    SelectOption { label: "Monthly", value: "monthly" },
    SelectOption { label: "Yearly", value: "yearly" },
];

pub const SALE_TENURES: [SelectOption; 4] = [
    SelectOption { label: "Freehold (SHM)", value: "freehold_shm" },
    SelectOption { label: "Leasehold", value: "leasehold" },
    SelectOption { label: "HGB (Company Title)", value: "hgb" },
    SelectOption { label: "Right of Use (Hak Pakai)", value: "hak_pakai" },
];

pub const BUILDING_PERMITS: [SelectOption; 3] = [
    SelectOption { label: "IMG / PBG", value: "img_pbg" },
    SelectOption { label: "SLF", value: "slf" },
    SelectOption { label: "None", value: "none" },
];

pub const MANAGED_BY_COMPANY: [SelectOption; 2] = [
    SelectOption { label: "Yes", value: "yes" },
    SelectOption { label: "No", value: "no" },
];

pub const PRICE_PERIODS: [SelectOption; 2] = [
    SelectOption { label: "Per Month", value: "monthly" },
    SelectOption { label: "Per Year", value: "yearly" },
];

/// Property types offered for the given intent. Rent listings only
/// accept villa, townhouse and apartment.
pub fn property_type_options(intent: Intent) -> Vec<SelectOption> {
    match intent {
        Intent::Sale => ALL_PROPERTY_TYPES.to_vec(),
        Intent::Rent => ALL_PROPERTY_TYPES
            .iter()
            .filter(|o| matches!(o.value, "villa" | "townhouse" | "apartment"))
            .cloned()
            .collect(),
    }
}

/// The tenure selector doubles as the rental-duration selector for rent
pub fn tenure_options(intent: Intent) -> Vec<SelectOption> {
    match intent {
        Intent::Rent => RENTAL_DURATIONS.to_vec(),
        Intent::Sale => SALE_TENURES.to_vec(),
    }
}

pub fn price_label(intent: Intent) -> &'static str {
    match intent {
        Intent::Rent => "Rental Price (IDR)",
        Intent::Sale => "Listing Price (IDR)",
    }
}

pub fn tenure_label(intent: Intent) -> &'static str {
    match intent {
        Intent::Rent => "Rental Type",
        Intent::Sale => "Tenure",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rent_restricts_property_types() {
        let options = property_type_options(Intent::Rent);
        let values: Vec<&str> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, ["villa", "townhouse", "apartment"]);
    }

    #[test]
    fn sale_offers_all_property_types() {
        assert_eq!(property_type_options(Intent::Sale).len(), 5);
    }

    #[test]
    fn labels_follow_intent() {
        assert_eq!(price_label(Intent::Rent), "Rental Price (IDR)");
        assert_eq!(price_label(Intent::Sale), "Listing Price (IDR)");
        assert_eq!(tenure_label(Intent::Rent), "Rental Type");
        assert_eq!(tenure_label(Intent::Sale), "Tenure");
    }

    #[test]
    fn tenure_selector_switches_option_set() {
        assert_eq!(tenure_options(Intent::Rent), RENTAL_DURATIONS.to_vec());
        assert_eq!(tenure_options(Intent::Sale), SALE_TENURES.to_vec());
    }
}
