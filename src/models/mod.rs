use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the owner wants to rent out or sell the property.
///
/// The intent drives which fields are relevant, which option lists
/// populate the selectors and which payload shape goes to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Rent,
    Sale,
}

impl Default for Intent {
    fn default() -> Self {
        Intent::Rent
    }
}

/// A label/value pair for a selector option
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SelectOption {
    pub label: &'static str,
    pub value: &'static str,
}

/// A locally selected media file, held in memory until upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl MediaFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data,
        }
    }

    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Opaque identifier assigned by the upload endpoint to a stored file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct FileRef(pub i64);

/// Every string-valued field of the form. Field updates go through
/// [`crate::form::FormModel::set_field`] keyed by this enum rather than
/// arbitrary assignment from call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    PropertyAddress,
    LocationPin,
    PropertyType,
    Bedrooms,
    Bathrooms,
    BuildingSize,
    LandSize,
    PropertyDescription,
    RentDuration,
    Tenure,
    LeaseYears,
    BuildingPermits,
    Price,
    ManagedByCompany,
    CompanyName,
    PricePeriod,
}

impl FormField {
    /// Field name used as the key in validation error maps
    pub fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "firstName",
            FormField::LastName => "lastName",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::PropertyAddress => "propertyAddress",
            FormField::LocationPin => "locationPin",
            FormField::PropertyType => "propertyType",
            FormField::Bedrooms => "bedrooms",
            FormField::Bathrooms => "bathrooms",
            FormField::BuildingSize => "buildingSize",
            FormField::LandSize => "landSize",
            FormField::PropertyDescription => "propertyDescription",
            FormField::RentDuration => "rentDuration",
            FormField::Tenure => "tenure",
            FormField::LeaseYears => "leaseYears",
            FormField::BuildingPermits => "buildingPermits",
            FormField::Price => "price",
            FormField::ManagedByCompany => "managedByCompany",
            FormField::CompanyName => "companyName",
            FormField::PricePeriod => "pricePeriod",
        }
    }
}

/// Fields that must be non-empty before a submit may proceed,
/// regardless of intent
pub const REQUIRED_FIELDS: [FormField; 5] = [
    FormField::FirstName,
    FormField::LastName,
    FormField::Email,
    FormField::Phone,
    FormField::PropertyAddress,
];

/// All editable field values of the listing form.
///
/// Numeric inputs stay as strings here; parsing to int-or-zero happens
/// once, when the payload is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    // Contact information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,

    // Property details
    pub property_address: String,
    pub location_pin: String,
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub building_size: String,
    pub land_size: String,
    pub property_description: String,

    // Rent-specific
    pub rent_duration: String,
    pub managed_by_company: String,
    pub company_name: String,
    pub price_period: String,

    // Sale-specific
    pub tenure: String,
    pub lease_years: String,
    pub building_permits: String,

    // Shared by both intents
    pub price: String,

    // Media is attached separately by the caller, never deserialized
    #[serde(skip)]
    pub villa_photos: Vec<MediaFile>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            property_address: String::new(),
            location_pin: String::new(),
            property_type: "villa".to_string(),
            bedrooms: "1".to_string(),
            bathrooms: "1".to_string(),
            building_size: String::new(),
            land_size: String::new(),
            property_description: String::new(),
            rent_duration: String::new(),
            tenure: String::new(),
            lease_years: String::new(),
            building_permits: String::new(),
            price: String::new(),
            managed_by_company: String::new(),
            company_name: String::new(),
            price_period: "monthly".to_string(),
            villa_photos: Vec::new(),
        }
    }
}

impl FormState {
    /// Current value of a string-valued field
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::PropertyAddress => &self.property_address,
            FormField::LocationPin => &self.location_pin,
            FormField::PropertyType => &self.property_type,
            FormField::Bedrooms => &self.bedrooms,
            FormField::Bathrooms => &self.bathrooms,
            FormField::BuildingSize => &self.building_size,
            FormField::LandSize => &self.land_size,
            FormField::PropertyDescription => &self.property_description,
            FormField::RentDuration => &self.rent_duration,
            FormField::Tenure => &self.tenure,
            FormField::LeaseYears => &self.lease_years,
            FormField::BuildingPermits => &self.building_permits,
            FormField::Price => &self.price,
            FormField::ManagedByCompany => &self.managed_by_company,
            FormField::CompanyName => &self.company_name,
            FormField::PricePeriod => &self.price_period,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Phone => self.phone = value,
            FormField::PropertyAddress => self.property_address = value,
            FormField::LocationPin => self.location_pin = value,
            FormField::PropertyType => self.property_type = value,
            FormField::Bedrooms => self.bedrooms = value,
            FormField::Bathrooms => self.bathrooms = value,
            FormField::BuildingSize => self.building_size = value,
            FormField::LandSize => self.land_size = value,
            FormField::PropertyDescription => self.property_description = value,
            FormField::RentDuration => self.rent_duration = value,
            FormField::Tenure => self.tenure = value,
            FormField::LeaseYears => self.lease_years = value,
            FormField::BuildingPermits => self.building_permits = value,
            FormField::Price => self.price = value,
            FormField::ManagedByCompany => self.managed_by_company = value,
            FormField::CompanyName => self.company_name = value,
            FormField::PricePeriod => self.price_period = value,
        }
    }
}

/// Submission lifecycle flags, owned by the form model and mutated only
/// by the model and the submission controller
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionStatus {
    pub is_submitting: bool,
    pub is_submitted: bool,
    pub is_uploading: bool,
    pub upload_progress: u8,
    pub submit_error: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
}
