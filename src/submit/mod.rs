pub mod controller;
pub mod errors;
pub mod payload;

pub use controller::{ListingApi, StrapiApi, SubmissionController, SubmitOutcome};
pub use errors::SubmitError;
pub use payload::{build, ListingPayload};
