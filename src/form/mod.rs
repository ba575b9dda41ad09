pub mod model;
pub mod options;

pub use model::{FormModel, ValidationPolicy, ValidationResult};
