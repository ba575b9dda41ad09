pub mod client;
pub mod validator;

pub use client::{FileUploadClient, MediaUploader, UploadError};
pub use validator::{validate, FileRejected, MAX_FILES};
