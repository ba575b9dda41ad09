use crate::models::MediaFile;
use thiserror::Error;

pub const IMAGE_MAX_SIZE: u64 = 2 * 1024 * 1024;
pub const VIDEO_MAX_SIZE: u64 = 10 * 1024 * 1024;
/// 10 images + 1 video
pub const MAX_FILES: usize = 11;

pub const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];
pub const ALLOWED_VIDEO_TYPES: [&str; 1] = ["video/mp4"];

/// Why a selected file was refused. Non-fatal: other files in the same
/// batch are still accepted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FileRejected {
    #[error("Image file size must not exceed 2MB")]
    ImageTooLarge,
    #[error("Video file size must not exceed 10MB")]
    VideoTooLarge,
    #[error("Only JPG, PNG images and MP4 videos are allowed")]
    UnsupportedType,
}

/// Classify a file by MIME type and enforce the per-type size ceiling.
/// Pure and deterministic; the same file always gets the same verdict.
pub fn validate(file: &MediaFile) -> Result<(), FileRejected> {
    if ALLOWED_IMAGE_TYPES.contains(&file.content_type.as_str()) {
        if file.size() > IMAGE_MAX_SIZE {
            return Err(FileRejected::ImageTooLarge);
        }
    } else if ALLOWED_VIDEO_TYPES.contains(&file.content_type.as_str()) {
        if file.size() > VIDEO_MAX_SIZE {
            return Err(FileRejected::VideoTooLarge);
        }
    } else {
        return Err(FileRejected::UnsupportedType);
    }

    Ok(())
}
