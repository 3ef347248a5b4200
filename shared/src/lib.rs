pub mod error;
pub mod config;
pub mod image_url;
pub mod picture;
pub mod validation;

pub use error::{Error, ErrorCode, Result};
pub use config::{ApiConfig, DEFAULT_API_BASE_URL};
pub use image_url::{get_image_url, resolve_image_path, ImageUrlBuilder, PICTURE_VIEW_PATH};
pub use picture::{format_picture_date, parse_picture_date, PictureFileName, PictureRef, PictureType};
pub use validation::{check_base_url, BaseUrlIssue};

#[cfg(test)]
mod tests;
