use serde::{Serialize, Deserialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ErrorCode {
    #[error("Unknown picture type")]
    UnknownPictureType,
    #[error("Invalid picture file name")]
    InvalidFileName,
    #[error("Invalid picture date")]
    InvalidDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(details) = &self.details {
            write!(f, "{}: {} ({})", self.code, self.message, details)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Some(details.into()),
        }
    }

    pub fn unknown_picture_type(value: &str) -> Self {
        Self::with_details(
            ErrorCode::UnknownPictureType,
            "expected one of NK, CT, NT, XK",
            value,
        )
    }

    pub fn invalid_file_name(value: &str) -> Self {
        Self::with_details(
            ErrorCode::InvalidFileName,
            "expected [ticket]-CMR[camera]_[sequence]",
            value,
        )
    }

    pub fn invalid_date(value: &str, reason: impl fmt::Display) -> Self {
        Self::with_details(
            ErrorCode::InvalidDate,
            format!("expected YYYY-MM-DD, {reason}"),
            value,
        )
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code
    }
}

pub type Result<T> = std::result::Result<T, Error>;
