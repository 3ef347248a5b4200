use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

use crate::error::{Error, Result};
use crate::image_url::{get_image_url, ImageUrlBuilder};

/// Ticket categories the backend stores pictures under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PictureType {
    #[serde(rename = "NK")]
    NhapKho,
    #[serde(rename = "CT")]
    CanThue,
    #[serde(rename = "NT")]
    NhapTau,
    #[serde(rename = "XK")]
    XuatKho,
}

impl PictureType {
    pub const ALL: [PictureType; 4] = [
        PictureType::NhapKho,
        PictureType::CanThue,
        PictureType::NhapTau,
        PictureType::XuatKho,
    ];

    /// Folder and URL segment, e.g. `NK`.
    pub fn code(self) -> &'static str {
        match self {
            PictureType::NhapKho => "NK",
            PictureType::CanThue => "CT",
            PictureType::NhapTau => "NT",
            PictureType::XuatKho => "XK",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PictureType::NhapKho => "NhapKho",
            PictureType::CanThue => "CanThue",
            PictureType::NhapTau => "NhapTau",
            PictureType::XuatKho => "XuatKho",
        }
    }
}

impl fmt::Display for PictureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for PictureType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PictureType::ALL
            .into_iter()
            .find(|ty| ty.code() == s)
            .ok_or_else(|| Error::unknown_picture_type(s))
    }
}

const CAMERA_MARKER: &str = "-CMR";

/// Picture file name in the form `[ticket]-CMR[camera]_[sequence]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PictureFileName {
    pub ticket_number: String,
    pub camera_number: u64,
    pub sequence: u64,
}

impl PictureFileName {
    pub fn new(ticket_number: impl Into<String>, camera_number: u64, sequence: u64) -> Self {
        Self {
            ticket_number: ticket_number.into(),
            camera_number,
            sequence,
        }
    }

    pub fn stem(&self) -> String {
        format!("{}{CAMERA_MARKER}{}_{}", self.ticket_number, self.camera_number, self.sequence)
    }

    pub fn with_extension(&self, extension: &str) -> String {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            self.stem()
        } else {
            format!("{}.{extension}", self.stem())
        }
    }

    /// Parses a file name, with or without extension. Camera and sequence
    /// numbers beyond `u64::MAX` are rejected.
    pub fn parse(filename: &str) -> Result<Self> {
        let stem = strip_extension(filename);
        let invalid = || Error::invalid_file_name(filename);

        let (rest, sequence) = stem.rsplit_once('_').ok_or_else(invalid)?;
        let (ticket_number, camera_number) = rest.rsplit_once(CAMERA_MARKER).ok_or_else(invalid)?;
        if ticket_number.is_empty() {
            return Err(invalid());
        }

        Ok(Self {
            ticket_number: ticket_number.to_string(),
            camera_number: parse_digits(camera_number).ok_or_else(invalid)?,
            sequence: parse_digits(sequence).ok_or_else(invalid)?,
        })
    }
}

impl fmt::Display for PictureFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stem())
    }
}

impl FromStr for PictureFileName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// A leading dot marks a hidden file, not an extension.
fn strip_extension(filename: &str) -> &str {
    let start = filename.len() - filename.trim_start_matches('.').len();
    match filename[start..].rfind('.') {
        Some(idx) => &filename[..start + idx],
        None => filename,
    }
}

fn parse_digits(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

pub fn format_picture_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), u8::from(date.month()), date.day())
}

/// Accepts unpadded month and day, e.g. `2024-6-1`.
pub fn parse_picture_date(value: &str) -> Result<Date> {
    let format = format_description!("[year]-[month padding:none]-[day padding:none]");
    Date::parse(value, &format).map_err(|e| Error::invalid_date(value, e))
}

/// The three path segments that identify one picture on the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PictureRef {
    pub picture_type: PictureType,
    pub date: String,
    pub filename: String,
}

impl PictureRef {
    pub fn new(picture_type: PictureType, date: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            picture_type,
            date: date.into(),
            filename: filename.into(),
        }
    }

    pub fn from_parts(picture_type: PictureType, date: Date, name: &PictureFileName, extension: &str) -> Self {
        Self::new(picture_type, format_picture_date(date), name.with_extension(extension))
    }

    pub fn file_name(&self) -> Result<PictureFileName> {
        PictureFileName::parse(&self.filename)
    }

    /// URL against the process-wide configuration.
    pub fn url(&self) -> String {
        get_image_url(self.picture_type, &self.date, &self.filename)
    }

    pub fn url_with(&self, builder: &ImageUrlBuilder) -> String {
        builder.image_url(self.picture_type, &self.date, &self.filename)
    }
}
