use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A named viewport size the document is rendered at.
///
/// Identity is the `name`; two resolutions with the same name refer to the
/// same test slot even if their dimensions differ between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

/// The three canonical test sizes used when no resolutions are configured.
pub fn default_resolutions() -> Vec<Resolution> {
    vec![
        Resolution::new("mobile", 390, 844),
        Resolution::new("tablet", 768, 1024),
        Resolution::new("desktop", 1920, 1080),
    ]
}

#[derive(Debug, Error)]
pub enum ResolutionParseError {
    #[error("Invalid resolution format: expected NAME:WIDTHxHEIGHT (e.g., mobile:390x844)")]
    InvalidFormat,
    #[error("Resolution name must not be empty")]
    EmptyName,
    #[error("Invalid width: {0}")]
    InvalidWidth(String),
    #[error("Invalid height: {0}")]
    InvalidHeight(String),
    #[error("Width must be positive")]
    ZeroWidth,
    #[error("Height must be positive")]
    ZeroHeight,
}

impl FromStr for Resolution {
    type Err = ResolutionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, dims) = s
            .split_once(':')
            .ok_or(ResolutionParseError::InvalidFormat)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ResolutionParseError::EmptyName);
        }

        let parts: Vec<&str> = dims.split('x').collect();
        if parts.len() != 2 {
            return Err(ResolutionParseError::InvalidFormat);
        }

        let width: u32 = parts[0]
            .trim()
            .parse()
            .map_err(|_| ResolutionParseError::InvalidWidth(parts[0].to_string()))?;

        let height: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| ResolutionParseError::InvalidHeight(parts[1].to_string()))?;

        if width == 0 {
            return Err(ResolutionParseError::ZeroWidth);
        }
        if height == 0 {
            return Err(ResolutionParseError::ZeroHeight);
        }

        Ok(Resolution::new(name, width, height))
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}
