use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed grid every image is resized to before inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageDimensions {
    fn default() -> Self {
        Self {
            width: 150,
            height: 150,
        }
    }
}

impl fmt::Display for ImageDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Memory layout of the model's input tensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputLayout {
    /// `[1, height, width, 3]`, as exported from Keras.
    #[default]
    Nhwc,
    /// `[1, 3, height, width]`.
    Nchw,
}

impl FromStr for InputLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nhwc" => Ok(InputLayout::Nhwc),
            "nchw" => Ok(InputLayout::Nchw),
            other => Err(format!(
                "unknown input layout '{other}', expected 'nhwc' or 'nchw'"
            )),
        }
    }
}

impl fmt::Display for InputLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputLayout::Nhwc => write!(f, "nhwc"),
            InputLayout::Nchw => write!(f, "nchw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierMode {
    Model,
    Degraded,
}

#[derive(Debug, Clone)]
pub struct ClassifyImageInput {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub image_data: Vec<u8>,
}
