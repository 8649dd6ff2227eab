// src/converter.rs

//! Script conversion backends
//!
//! The `Converter` trait is the only thing the line converter knows about
//! the conversion capability. `ZhConverter` backs it with the `zhconv`
//! tables; any closure with the right signature works too, which keeps
//! tests free of the real tables.
//!
//! # Example
//!
//! ```ignore
//! use hanconv::{Converter, Target, ZhConverter};
//!
//! let converter = ZhConverter::new(Target::Traditional);
//! assert_eq!(converter.convert("简体字")?, "簡體字");
//! ```

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use zhconv::Variant;

/// A string-to-string script conversion
pub trait Converter {
    /// Convert one piece of text
    fn convert(&self, text: &str) -> Result<String, ConversionError>;
}

impl<F> Converter for F
where
    F: Fn(&str) -> Result<String, ConversionError>,
{
    fn convert(&self, text: &str) -> Result<String, ConversionError> {
        self(text)
    }
}

/// Script variant to convert into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Target {
    /// Traditional characters (zh-Hant)
    #[default]
    #[serde(rename = "zh-hant", alias = "s2t", alias = "traditional")]
    Traditional,
    /// Simplified characters (zh-Hans)
    #[serde(rename = "zh-hans", alias = "t2s", alias = "simplified")]
    Simplified,
    /// Traditional with Taiwan phrasing (zh-TW)
    #[serde(rename = "zh-tw")]
    Taiwan,
    /// Traditional with Hong Kong phrasing (zh-HK)
    #[serde(rename = "zh-hk")]
    HongKong,
    /// Simplified with mainland phrasing (zh-CN)
    #[serde(rename = "zh-cn")]
    Mainland,
}

impl Target {
    pub fn all() -> &'static [Target] {
        &[
            Target::Traditional,
            Target::Simplified,
            Target::Taiwan,
            Target::HongKong,
            Target::Mainland,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Target::Traditional => "zh-hant",
            Target::Simplified => "zh-hans",
            Target::Taiwan => "zh-tw",
            Target::HongKong => "zh-hk",
            Target::Mainland => "zh-cn",
        }
    }

    /// Human-readable description for `hanconv targets`
    pub fn description(&self) -> &'static str {
        match self {
            Target::Traditional => "Traditional Chinese (simplified-to-traditional)",
            Target::Simplified => "Simplified Chinese (traditional-to-simplified)",
            Target::Taiwan => "Traditional Chinese, Taiwan vocabulary",
            Target::HongKong => "Traditional Chinese, Hong Kong vocabulary",
            Target::Mainland => "Simplified Chinese, mainland vocabulary",
        }
    }

    fn variant(&self) -> Variant {
        match self {
            Target::Traditional => Variant::ZhHant,
            Target::Simplified => Variant::ZhHans,
            Target::Taiwan => Variant::ZhTW,
            Target::HongKong => Variant::ZhHK,
            Target::Mainland => Variant::ZhCN,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "zh-hant" | "s2t" | "traditional" => Ok(Target::Traditional),
            "zh-hans" | "t2s" | "simplified" => Ok(Target::Simplified),
            "zh-tw" => Ok(Target::Taiwan),
            "zh-hk" => Ok(Target::HongKong),
            "zh-cn" => Ok(Target::Mainland),
            _ => Err(format!("Unknown conversion target: {}", s)),
        }
    }
}

/// Converter backed by the `zhconv` conversion tables
#[derive(Debug, Clone, Copy, Default)]
pub struct ZhConverter {
    target: Target,
}

impl ZhConverter {
    pub fn new(target: Target) -> Self {
        Self { target }
    }

    pub fn target(&self) -> Target {
        self.target
    }
}

impl Converter for ZhConverter {
    fn convert(&self, text: &str) -> Result<String, ConversionError> {
        Ok(zhconv::zhconv(text, self.target.variant()))
    }
}
