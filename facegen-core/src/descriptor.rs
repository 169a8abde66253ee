//! Font Descriptors - Filename Contract
//!
//! `<FamilyName>[-<WeightStyleToken>].woff2`
//! Only the first `-` is significant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The only extension eligible for descriptor derivation.
pub const ELIGIBLE_EXTENSION: &str = ".woff2";

/// Token used when the filename carries no weight/style part.
pub const DEFAULT_TOKEN: &str = "regular";

/// Ordered weight table. First match wins.
///
/// `extrabold` sits before `bold` and `extralight` before `light`,
/// since the shorter tokens are substrings of the longer ones.
pub const WEIGHT_TOKENS: &[(&str, FontWeight)] = &[
    ("thin", FontWeight::Thin),
    ("extralight", FontWeight::ExtraLight),
    ("light", FontWeight::Light),
    ("regular", FontWeight::Regular),
    ("medium", FontWeight::Medium),
    ("semibold", FontWeight::SemiBold),
    ("extrabold", FontWeight::ExtraBold),
    ("heavy", FontWeight::ExtraBold),
    ("bold", FontWeight::Bold),
    ("black", FontWeight::Black),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
}

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Thin => 100,
            FontWeight::ExtraLight => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
            FontWeight::Black => 900,
        }
    }

    /// Derive a weight from an already-lowercased token.
    pub fn from_token(token: &str) -> Self {
        WEIGHT_TOKENS
            .iter()
            .find(|&&(needle, _)| token.contains(needle))
            .map(|&(_, weight)| weight)
            .unwrap_or_default()
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(FontWeight::Thin),
            200 => Ok(FontWeight::ExtraLight),
            300 => Ok(FontWeight::Light),
            400 => Ok(FontWeight::Regular),
            500 => Ok(FontWeight::Medium),
            600 => Ok(FontWeight::SemiBold),
            700 => Ok(FontWeight::Bold),
            800 => Ok(FontWeight::ExtraBold),
            900 => Ok(FontWeight::Black),
            other => Err(format!("Unsupported font weight: {}", other)),
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

impl FontStyle {
    pub fn from_token(token: &str) -> Self {
        if token.contains("italic") {
            FontStyle::Italic
        } else {
            FontStyle::Normal
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Normal => "normal",
            FontStyle::Italic => "italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listed file split into base name and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile<'a> {
    pub file_name: &'a str,
    pub base_name: &'a str,
    /// Includes the leading dot; empty when the name has no extension.
    pub extension: &'a str,
}

impl<'a> FontFile<'a> {
    /// Dotfiles such as `.woff2` have no extension, matching the usual
    /// path semantics.
    pub fn parse(file_name: &'a str) -> Self {
        match file_name.rfind('.') {
            Some(idx) if idx > 0 => FontFile {
                file_name,
                base_name: &file_name[..idx],
                extension: &file_name[idx..],
            },
            _ => FontFile {
                file_name,
                base_name: file_name,
                extension: "",
            },
        }
    }

    pub fn is_eligible(&self) -> bool {
        self.extension == ELIGIBLE_EXTENSION
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontDescriptor {
    pub family: String,
    pub weight_style_token: String,
    pub weight: FontWeight,
    pub style: FontStyle,
    pub source_file_name: String,
}

impl FontDescriptor {
    /// Derive a descriptor from a bare filename. Returns `None` for
    /// anything that is not a `.woff2` file.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let file = FontFile::parse(file_name);
        if !file.is_eligible() {
            return None;
        }

        let (family, remainder) = match file.base_name.split_once('-') {
            Some((name, rest)) => (name, Some(rest)),
            None => (file.base_name, None),
        };

        // An empty remainder ("Roboto-.woff2") counts as absent.
        let token = match remainder {
            Some(rest) if !rest.is_empty() => rest.to_lowercase(),
            _ => DEFAULT_TOKEN.to_string(),
        };

        Some(Self {
            family: family.to_string(),
            weight: FontWeight::from_token(&token),
            style: FontStyle::from_token(&token),
            weight_style_token: token,
            source_file_name: file.file_name.to_string(),
        })
    }
}

/// Derive descriptors for a listing, preserving its order.
pub fn describe_listing<I, S>(names: I) -> Vec<FontDescriptor>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .filter_map(|name| FontDescriptor::from_file_name(name.as_ref()))
        .collect()
}
