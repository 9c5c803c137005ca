use std::{fmt::Display, str::FromStr};

use enumflags2::{BitFlags, bitflags};
use log::trace;
use thiserror::Error;

#[bitflags]
#[repr(u8)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Attribute {
    Noselect,
    Nonexistent,
    Noinferiors,
    HasChildren,
    HasNoChildren,
    Marked,
    Unmarked,
}

impl Attribute {
    pub fn into_bitflags<I, S>(markers: I) -> BitFlags<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        markers
            .into_iter()
            .filter_map(|marker| Attribute::from_str(marker.as_ref()).ok())
            .collect()
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Attribute::Noselect => write!(f, r"\Noselect"),
            Attribute::Nonexistent => write!(f, r"\Nonexistent"),
            Attribute::Noinferiors => write!(f, r"\Noinferiors"),
            Attribute::HasChildren => write!(f, r"\HasChildren"),
            Attribute::HasNoChildren => write!(f, r"\HasNoChildren"),
            Attribute::Marked => write!(f, r"\Marked"),
            Attribute::Unmarked => write!(f, r"\Unmarked"),
        }
    }
}

#[derive(Error, Debug)]
#[error("unknown folder attribute {attribute}")]
pub struct UnknownAttributeError {
    attribute: String,
}

impl FromStr for Attribute {
    type Err = UnknownAttributeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let marker = value.strip_prefix('\\').unwrap_or(value);
        match marker.to_ascii_lowercase().as_str() {
            "noselect" => Ok(Attribute::Noselect),
            "nonexistent" => Ok(Attribute::Nonexistent),
            "noinferiors" => Ok(Attribute::Noinferiors),
            "haschildren" => Ok(Attribute::HasChildren),
            "hasnochildren" => Ok(Attribute::HasNoChildren),
            "marked" => Ok(Attribute::Marked),
            "unmarked" => Ok(Attribute::Unmarked),
            _ => {
                trace!("encountered unhandled folder attribute {value}");
                Err(Self::Err {
                    attribute: value.to_string(),
                })
            }
        }
    }
}
