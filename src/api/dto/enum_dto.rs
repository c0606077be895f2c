//! Enum table DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::enums::EnumDomain;

/// One code and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EnumEntry {
    /// Numeric code.
    pub code: u8,
    /// Display label.
    pub label: String,
}

/// A full lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct EnumTable {
    /// Domain name.
    pub domain: String,
    /// Entries in code order.
    pub values: Vec<EnumEntry>,
}

impl From<EnumDomain> for EnumTable {
    fn from(domain: EnumDomain) -> Self {
        Self {
            domain: domain.name().to_string(),
            values: domain
                .entries()
                .map(|(code, label)| EnumEntry {
                    code,
                    label: label.to_string(),
                })
                .collect(),
        }
    }
}
