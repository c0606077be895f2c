//! Domain layer: enum tables, calculators, record types and fixtures.
//!
//! Everything here is synchronous and free of HTTP concerns. Random and
//! time-dependent calculators take their random source and "now" as
//! parameters.

pub mod enums;
pub mod fees;
pub mod fixtures;
pub mod listing;
pub mod match_rate;
pub mod records;
pub mod time_series;
pub mod timestamp;
pub mod tx_hash;

pub use enums::{EnumDomain, UnknownCode, UnknownDomain};
pub use fees::{FeeInputs, FeeQuote};
pub use fixtures::FixtureStore;
pub use listing::{ListingFilter, Page, PageInfo, PageRequest};
pub use match_rate::{CampaignRequirements, CreatorTraits, match_rate};
pub use time_series::{CvpiPoint, EarningsPoint, EarningsRange, HistoryWindow};
