//! # aw3-mock-api
//!
//! Fixture-backed mock of the AW3 platform HTTP API, a marketplace where
//! Web3 projects fund campaigns and content creators apply, deliver and get
//! paid out of escrow.
//!
//! Nothing is persisted. Reads come from a fixed [`domain::FixtureStore`];
//! writes are validated and echoed back as if they had been stored. Numeric
//! status and category codes resolve through the lookup tables in
//! [`domain::enums`].
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers + DTOs (api/)
//!     ├── Envelope / ApiError (api/envelope, error)
//!     │
//!     ├── MarketplaceService (service/)
//!     │
//!     ├── Calculators: match rate, fees, listing, time series (domain/)
//!     └── FixtureStore + enum tables (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod doc;
pub mod domain;
pub mod error;
pub mod service;
