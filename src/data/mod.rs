//! Data layer: core types, loading, filtering, and export.
//!
//! Architecture:
//! ```text
//!  planco.csv (';' separated)
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → ChartOfAccounts (normalized number, class)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  cache    │  one table per (path, separator)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  class → prefix → keywords → TableView
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  export   │  TableView → CSV bytes
//!   └──────────┘
//! ```

pub mod cache;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
