/// Data layer: core types, loading, caching, and filtering.
///
/// Architecture:
/// ```text
///  Final_Remastered_Meta_Data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  one read per session, Arc<Dataset>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  selection → Subset (row indices)
///   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
