/// Data layer: core types, loading, and the derived chart views.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset │  Vec<LaunchRecord>, site / booster / payload index
///   └───────────────┘
///        │
///        ├──────────────┬────────────────┐
///        ▼              ▼                ▼
///   ┌─────────┐   ┌───────────┐   ┌──────────┐
///   │ options │   │ aggregate │   │  filter  │
///   └─────────┘   └───────────┘   └──────────┘
///   site dropdown  pie slices      scatter rows
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod options;
