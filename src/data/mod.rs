/// Data layer: core types, loading, and grid assembly.
///
/// Architecture:
/// ```text
///  1.5.txt … 0.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse each file → ConditionSeries
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ HeatmapGrid   │  rows in key order, shared angle axis, mesh
///   └──────────────┘
/// ```
pub mod loader;
pub mod model;
