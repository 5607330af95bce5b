/// Data layer: core types, loading, and alignment.
///
/// Architecture:
/// ```text
///  jpos_des.txt  config.txt  ...  time.txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse files → ExperimentLog
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ ExperimentLog │  six Tables + TimeVector
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  window   │  trim warm-up and tail → aligned ExperimentLog
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  aligned series → CSV (optional)
///   └──────────┘
/// ```

pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod sample;
pub mod window;

pub use error::DataError;
