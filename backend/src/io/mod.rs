//! Dataset loading.

pub mod loaders;


pub use loaders::{load_datasets, DataPaths};
