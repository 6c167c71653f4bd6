pub mod controller;
pub mod matcher;
pub mod store;

pub use crate::domain::model::{Country, Dataset, Kind, Match, Place};
pub use crate::domain::ports::{DatasetSource, ResultsSurface, Storage};
pub use crate::utils::error::Result;
