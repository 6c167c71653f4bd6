// Adapters layer: concrete dataset sources (http, local file) behind the DatasetSource port.

pub mod source;

pub use source::{AnySource, FileSource, HttpSource};
