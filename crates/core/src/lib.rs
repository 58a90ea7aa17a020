pub mod catalog;
pub mod error;
pub mod locations;
pub mod partition;
pub mod template;

pub use catalog::{collect_query_paths, read_query};
pub use error::CoreError;
pub use locations::read_location_ids;
pub use partition::{expand, Month, Partition};
pub use template::render;
