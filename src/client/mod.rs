pub mod api;
pub mod applications;
pub mod fields;
pub mod organizations;
pub mod spaces;

pub use api::PodioClient;
