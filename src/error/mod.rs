pub mod podio_error;

pub use podio_error::{PodioError, PodioResult};
