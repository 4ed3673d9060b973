pub mod authenticated;
pub mod request;

pub use authenticated::AuthenticatedTransport;
pub use request::ApiRequest;
