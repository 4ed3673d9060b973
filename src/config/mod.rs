pub mod env;

pub use env::{ClientOptions, Credentials, DEFAULT_API_URL, DEFAULT_USER_AGENT};
