pub mod grant;
pub mod token;

pub use grant::{request_password_grant, TOKEN_PATH};
pub use token::{OAuthToken, PasswordGrant, TokenReference};
