//! # Podio Rust Crate
//!
//! Cliente tipado para a API REST do Podio.
//!
//! ## Features
//!
//! - Autenticação OAuth2 (password grant)
//! - Token compartilhado entre clones do cliente, trocado de forma atômica
//! - Organizações, spaces, apps e campos com releitura após escrita
//! - Serialização esparsa dos parâmetros de escrita
//!
//! ## Exemplo
//!
//! ```no_run
//! use podio::{ClientOptions, Credentials, PodioClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PodioClient::new(ClientOptions::new("client-id", "client-secret"))?;
//!     client
//!         .authenticate(&Credentials::new("user@example.com", "secret"))
//!         .await?;
//!
//!     for org in client.get_organizations().await? {
//!         println!("{} {:?}", org.org_id, org.name);
//!     }
//!     Ok(())
//! }
//! ```

/// Troca de credenciais pelo token OAuth2
pub mod auth;

/// Cliente da API e endpoints por recurso
pub mod client;

/// Módulo de configuração
pub mod config;

/// Módulo de tratamento de erros
pub mod error;

/// Transporte HTTP autenticado
pub mod transport;

pub mod types;

// Re-exportações para conveniência
pub use auth::OAuthToken;
pub use client::PodioClient;
pub use config::{ClientOptions, Credentials};
pub use error::{PodioError, PodioResult};
pub use types::*;
