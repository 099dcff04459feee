//! Client-side request signing for the PreferredPictures choose API.
//!
//! Given a set of candidate choices, this crate builds a signed,
//! tamper-resistant URL that asks the PreferredPictures service to pick one
//! of them and either redirect to it or return it as JSON. The crate never
//! touches the network: everything it does is deterministic parameter
//! assembly, canonical serialization, HMAC-SHA256 signing, and URL encoding.
//!
//! ## Example
//!
//! ```
//! use preferred_pictures::{ChooseRequest, Config, Signer};
//!
//! # fn main() -> preferred_pictures::Result<()> {
//! let config = Config {
//!     identity: Some("testidentity".to_string()),
//!     secret_key: Some("secret123456".to_string()),
//!     ..Default::default()
//! };
//! let signer = Signer::new(config)?;
//!
//! let request = ChooseRequest::new(
//!     vec!["red".to_string(), "green".to_string(), "blue".to_string()],
//!     "test-tournament",
//! )
//! .with_choices_prefix("https://example.com/image-")
//! .with_choices_suffix(".jpg");
//!
//! let url = signer.build_choose_url(&request)?;
//! assert!(url.starts_with("https://api.preferred-pictures.com/choose?"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! [`Config`] can be filled in directly or loaded from the environment:
//!
//! ```bash
//! export PREFERRED_PICTURES_IDENTITY=your-identity
//! export PREFERRED_PICTURES_SECRET_KEY=your-secret-key
//! ```
//!
//! Fields set on the struct always win over the environment.
//!
//! ## Concurrency
//!
//! [`Signer`] holds only immutable owned data and signs through `&self`, so
//! a single instance can be shared across any number of threads without
//! synchronization.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod config;
pub use config::Config;

mod constants;

mod error;
pub use error::{Error, ErrorKind, Result};

mod hash;

mod request;
pub use request::ChooseRequest;

mod signer;
pub use signer::Signer;

mod time;
