pub mod client;
pub mod config;
pub mod error;
pub mod sceau;
pub mod types;

pub use client::ProduitsClient;
pub use config::ClientConfig;
pub use error::Error;
pub use sceau::compute_sceau;
pub use types::{Params, ProduitsResponse, RawResponse, params};
