pub mod client;
pub mod error;
pub mod types;

pub use client::AppwriteClient;
pub use error::AppwriteError;
