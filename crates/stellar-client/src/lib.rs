pub mod client;
pub mod error;
pub mod logger;

pub use client::Client;
pub use error::{ClientError, Result};

#[cfg(test)]
mod tests;
