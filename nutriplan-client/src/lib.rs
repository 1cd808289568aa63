mod client;
pub mod report;

pub use client::{create, Client, ClientImpl, Error, MockClient, Result};
