pub mod client;

pub use client::{ChatNetwork, MessageClient, exchange};
