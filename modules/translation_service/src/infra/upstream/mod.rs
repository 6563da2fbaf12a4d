//! Upstream translation API adapters

pub mod client;
pub mod wire;

pub use client::RapidApiTranslator;
