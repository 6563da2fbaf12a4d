//! Infrastructure layer - storage and upstream adapters

pub mod storage;
pub mod upstream;
