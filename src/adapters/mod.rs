// Adapters layer: concrete implementations for external systems (filesystem, file formats).

pub mod reader;
pub mod storage;
pub mod writer;
