//! Data models for packing list records and consolidation settings.

pub mod config;
pub mod record;
