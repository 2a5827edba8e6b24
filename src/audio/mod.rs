pub mod formats;
pub mod metadata;
