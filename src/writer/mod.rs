//! Output stage: files handed to the external scene builder.
pub mod json;
pub mod xml;
