//! Catalog read access

mod service;

#[cfg(test)]
mod tests;

pub use service::CatalogService;
