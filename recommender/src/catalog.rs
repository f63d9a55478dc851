// Module declaration file for catalog/

pub mod index;
pub mod math;

pub use index::Catalog;
