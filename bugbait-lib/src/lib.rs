// Specimen routines and their data model
pub mod error;
pub mod select;
pub mod stats;
pub mod value;
