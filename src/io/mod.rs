pub mod csv;

pub use csv::parse;
