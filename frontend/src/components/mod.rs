pub mod dashboard;
pub mod header;
pub mod profile;

pub use header::Header;
