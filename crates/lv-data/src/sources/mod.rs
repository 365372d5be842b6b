pub mod csv_source;
pub mod memory_source;

pub use csv_source::CsvSource;
pub use memory_source::MemorySource;
