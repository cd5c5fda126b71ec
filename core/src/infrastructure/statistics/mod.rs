pub mod repository;

pub use repository::CsvStatsRepository;
