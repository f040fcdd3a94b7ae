pub mod entities;

pub use entities::{DirectoryScrape, ScrapeResult, ScrapedFile};
