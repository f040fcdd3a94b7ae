pub mod scrape_result;
pub mod scraped_file;

pub use scrape_result::{DirectoryScrape, ScrapeResult};
pub use scraped_file::ScrapedFile;
