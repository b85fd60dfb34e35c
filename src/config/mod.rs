//! Configuration module for Eiga-Reviews
//!
//! This module holds the scraper settings that used to be fixed constants
//! (URL template, user agent, page size, inter-page wait) and loads them from
//! TOML when a file is preferred over the defaults.
//!
//! # Example
//!
//! ```no_run
//! use eiga_reviews::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("reviews.toml")).unwrap();
//! println!("Scraping movie {}", config.movie_id);
//! ```

mod parser;
mod types;
mod validation;

pub use types::{ScraperConfig, DEFAULT_MOVIE_ID, DEFAULT_URL_TEMPLATE};

pub use parser::{load_config, parse_config};
pub use validation::validate;
