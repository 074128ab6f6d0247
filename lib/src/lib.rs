pub mod cleaner;
pub mod error;
pub mod filter;
pub mod normalizer;
pub mod reader;
pub mod record;
pub mod stats;
pub mod token;
pub mod tokenizer;
pub mod util;
pub mod writer;

pub use cleaner::{clean_tweet, TweetCleaner};
pub use record::{CleanRecord, RawRecord};
