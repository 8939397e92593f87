pub mod card_extractor;

pub use card_extractor::CardExtractor;
