//! Loaders for candidate collections.
//!
//! - **Word lists**: One candidate per line, such as dictionary files or
//!   the output of `find` or `ls`
//!
//! ## Example
//!
//! ```rust,no_run
//! use fuzzy_rank::parsing::wordlist::parse_wordlist_file;
//! use fuzzy_rank::RankPipeline;
//! use std::path::Path;
//!
//! let words = parse_wordlist_file(Path::new("english_words.txt")).unwrap();
//! let ranked = RankPipeline::default().rank(&words, "fzy", 20);
//! ```

pub mod wordlist;
