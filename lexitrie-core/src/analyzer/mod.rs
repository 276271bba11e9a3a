//! Text analysis pipeline.
//!
//! This module turns raw text into insertable words:
//! - **Tokenizer**: Splits text into candidate words on a fixed separator set
//! - **Forms**: Expands each word into its whole, stem and compound variants
//! - **Normalizer**: Folds ASCII case into sentinel-terminated word keys

pub mod forms;
pub mod normalizer;
pub mod tokenizer;

pub use forms::{Form, Forms};
pub use normalizer::{TextNormalizer, WordKey};
pub use tokenizer::{Tokenizer, Words};
