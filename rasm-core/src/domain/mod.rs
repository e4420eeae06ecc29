//! Orthographic rule data and transformation passes
//!
//! The submodules are leaves-first: [`chars`] names the codepoints and
//! character classes everything else is written in terms of, [`table`] holds
//! the ordered substitution corpus, [`rewrite`] applies it to a buffer,
//! [`article`] is the definite-article post-pass over the last word, and
//! [`dots`] is the independent dotted-variant lookup.

pub mod article;
pub mod chars;
pub mod dots;
pub mod rewrite;
pub mod table;
