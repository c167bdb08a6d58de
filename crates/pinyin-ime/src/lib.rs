//! The Pinyin-to-Hanzi input engine.
//!
//! [`engine::PinyinEngine`] is the integration point: it owns the syllable
//! grammar, the layered lexicon store and the query cache, and drives one
//! `search` through segmentation and the three candidate strategies.
//!
//! - [`segmenter`] -- raw letters to a boundary-marked reading
//! - [`generator`] -- the direct, combine/associate and fallback strategies
//! - [`engine`] -- the engine handle and its paging/learning surface

pub mod engine;
pub mod generator;
pub mod segmenter;

pub use engine::{EngineError, PinyinEngine};
pub use segmenter::Segmenter;
