//! # libtamil99
//!
//! Tamil99 keystroke engine built on libtamil-core: the standard Tamil99
//! keyboard layout as a bidirectional table, the text -> keystroke encoder
//! driving key and finger hints, and the keystroke -> text decoder behind
//! interactive typing practice.

pub mod layout;
pub mod mapping;
pub mod mim;
pub mod fallback;
pub mod encoder;
pub mod decoder;
pub mod codec;
pub mod fingers;

// Re-export the core machinery so hosts depend on one crate
pub use libtamil_core::{
    canonical_label, Config, ItemState, KeystrokeCodec, KeystrokeToken, KeystrokeTracker,
    PracticeEngine, TaskResult, TypingItem, TypingSession, SPACE_LABEL,
};

pub use codec::{create_engine_tamil99, create_engine_with_table, Tamil99Codec};
pub use layout::{Keycap, LayoutTable};
pub use mapping::tamil99_table;
