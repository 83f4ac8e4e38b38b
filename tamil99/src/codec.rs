//! Tamil99 codec: plugs the layout table into the generic practice engine.

use std::sync::Arc;

use libtamil_core::{Config, KeystrokeCodec, KeystrokeToken, PracticeEngine};

use crate::decoder;
use crate::encoder;
use crate::layout::LayoutTable;

/// Keystroke codec for the Tamil99 layout.
///
/// Thin wrapper binding a shared [`LayoutTable`] to the encode/decode
/// walks. Cheap to clone; items created by the engine share the table.
#[derive(Clone)]
pub struct Tamil99Codec {
    layout: Arc<LayoutTable>,
}

impl Tamil99Codec {
    /// Codec over the built-in Tamil99 table.
    pub fn new() -> Self {
        Self {
            layout: LayoutTable::tamil99(),
        }
    }

    /// Codec over a custom table (e.g. loaded from a mapping file).
    pub fn with_table(layout: Arc<LayoutTable>) -> Self {
        Self { layout }
    }

    /// The underlying layout table.
    pub fn layout(&self) -> &LayoutTable {
        &self.layout
    }
}

impl Default for Tamil99Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl KeystrokeCodec for Tamil99Codec {
    fn encode(&self, text: &str) -> Vec<KeystrokeToken> {
        encoder::encode(&self.layout, text)
    }

    fn decode(&self, target: &str, typed: &[String]) -> String {
        decoder::decode(&self.layout, target, typed)
    }
}

/// Practice engine over the built-in Tamil99 layout.
pub fn create_engine_tamil99(config: Config) -> PracticeEngine<Tamil99Codec> {
    PracticeEngine::new(Tamil99Codec::new(), config)
}

/// Practice engine over a custom layout table.
pub fn create_engine_with_table(
    table: Arc<LayoutTable>,
    config: Config,
) -> PracticeEngine<Tamil99Codec> {
    PracticeEngine::new(Tamil99Codec::with_table(table), config)
}
