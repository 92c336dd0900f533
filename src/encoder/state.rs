use crate::block::Block;
use crate::error::Result;
use crate::matcher::{MatchExtender, SearchWindow, SeenBytes};

/// Per-stream matching state: decoded history plus the set of literal bytes.
///
/// Each call to [`EncoderState::next_block`] picks exactly one block for the
/// front of the lookahead; [`EncoderState::advance`] must then be fed the
/// bytes that block consumed.
pub struct EncoderState {
    window: SearchWindow,
    seen: SeenBytes,
    extender: MatchExtender,
}

impl EncoderState {
    pub fn new() -> Self {
        Self::with_extender(MatchExtender::default())
    }

    pub fn with_extender(extender: MatchExtender) -> Self {
        Self { window: SearchWindow::new(), seen: SeenBytes::new(), extender }
    }

    /// Choose the block encoding the start of `lookahead` (must be non-empty)
    pub fn next_block(&mut self, lookahead: &[u8]) -> Result<Block> {
        debug_assert!(!lookahead.is_empty());
        let first = lookahead[0];

        if self.seen.is_novel(first) {
            self.seen.mark_seen(first);
            return Ok(Block::literal(first));
        }

        match self.extender.longest_match(&self.window, lookahead) {
            Some(m) => Block::reference(m.offset, m.length),
            // Seen before, but every occurrence has left the window
            None => Ok(Block::literal(first)),
        }
    }

    /// Record source bytes covered by the block just emitted
    pub fn advance(&mut self, consumed: &[u8]) {
        self.window.push_bytes(consumed);
    }

    pub fn window(&self) -> &SearchWindow {
        &self.window
    }

    pub fn seen(&self) -> &SeenBytes {
        &self.seen
    }

    pub fn reset(&mut self) {
        self.window.clear();
        self.seen.clear();
    }
}

impl Default for EncoderState {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode an in-memory buffer into blocks
pub fn encode_blocks(data: &[u8]) -> Result<Vec<Block>> {
    let mut state = EncoderState::new();
    let mut blocks = Vec::new();
    let mut pos = 0;

    while pos < data.len() {
        let end = (pos + crate::block::LOOKAHEAD_SIZE).min(data.len());
        let block = state.next_block(&data[pos..end])?;
        let consumed = block.uncompressed_size();
        state.advance(&data[pos..pos + consumed]);
        blocks.push(block);
        pos += consumed;
    }

    Ok(blocks)
}
