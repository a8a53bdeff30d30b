//! RIFF chunk walking shared by the inspection helpers.

/// One chunk inside a RIFF/WAVE file.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Chunk<'a> {
    pub id: [u8; 4],
    /// Size declared in the chunk header.
    pub declared_size: u32,
    /// Chunk body, truncated to the bytes actually present.
    pub body: &'a [u8],
}

impl Chunk<'_> {
    /// Whether the declared size runs past the end of the file.
    pub fn is_truncated(&self) -> bool {
        (self.body.len() as u64) < self.declared_size as u64
    }
}

/// Returns true if `wav_data` starts with a RIFF/WAVE preamble.
pub(crate) fn is_riff_wave(wav_data: &[u8]) -> bool {
    wav_data.len() >= 12 && &wav_data[0..4] == b"RIFF" && &wav_data[8..12] == b"WAVE"
}

/// Iterates over the chunks after the 12-byte RIFF/WAVE preamble.
///
/// Chunks are word-aligned: an odd-sized chunk is followed by one pad byte.
pub(crate) fn chunks(wav_data: &[u8]) -> ChunkIter<'_> {
    ChunkIter {
        data: wav_data,
        pos: 12,
    }
}

pub(crate) struct ChunkIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for ChunkIter<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let header_end = self.pos.checked_add(8)?;
        if header_end > self.data.len() {
            return None;
        }

        let header = &self.data[self.pos..header_end];
        let id = [header[0], header[1], header[2], header[3]];
        let declared_size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]);

        let body_end = header_end
            .saturating_add(declared_size as usize)
            .min(self.data.len());
        let body = &self.data[header_end..body_end];

        let padded = declared_size as usize + (declared_size as usize & 1);
        self.pos = header_end.saturating_add(padded);

        Some(Chunk {
            id,
            declared_size,
            body,
        })
    }
}
