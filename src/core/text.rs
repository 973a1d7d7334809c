//! Zero-terminated text encoding
//!
//! Wire form: raw UTF-8 bytes diikuti tepat satu byte `0`. Zero byte di
//! tengah text mengakhiri value lebih awal saat decode.

use super::buffer::{ByteBuffer, ByteReader};
use super::error::{CodecError, CodecResult};

/// Encoded length `text`: bytes + terminator
#[inline(always)]
pub fn encoded_len(text: &str) -> usize {
    text.len() + 1
}

pub fn write(text: &str, out: &mut ByteBuffer) {
    out.put_bytes(text.as_bytes());
    out.put_u8(0);
}

/// Baca satu text value di posisi cursor.
///
/// Bytes yang bukan UTF-8 valid diganti U+FFFD; consumed length tetap
/// mengikuti raw bytes.
pub fn read(reader: &mut ByteReader<'_>) -> CodecResult<String> {
    let start = reader.position();
    if start > reader.len() {
        return Err(CodecError::TruncatedBuffer {
            offset: start,
            needed: 1,
            remaining: 0,
        });
    }

    let rest = reader.rest();
    let Some(end) = rest.iter().position(|&b| b == 0) else {
        return Err(CodecError::MissingTerminator { offset: start });
    };

    let text = String::from_utf8_lossy(&rest[..end]).into_owned();
    reader.advance(end + 1);
    Ok(text)
}

/// Parse text di `offset`, returns text + bytes consumed
pub fn parse(bytes: &[u8], offset: usize) -> CodecResult<(String, usize)> {
    let mut reader = ByteReader::new(bytes, offset);
    let text = read(&mut reader)?;
    Ok((text, reader.position() - offset))
}
