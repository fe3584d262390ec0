//! Cheap first/last byte checks run before the streaming parse

use std::io::{self, Read, Seek, SeekFrom};

/// Size of the window read when scanning the tail of a file backward.
const TAIL_CHUNK: u64 = 4096;

pub(crate) const OPENING_BRACKET: u8 = b'[';
pub(crate) const CLOSING_BRACKET: u8 = b']';

/// Bytes tolerated after the closing bracket.
pub(crate) fn is_trailing_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Read the first byte of the stream, or `None` when it is empty.
pub(crate) fn first_byte<R: Read>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

/// Find the last byte that is not trailing whitespace.
///
/// The stream is walked backward from its end in chunks of at most
/// `TAIL_CHUNK` bytes. The scan never seeks before offset 0: a stream that is
/// empty or holds only whitespace yields `None`.
pub(crate) fn last_significant_byte<R: Read + Seek>(reader: &mut R) -> io::Result<Option<u8>> {
    let len = reader.seek(SeekFrom::End(0))?;
    let mut end = len;
    let mut buf = vec![0u8; TAIL_CHUNK as usize];

    while end > 0 {
        let start = end.saturating_sub(TAIL_CHUNK);
        let window = &mut buf[..(end - start) as usize];
        reader.seek(SeekFrom::Start(start))?;
        reader.read_exact(window)?;

        if let Some(&byte) = window.iter().rev().find(|b| !is_trailing_whitespace(**b)) {
            return Ok(Some(byte));
        }
        end = start;
    }

    Ok(None)
}
