//! Matching of `{ ... }` expression blocks.

use super::ScanState;

/// Returns the index of the `}` closing the `{` at `open_index`.
///
/// Braces inside single-quoted, double-quoted and template-literal strings do
/// not count. A backslash inside any string consumes the following byte.
/// Returns `None` when `open_index` is not a `{` or the text ends while the
/// block is still open.
pub fn matching_close(text: &str, open_index: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open_index) != Some(&b'{') {
        return None;
    }

    let mut depth: usize = 0;
    let mut state = ScanState::Normal;
    let mut i = open_index;

    while i < bytes.len() {
        let byte = bytes[i];
        match state {
            ScanState::Normal => match byte {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                }
                _ => {
                    if let Some(next) = ScanState::opened_by(byte) {
                        state = next;
                    }
                }
            },
            _ => {
                if byte == b'\\' {
                    i += 2;
                    continue;
                }
                if Some(byte) == state.closing_byte() {
                    state = ScanState::Normal;
                }
            }
        }
        i += 1;
    }

    None
}
