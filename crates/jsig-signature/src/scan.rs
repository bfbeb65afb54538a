use crate::error::{Result, SignatureError};

/// Returns the offset one past the last byte of the type signature starting
/// at `start`.
///
/// Every signature is self-delimiting, so the end can always be computed
/// without looking past the token itself. This function owns the nesting
/// semantics of the grammar; all decomposition operations carve components
/// out of composite signatures by calling it repeatedly.
pub fn signature_end(sig: &str, start: usize) -> Result<usize> {
    let bytes = sig.as_bytes();
    match bytes.get(start) {
        None => Err(SignatureError::new(sig, start, "expected a type signature")),
        // Array: the end of the array signature is the end of its element.
        Some(b'[') => signature_end(sig, start + 1),
        // Bounded wildcard: marker plus the bound that follows.
        Some(b'+') | Some(b'-') => signature_end(sig, start + 1),
        Some(b'*') => Ok(start + 1),
        Some(b'!') => match bytes.get(start + 1) {
            Some(b'*') | Some(b'+') | Some(b'-') => signature_end(sig, start + 1),
            _ => Err(SignatureError::new(
                sig,
                start + 1,
                "expected a wildcard after capture marker",
            )),
        },
        Some(b'B') | Some(b'C') | Some(b'D') | Some(b'F') | Some(b'I') | Some(b'J')
        | Some(b'S') | Some(b'V') | Some(b'Z') => Ok(start + 1),
        Some(b'T') => match sig[start..].find(';') {
            Some(semi) => Ok(start + semi + 1),
            None => Err(SignatureError::new(
                sig,
                start,
                "unterminated type variable",
            )),
        },
        Some(b'|') => {
            let mut end = signature_end(sig, start + 1)?;
            while bytes.get(end) == Some(&b':') {
                end = signature_end(sig, end + 1)?;
            }
            Ok(end)
        }
        // Class types, including legacy bare-identifier starts. Anything
        // that cannot start an identifier is a syntax error, not a class.
        Some(&b) if b == b'_' || b.is_ascii_alphabetic() || !b.is_ascii() => class_end(sig, start),
        Some(_) => Err(SignatureError::new(sig, start, "unexpected character")),
    }
}

/// End offset of a class type signature: qualified name, any number of
/// depth-tracked `<...>` blocks and `.`/`$` member segments, closing `;`.
///
/// A missing marker (`L`/`Q`) is tolerated for legacy bare-identifier
/// signatures.
fn class_end(sig: &str, start: usize) -> Result<usize> {
    let bytes = sig.as_bytes();
    let mut i = start;
    if matches!(bytes[i], b'L' | b'Q') {
        i += 1;
    }
    while i < bytes.len() {
        match bytes[i] {
            b';' => return Ok(i + 1),
            b'<' => i = skip_angle_block(sig, i)?,
            b'>' => return Err(SignatureError::new(sig, i, "unbalanced `>`")),
            _ => i += 1,
        }
    }
    Err(SignatureError::new(sig, start, "unterminated class type"))
}

/// Skips a balanced `<...>` block starting at `start` (which must point at
/// `<`), returning the offset just past the matching `>`.
pub(crate) fn skip_angle_block(sig: &str, start: usize) -> Result<usize> {
    let bytes = sig.as_bytes();
    debug_assert_eq!(bytes.get(start), Some(&b'<'));
    let mut depth = 0usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(i + 1);
                }
            }
            _ => {}
        }
        i += 1;
    }
    Err(SignatureError::new(sig, start, "unbalanced `<`"))
}
