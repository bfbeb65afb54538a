use std::borrow::Cow;

use crate::error::Result;
use crate::scan::skip_angle_block;

/// Removes every `<...>` type-argument block from `sig`, preserving array
/// prefixes and member-type separators.
///
/// `QX<QObject;>.Member<QObject;>;` erases to `QX.Member;`. A signature with
/// no generics is returned as [`Cow::Borrowed`] of the input, a documented
/// performance contract callers may rely on.
pub fn get_type_erasure(sig: &str) -> Result<Cow<'_, str>> {
    if !sig.contains('<') {
        return Ok(Cow::Borrowed(sig));
    }
    let bytes = sig.as_bytes();
    let mut erased = String::with_capacity(sig.len());
    let mut i = 0usize;
    let mut copied_to = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'<' {
            erased.push_str(&sig[copied_to..i]);
            i = skip_angle_block(sig, i)?;
            copied_to = i;
        } else {
            i += 1;
        }
    }
    erased.push_str(&sig[copied_to..]);
    Ok(Cow::Owned(erased))
}
