//! Splits composite signatures (method signatures, type-argument lists,
//! formal-type-parameter lists, intersection bounds) into their component
//! signature slices.
//!
//! Every operation here carves components out of the input by repeatedly
//! calling [`signature_end`]; none of them re-implements the nesting rules.

use crate::error::{Result, SignatureError};
use crate::scan::{signature_end, skip_angle_block};

/// Number of array dimensions at the front of `sig` (0 for non-arrays).
pub fn get_array_count(sig: &str) -> Result<usize> {
    if sig.is_empty() {
        return Err(SignatureError::new(sig, 0, "expected a type signature"));
    }
    Ok(sig.bytes().take_while(|&b| b == b'[').count())
}

/// The element type of an array signature; a non-array signature is returned
/// unchanged.
pub fn get_element_type(sig: &str) -> Result<&str> {
    let rank = get_array_count(sig)?;
    if rank == sig.len() {
        return Err(SignatureError::new(sig, rank, "missing array element type"));
    }
    Ok(&sig[rank..])
}

/// Ordered parameter type signatures of a method signature.
pub fn get_parameter_types(sig: &str) -> Result<Vec<&str>> {
    let mut params = Vec::new();
    scan_parameters(sig, |param| params.push(param))?;
    Ok(params)
}

/// Number of parameters of a method signature, without collecting them.
pub fn get_parameter_count(sig: &str) -> Result<usize> {
    let mut count = 0usize;
    scan_parameters(sig, |_| count += 1)?;
    Ok(count)
}

/// The return type signature of a method signature.
pub fn get_return_type(sig: &str) -> Result<&str> {
    let start = scan_parameters(sig, |_| {})?;
    let end = signature_end(sig, start)?;
    Ok(&sig[start..end])
}

/// Thrown exception signatures of a method signature, in declaration order.
///
/// Each exception must be prefixed with `^`; a method throwing nothing
/// yields an empty list.
pub fn get_thrown_exception_types(sig: &str) -> Result<Vec<&str>> {
    let after_params = scan_parameters(sig, |_| {})?;
    let mut i = signature_end(sig, after_params)?;
    let bytes = sig.as_bytes();
    let mut exceptions = Vec::new();
    while i < bytes.len() {
        if bytes[i] != b'^' {
            return Err(SignatureError::new(
                sig,
                i,
                "expected `^` before thrown exception",
            ));
        }
        let end = signature_end(sig, i + 1)?;
        exceptions.push(&sig[i + 1..end]);
        i = end;
    }
    Ok(exceptions)
}

/// Formal type parameter strings (`Name:bound:bound`) of a signature that
/// starts with a `<...>` type-parameter section.
pub fn get_type_parameters(sig: &str) -> Result<Vec<&str>> {
    let bytes = sig.as_bytes();
    if bytes.first() != Some(&b'<') {
        return Err(SignatureError::new(
            sig,
            0,
            "expected `<` before formal type parameters",
        ));
    }
    let mut params = Vec::new();
    let mut i = 1usize;
    loop {
        match bytes.get(i) {
            None => {
                return Err(SignatureError::new(
                    sig,
                    i,
                    "unterminated formal type parameter list",
                ))
            }
            Some(b'>') => return Ok(params),
            Some(_) => {
                let start = i;
                i = formal_parameter_end(sig, start)?;
                params.push(&sig[start..i]);
            }
        }
    }
}

/// End offset of one `Name:bound:bound` formal parameter starting at `start`.
fn formal_parameter_end(sig: &str, start: usize) -> Result<usize> {
    let bytes = sig.as_bytes();
    let mut i = start;
    while i < bytes.len() && bytes[i] != b':' {
        if matches!(bytes[i], b'<' | b'>' | b';') {
            return Err(SignatureError::new(
                sig,
                i,
                "expected `:` after type parameter name",
            ));
        }
        i += 1;
    }
    if i == start {
        return Err(SignatureError::new(sig, i, "missing type parameter name"));
    }
    if i == bytes.len() {
        return Err(SignatureError::new(
            sig,
            i,
            "expected `:` after type parameter name",
        ));
    }
    while bytes.get(i) == Some(&b':') {
        i += 1;
        match bytes.get(i) {
            // Empty class-bound position: implicit Object bound.
            Some(b':') | Some(b'>') => continue,
            None => break,
            Some(_) => i = signature_end(sig, i)?,
        }
    }
    Ok(i)
}

/// The name of a formal type parameter (everything before the first `:`).
pub fn get_type_variable(formal: &str) -> Result<&str> {
    let colon = formal.find(':').ok_or_else(|| {
        SignatureError::new(formal, formal.len(), "expected `:` in formal type parameter")
    })?;
    if colon == 0 {
        return Err(SignatureError::new(formal, 0, "missing type parameter name"));
    }
    Ok(&formal[..colon])
}

/// Ordered bound signatures of a formal type parameter. An empty class-bound
/// position (`::`) denotes the implicit Object bound and is omitted.
pub fn get_type_parameter_bounds(formal: &str) -> Result<Vec<&str>> {
    let bytes = formal.as_bytes();
    let mut i = get_type_variable(formal)?.len();
    let mut bounds = Vec::new();
    while bytes.get(i) == Some(&b':') {
        i += 1;
        match bytes.get(i) {
            Some(b':') | None => continue,
            Some(_) => {
                let end = signature_end(formal, i)?;
                bounds.push(&formal[i..end]);
                i = end;
            }
        }
    }
    if i != formal.len() {
        return Err(SignatureError::new(
            formal,
            i,
            "unexpected characters after type parameter bounds",
        ));
    }
    Ok(bounds)
}

/// Type arguments of the rightmost member segment of a class type signature.
///
/// In `QX<QObject;>.Member<QT;>;` the arguments are those of `Member`; a raw
/// rightmost segment yields an empty list even when an enclosing segment is
/// parameterized.
pub fn get_type_arguments(sig: &str) -> Result<Vec<&str>> {
    let bytes = sig.as_bytes();
    let mut i = 0usize;
    while bytes.get(i) == Some(&b'[') {
        i += 1;
    }
    // Interior of the last `<...>` block belonging to the current segment.
    let mut last_block: Option<(usize, usize)> = None;
    while i < bytes.len() {
        match bytes[i] {
            b';' => break,
            b'<' => {
                let end = skip_angle_block(sig, i)?;
                last_block = Some((i + 1, end - 1));
                i = end;
            }
            // A new member segment starts; arguments seen so far belong to
            // an enclosing type.
            b'.' | b'$' => {
                last_block = None;
                i += 1;
            }
            _ => i += 1,
        }
    }
    let Some((mut i, end)) = last_block else {
        return Ok(Vec::new());
    };
    let mut args = Vec::new();
    while i < end {
        let arg_end = signature_end(sig, i)?;
        args.push(&sig[i..arg_end]);
        i = arg_end;
    }
    Ok(args)
}

/// Bound signatures of an intersection type signature (`|A:B` → `[A, B]`).
pub fn get_intersection_type_bounds(sig: &str) -> Result<Vec<&str>> {
    if !sig.starts_with('|') {
        return Err(SignatureError::new(
            sig,
            0,
            "expected `|` before intersection bounds",
        ));
    }
    let bytes = sig.as_bytes();
    let mut bounds = Vec::new();
    let mut i = 1usize;
    loop {
        let end = signature_end(sig, i)?;
        bounds.push(&sig[i..end]);
        match bytes.get(end) {
            Some(b':') => i = end + 1,
            None => return Ok(bounds),
            Some(_) => {
                return Err(SignatureError::new(
                    sig,
                    end,
                    "unexpected characters after intersection bounds",
                ))
            }
        }
    }
}

/// Scans the parameter list of a method signature, invoking `visit` for each
/// parameter, and returns the offset just past the closing `)`.
///
/// Tolerates a leading method name and a generic-method `<...>` section
/// before the parameter list; an embedded `<...>` inside a parameter never
/// terminates the scan early because parameters are carved out whole.
fn scan_parameters<'s>(sig: &'s str, mut visit: impl FnMut(&'s str)) -> Result<usize> {
    let bytes = sig.as_bytes();
    let mut i = 0usize;
    loop {
        match bytes.get(i) {
            None => {
                return Err(SignatureError::new(
                    sig,
                    i,
                    "expected `(` in method signature",
                ))
            }
            Some(b'(') => {
                i += 1;
                break;
            }
            Some(b'<') => i = skip_angle_block(sig, i)?,
            Some(_) => i += 1,
        }
    }
    loop {
        match bytes.get(i) {
            None => {
                return Err(SignatureError::new(sig, i, "unterminated parameter list"));
            }
            Some(b')') => return Ok(i + 1),
            Some(_) => {
                let end = signature_end(sig, i)?;
                visit(&sig[i..end]);
                i = end;
            }
        }
    }
}
