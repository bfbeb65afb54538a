//! Renders signatures into Java-source-like text.

use jsig_signature::{signature_end, Result, SignatureError};

use crate::imports::ImportValidator;
use crate::names;

/// How class names are written out.
pub(crate) enum NameStyle<'a> {
    /// Names exactly as they appear in the signature.
    Qualified,
    /// Qualifier segments dropped; only the innermost parameterized chain
    /// survives.
    Simple,
    /// Every class name goes through an [`ImportValidator`], which decides
    /// between the simple and the fully qualified form.
    Validated(&'a mut dyn ImportValidator),
}

/// Renders a type signature into source text with names as qualified as the
/// signature spells them: primitives become keywords, wildcards become `?`
/// forms, captures render as `capture-of`, arrays append `[]` per rank after
/// any generic suffix.
pub fn render_type_signature(sig: &str) -> Result<String> {
    render_signature(sig, &mut NameStyle::Qualified)
}

/// Renders a method signature.
///
/// `name` is the method name to print, if any; `parameter_names` (parallel
/// to the parameter types) are printed after each type when provided;
/// `fully_qualified` selects qualified vs simple type names and
/// `include_return_type` whether the rendered return type leads the text.
pub fn render_method_signature(
    sig: &str,
    name: Option<&str>,
    parameter_names: Option<&[&str]>,
    fully_qualified: bool,
    include_return_type: bool,
) -> Result<String> {
    let mut style = if fully_qualified {
        NameStyle::Qualified
    } else {
        NameStyle::Simple
    };
    let mut out = String::new();
    if include_return_type {
        let ret = jsig_signature::get_return_type(sig)?;
        out.push_str(&render_signature(ret, &mut style)?);
        out.push(' ');
    }
    if let Some(name) = name {
        out.push_str(name);
    }
    out.push('(');
    for (i, param) in jsig_signature::get_parameter_types(sig)?.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&render_signature(param, &mut style)?);
        if let Some(param_name) = parameter_names.and_then(|names| names.get(i)) {
            out.push(' ');
            out.push_str(param_name);
        }
    }
    out.push(')');
    Ok(out)
}

/// The simple-name rendering of a signature: `+QCharSequence;` becomes
/// `? extends CharSequence`, `Qjava.util.List<QString;>;` becomes
/// `List<String>`.
pub fn get_signature_simple_name(sig: &str) -> Result<String> {
    render_signature(sig, &mut NameStyle::Simple)
}

/// The package qualifier of a signature's erased leading type:
/// `Qjava.util.List<QString;>;` yields `java.util`. An intersection yields
/// the qualifier of its first bound. Signatures without a qualified class
/// name (base types, type variables, unbounded wildcards) yield an empty
/// string.
pub fn get_signature_qualifier(sig: &str) -> Result<String> {
    let erased = jsig_signature::get_type_erasure(sig)?;
    let stripped = erased.trim_start_matches(['[', '!', '+', '-']);
    let body = match stripped.as_bytes().first() {
        None | Some(b'T') | Some(b'*') => return Ok(String::new()),
        Some(b'|') => {
            let bounds = jsig_signature::get_intersection_type_bounds(stripped)?;
            return match bounds.first() {
                Some(bound) => get_signature_qualifier(bound),
                None => Ok(String::new()),
            };
        }
        Some(b'L') | Some(b'Q') => &stripped[1..],
        Some(_) => stripped,
    };
    match body.strip_suffix(';') {
        Some(chain) => {
            let dotted = chain.replace(['/', '$'], ".");
            Ok(names::get_qualifier(&dotted).to_string())
        }
        None => Ok(String::new()),
    }
}

pub(crate) fn render_signature(sig: &str, style: &mut NameStyle<'_>) -> Result<String> {
    let (text, end) = render_token(sig, 0, style)?;
    if end != sig.len() {
        return Err(SignatureError::new(
            sig,
            end,
            "unexpected characters after signature",
        ));
    }
    Ok(text)
}

fn render_token(sig: &str, start: usize, style: &mut NameStyle<'_>) -> Result<(String, usize)> {
    let bytes = sig.as_bytes();
    match bytes.get(start) {
        None => Err(SignatureError::new(sig, start, "expected a type signature")),
        Some(b'[') => {
            let mut rank = 0usize;
            let mut i = start;
            while bytes.get(i) == Some(&b'[') {
                rank += 1;
                i += 1;
            }
            let (mut text, end) = render_token(sig, i, style)?;
            for _ in 0..rank {
                text.push_str("[]");
            }
            Ok((text, end))
        }
        Some(b'*') => Ok(("?".to_string(), start + 1)),
        Some(b'+') => {
            let (bound, end) = render_token(sig, start + 1, style)?;
            Ok((format!("? extends {bound}"), end))
        }
        Some(b'-') => {
            let (bound, end) = render_token(sig, start + 1, style)?;
            Ok((format!("? super {bound}"), end))
        }
        Some(b'!') => match bytes.get(start + 1) {
            Some(b'*') | Some(b'+') | Some(b'-') => {
                let (wildcard, end) = render_token(sig, start + 1, style)?;
                Ok((format!("capture-of {wildcard}"), end))
            }
            _ => Err(SignatureError::new(
                sig,
                start + 1,
                "expected a wildcard after capture marker",
            )),
        },
        Some(b'|') => {
            let mut parts = Vec::new();
            let mut i = start + 1;
            loop {
                let (bound, end) = render_token(sig, i, style)?;
                parts.push(bound);
                if bytes.get(end) == Some(&b':') {
                    i = end + 1;
                } else {
                    return Ok((parts.join(" & "), end));
                }
            }
        }
        Some(b'B') => Ok(("byte".to_string(), start + 1)),
        Some(b'C') => Ok(("char".to_string(), start + 1)),
        Some(b'D') => Ok(("double".to_string(), start + 1)),
        Some(b'F') => Ok(("float".to_string(), start + 1)),
        Some(b'I') => Ok(("int".to_string(), start + 1)),
        Some(b'J') => Ok(("long".to_string(), start + 1)),
        Some(b'S') => Ok(("short".to_string(), start + 1)),
        Some(b'V') => Ok(("void".to_string(), start + 1)),
        Some(b'Z') => Ok(("boolean".to_string(), start + 1)),
        Some(b'T') => {
            let end = signature_end(sig, start)?;
            Ok((sig[start + 1..end - 1].to_string(), end))
        }
        Some(_) => render_class(sig, start, style),
    }
}

fn render_class(sig: &str, start: usize, style: &mut NameStyle<'_>) -> Result<(String, usize)> {
    let (segments, end) = parse_class_segments(sig, start)?;

    // Anonymous class: trailing all-digit segment renders as an instantiation
    // of its enclosing type.
    if segments.len() >= 2 {
        let last = &segments[segments.len() - 1];
        if last.args.is_empty() && last.name.bytes().all(|b| b.is_ascii_digit()) {
            let enclosing = segments[segments.len() - 2].name;
            return Ok((format!("new {enclosing}(){{}}"), end));
        }
    }

    // Import-validated rendering resolves the whole erased chain as one name
    // and keeps only the rightmost segment's arguments.
    let reference = match &mut *style {
        NameStyle::Validated(validator) => {
            let chain: Vec<&str> = segments.iter().map(|seg| seg.name).collect();
            Some(validator.use_type(&names::to_qualified_name(&chain)))
        }
        _ => None,
    };
    if let Some(mut text) = reference {
        let last = &segments[segments.len() - 1];
        push_arguments(&mut text, &last.args, style)?;
        return Ok((text, end));
    }

    let first = match style {
        NameStyle::Simple => segments
            .iter()
            .position(|seg| !seg.args.is_empty())
            .unwrap_or(segments.len() - 1),
        _ => 0,
    };
    let mut text = String::new();
    for (i, seg) in segments.iter().enumerate().skip(first) {
        if i > first {
            text.push('.');
        }
        text.push_str(seg.name);
        push_arguments(&mut text, &seg.args, style)?;
    }
    Ok((text, end))
}

fn push_arguments(text: &mut String, args: &[&str], style: &mut NameStyle<'_>) -> Result<()> {
    if args.is_empty() {
        return Ok(());
    }
    text.push('<');
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            text.push(',');
        }
        text.push_str(&render_signature(arg, style)?);
    }
    text.push('>');
    Ok(())
}

struct RawSegment<'s> {
    name: &'s str,
    args: Vec<&'s str>,
}

/// Splits the class type at `start` into `Name[<args>]` segments, treating
/// `.`, `$` and legacy `/` as separators, and returns the offset past the
/// closing `;`.
fn parse_class_segments(sig: &str, start: usize) -> Result<(Vec<RawSegment<'_>>, usize)> {
    let bytes = sig.as_bytes();
    let mut i = start;
    if matches!(bytes.get(i), Some(b'L' | b'Q')) {
        i += 1;
    }
    let mut segments: Vec<RawSegment<'_>> = Vec::new();
    let mut name_start = i;
    // A segment whose arguments are parsed but whose separator has not been
    // seen yet.
    let mut pending: Option<RawSegment<'_>> = None;
    loop {
        match bytes.get(i).copied() {
            None => return Err(SignatureError::new(sig, i, "unterminated class type")),
            Some(b';') => {
                segments.push(pending.take().unwrap_or(RawSegment {
                    name: &sig[name_start..i],
                    args: Vec::new(),
                }));
                i += 1;
                break;
            }
            Some(b'.') | Some(b'$') | Some(b'/') => {
                segments.push(pending.take().unwrap_or(RawSegment {
                    name: &sig[name_start..i],
                    args: Vec::new(),
                }));
                i += 1;
                name_start = i;
            }
            Some(b'<') => {
                if pending.is_some() {
                    return Err(SignatureError::new(
                        sig,
                        i,
                        "expected `.` or `;` after type arguments",
                    ));
                }
                let name = &sig[name_start..i];
                i += 1;
                let mut args = Vec::new();
                while bytes.get(i) != Some(&b'>') {
                    if i >= bytes.len() {
                        return Err(SignatureError::new(sig, i, "unbalanced `<`"));
                    }
                    let arg_end = signature_end(sig, i)?;
                    args.push(&sig[i..arg_end]);
                    i = arg_end;
                }
                i += 1;
                pending = Some(RawSegment { name, args });
            }
            Some(_) => i += 1,
        }
    }
    if segments.iter().any(|seg| seg.name.is_empty()) {
        return Err(SignatureError::new(sig, start, "missing class name"));
    }
    Ok((segments, i))
}
