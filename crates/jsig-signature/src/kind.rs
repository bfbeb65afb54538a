use serde::{Deserialize, Serialize};

use crate::error::{Result, SignatureError};
use crate::scan;

/// Syntactic kind of a type signature, decided by its leading character(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeSignatureKind {
    Base,
    Class,
    Array,
    TypeVariable,
    Wildcard,
    Intersection,
}

/// Classifies `sig` into one of the six signature kinds.
///
/// A capture (`!`) classifies as [`TypeSignatureKind::Wildcard`]. A leading
/// generic prefix (`<...>`, as generic type declarations produce) is skipped
/// and the remainder classified; if nothing follows the prefix the signature
/// is a class type. Fails only on empty input or a byte outside the grammar.
pub fn get_type_signature_kind(sig: &str) -> Result<TypeSignatureKind> {
    let bytes = sig.as_bytes();
    match bytes.first() {
        None => Err(SignatureError::new(sig, 0, "expected a type signature")),
        Some(b'[') => Ok(TypeSignatureKind::Array),
        Some(b'B') | Some(b'C') | Some(b'D') | Some(b'F') | Some(b'I') | Some(b'J')
        | Some(b'S') | Some(b'V') | Some(b'Z')
            if sig.len() == 1 =>
        {
            Ok(TypeSignatureKind::Base)
        }
        Some(b'T') => Ok(TypeSignatureKind::TypeVariable),
        Some(b'*') | Some(b'+') | Some(b'-') | Some(b'!') => Ok(TypeSignatureKind::Wildcard),
        Some(b'|') => Ok(TypeSignatureKind::Intersection),
        Some(b'<') => {
            let end = scan::skip_angle_block(sig, 0)?;
            if end == sig.len() {
                Ok(TypeSignatureKind::Class)
            } else {
                get_type_signature_kind(&sig[end..])
            }
        }
        Some(&b) if b == b'L' || b == b'Q' || b == b'_' || (b as char).is_alphabetic() => {
            Ok(TypeSignatureKind::Class)
        }
        Some(&b) => {
            if b.is_ascii() {
                Err(SignatureError::new(sig, 0, "unexpected character"))
            } else {
                // Multi-byte identifier start: legacy bare class name.
                Ok(TypeSignatureKind::Class)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn classifies_every_kind() {
        assert_eq!(get_type_signature_kind("I").unwrap(), TypeSignatureKind::Base);
        assert_eq!(
            get_type_signature_kind("[QString;").unwrap(),
            TypeSignatureKind::Array
        );
        assert_eq!(
            get_type_signature_kind("Qjava.util.List<QT;>;").unwrap(),
            TypeSignatureKind::Class
        );
        assert_eq!(
            get_type_signature_kind("TT;").unwrap(),
            TypeSignatureKind::TypeVariable
        );
        assert_eq!(get_type_signature_kind("*").unwrap(), TypeSignatureKind::Wildcard);
        assert_eq!(
            get_type_signature_kind("+QNumber;").unwrap(),
            TypeSignatureKind::Wildcard
        );
        assert_eq!(
            get_type_signature_kind("!*").unwrap(),
            TypeSignatureKind::Wildcard
        );
        assert_eq!(
            get_type_signature_kind("|QA;:QB;").unwrap(),
            TypeSignatureKind::Intersection
        );
    }

    #[test]
    fn generic_prefix_classifies_as_class() {
        assert_eq!(
            get_type_signature_kind("<T:Ljava.lang.Object;>Lfoo.Bar;").unwrap(),
            TypeSignatureKind::Class
        );
        assert_eq!(
            get_type_signature_kind("<T:Ljava.lang.Object;>").unwrap(),
            TypeSignatureKind::Class
        );
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(get_type_signature_kind("").is_err());
    }
}
