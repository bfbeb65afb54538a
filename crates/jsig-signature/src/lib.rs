#![forbid(unsafe_code)]

//! Codec for the compact generic type-signature grammar used by Java-aware
//! tooling: self-delimiting signature strings covering base types, class
//! types with type arguments and member chains, arrays, type variables,
//! wildcards, captures and intersection types.
//!
//! All operations are pure functions over string slices. Rendering into
//! source text lives in the `jsig-render` crate.

mod compose;
mod decompose;
mod erase;
mod error;
mod kind;
mod scan;

pub use crate::compose::{
    create_array_signature, create_intersection_type_signature, create_method_signature,
    create_type_signature,
};
pub use crate::decompose::{
    get_array_count, get_element_type, get_intersection_type_bounds, get_parameter_count,
    get_parameter_types, get_return_type, get_thrown_exception_types, get_type_arguments,
    get_type_parameter_bounds, get_type_parameters, get_type_variable,
};
pub use crate::erase::get_type_erasure;
pub use crate::error::{Result, SignatureError};
pub use crate::kind::{get_type_signature_kind, TypeSignatureKind};
pub use crate::scan::signature_end;
