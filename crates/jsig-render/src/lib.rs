#![forbid(unsafe_code)]

//! Human-readable rendering of compact type signatures, plus the
//! qualified-name utilities and import tracking a source-generation caller
//! needs. The signature grammar itself lives in `jsig-signature`.

mod imports;
mod names;
mod render;

pub use crate::imports::{render_with_imports, ImportTracker, ImportValidator};
pub use crate::names::{get_qualifier, get_simple_name, get_simple_names, to_qualified_name};
pub use crate::render::{
    get_signature_qualifier, get_signature_simple_name, render_method_signature,
    render_type_signature,
};

pub use jsig_signature::{Result, SignatureError};
