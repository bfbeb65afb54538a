//! Rendering that tracks which fully qualified names the produced source
//! text needs as imports.

use std::collections::BTreeMap;

use jsig_signature::Result;

use crate::names;
use crate::render::{render_signature, NameStyle};

/// Mutable collaborator deciding how a fully qualified name is written out.
///
/// Implementations return the shortest unambiguous reference for `qualified`
/// and record any import the reference relies on. One validator per rendering
/// unit (typically per generated file); instances are not meant to be shared
/// across concurrent renders.
pub trait ImportValidator {
    fn use_type(&mut self, qualified: &str) -> String;
}

/// Default [`ImportValidator`]: the first type to claim a simple name wins;
/// a later type with the same simple name but a different qualifier falls
/// back to its fully qualified form.
#[derive(Debug, Default)]
pub struct ImportTracker {
    by_simple_name: BTreeMap<String, String>,
}

impl ImportTracker {
    pub fn new() -> Self {
        ImportTracker::default()
    }

    /// Fully qualified names the rendered output requires as imports, sorted.
    /// Unqualified names never need an import and are not reported.
    pub fn imports(&self) -> Vec<&str> {
        let mut imports: Vec<&str> = self
            .by_simple_name
            .values()
            .map(String::as_str)
            .filter(|name| name.contains('.'))
            .collect();
        imports.sort_unstable();
        imports
    }
}

impl ImportValidator for ImportTracker {
    fn use_type(&mut self, qualified: &str) -> String {
        let simple = names::get_simple_name(qualified);
        match self.by_simple_name.get(simple) {
            Some(existing) if existing == qualified => simple.to_string(),
            Some(existing) => {
                tracing::debug!(
                    simple,
                    existing = %existing,
                    requested = %qualified,
                    "simple-name collision, falling back to fully qualified reference"
                );
                qualified.to_string()
            }
            None => {
                self.by_simple_name
                    .insert(simple.to_string(), qualified.to_string());
                simple.to_string()
            }
        }
    }
}

/// Renders `sig` like [`crate::render_type_signature`], but routes every
/// class name through `validator` so the caller learns which imports the
/// rendered text requires. This is the only operation in the crate with
/// observable side effects.
pub fn render_with_imports(sig: &str, validator: &mut dyn ImportValidator) -> Result<String> {
    render_signature(sig, &mut NameStyle::Validated(validator))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_writer_wins_on_simple_names() {
        let mut tracker = ImportTracker::new();
        assert_eq!(tracker.use_type("java.util.List"), "List");
        assert_eq!(tracker.use_type("java.util.List"), "List");
        assert_eq!(tracker.use_type("java.awt.List"), "java.awt.List");
        assert_eq!(tracker.imports(), vec!["java.util.List"]);
    }

    #[test]
    fn unqualified_names_need_no_import() {
        let mut tracker = ImportTracker::new();
        assert_eq!(tracker.use_type("Foo"), "Foo");
        assert!(tracker.imports().is_empty());
        // The bare reference still claims the simple name.
        assert_eq!(tracker.use_type("a.Foo"), "a.Foo");
    }

    #[test]
    fn rendering_registers_nested_argument_types() {
        let mut tracker = ImportTracker::new();
        let text =
            render_with_imports("Qjava.util.Map<Qjava.lang.String;[Qcom.example.Value;>;", &mut tracker)
                .unwrap();
        assert_eq!(text, "Map<String,Value[]>");
        assert_eq!(
            tracker.imports(),
            vec!["com.example.Value", "java.lang.String", "java.util.Map"]
        );
    }
}
