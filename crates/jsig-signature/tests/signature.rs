use std::borrow::Cow;

use jsig_signature::{
    create_array_signature, create_method_signature, create_type_signature, get_array_count,
    get_element_type, get_parameter_count, get_parameter_types, get_return_type,
    get_thrown_exception_types, get_type_arguments, get_type_erasure, get_type_signature_kind,
    TypeSignatureKind,
};
use pretty_assertions::assert_eq;

#[test]
fn array_idempotence_for_all_ranks() {
    for n in 0..5 {
        let sig = create_array_signature("Qjava.lang.String;", n);
        assert_eq!(get_array_count(&sig).unwrap(), n);
        assert_eq!(get_element_type(&sig).unwrap(), "Qjava.lang.String;");
    }
}

#[test]
fn parameter_and_return_symmetry() {
    let params = ["I", "QString;", "[[QMap<QK;QV;>;"];
    let sig = create_method_signature(&params, "QList<QT;>;");
    assert_eq!(sig, "(IQString;[[QMap<QK;QV;>;)QList<QT;>;");
    assert_eq!(get_parameter_types(&sig).unwrap(), params.to_vec());
    assert_eq!(get_parameter_count(&sig).unwrap(), params.len());
    assert_eq!(get_return_type(&sig).unwrap(), "QList<QT;>;");
}

#[test]
fn nested_arguments_split_at_the_top_level_only() {
    let args = get_type_arguments("QX<QList<QT;>;QMap<QU;QABC<QT;>;>;>;").unwrap();
    assert_eq!(args, vec!["QList<QT;>;", "QMap<QU;QABC<QT;>;>;"]);
}

#[test]
fn primitive_keywords_never_match_identifier_prefixes() {
    let sig = create_type_signature("interation.test.MyData", true).unwrap();
    assert_eq!(sig, "Linteration.test.MyData;");
    assert!(!sig.starts_with('I'));
}

#[test]
fn thrown_exceptions_preserve_declaration_order() {
    let sig =
        "()Ljava.lang.Object;^Ljava.lang.InstantiationException;^Ljava.lang.IllegalAccessException;";
    assert_eq!(
        get_thrown_exception_types(sig).unwrap(),
        vec![
            "Ljava.lang.InstantiationException;",
            "Ljava.lang.IllegalAccessException;"
        ]
    );
    assert_eq!(get_thrown_exception_types("()V").unwrap(), Vec::<&str>::new());
}

#[test]
fn erasure_end_to_end() {
    assert_eq!(
        get_type_erasure("QX<QObject;>.Member<QList<QT;>;QMap<QU;QABC<QT;>;>;>;").unwrap(),
        "QX.Member;"
    );
}

#[test]
fn erasure_is_identity_without_generics() {
    let sig = "[[QX.Member;";
    match get_type_erasure(sig).unwrap() {
        Cow::Borrowed(erased) => assert_eq!(erased.as_ptr(), sig.as_ptr()),
        Cow::Owned(_) => panic!("erasure of a generics-free signature must borrow"),
    }
}

#[test]
fn nested_double_bounded_wildcard_counts_as_one_parameter() {
    assert_eq!(
        get_parameter_count("foo(LA<++Ljava.lang.Comparable;>;)").unwrap(),
        1
    );
}

#[test]
fn every_grammar_production_classifies() {
    let cases = [
        ("I", TypeSignatureKind::Base),
        ("[QString;", TypeSignatureKind::Array),
        ("Qjava.util.List<+QNumber;>;", TypeSignatureKind::Class),
        ("<T:LObject;>Lfoo.Bar;", TypeSignatureKind::Class),
        ("TT;", TypeSignatureKind::TypeVariable),
        ("*", TypeSignatureKind::Wildcard),
        ("-QNumber;", TypeSignatureKind::Wildcard),
        ("!+QNumber;", TypeSignatureKind::Wildcard),
        ("|QA;:QB;", TypeSignatureKind::Intersection),
    ];
    for (sig, expected) in cases {
        assert_eq!(get_type_signature_kind(sig).unwrap(), expected, "kind of `{sig}`");
    }
}

#[test]
fn encode_decompose_round_trip() {
    let sig = create_type_signature("java.util.Map<java.lang.String, int[]>", false).unwrap();
    assert_eq!(sig, "Qjava.util.Map<Qjava.lang.String;[I>;");
    assert_eq!(
        get_type_arguments(&sig).unwrap(),
        vec!["Qjava.lang.String;", "[I"]
    );
    assert_eq!(get_type_erasure(&sig).unwrap(), "Qjava.util.Map;");
}
