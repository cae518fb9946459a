//! Tests for [`crate::node::TypeRef`].

use crate::NodeKind;
use crate::node::TypeRef;

/// `[Foo!]!` — the wrapper chain used by several assertions below.
fn non_null_list_of_non_null_foo() -> TypeRef {
    TypeRef::non_null(TypeRef::list(TypeRef::non_null(TypeRef::named("Foo"))))
}

#[test]
fn innermost_named_unwraps_every_layer() {
    let type_ref = non_null_list_of_non_null_foo();

    assert_eq!(type_ref.innermost_named(), &TypeRef::named("Foo"));
    assert_eq!(
        TypeRef::named("Foo").innermost_named(),
        &TypeRef::named("Foo"),
    );
}

#[test]
fn type_name_unwraps_every_layer() {
    assert_eq!(TypeRef::named("Foo").type_name(), "Foo");
    assert_eq!(non_null_list_of_non_null_foo().type_name(), "Foo");
    assert_eq!(
        TypeRef::list(TypeRef::list(TypeRef::named("Int"))).type_name(),
        "Int",
    );
}

#[test]
fn set_type_name_preserves_wrapper_layers() {
    let mut type_ref = non_null_list_of_non_null_foo();
    type_ref.set_type_name("Bar");

    assert_eq!(type_ref.type_name(), "Bar");
    assert_eq!(type_ref.to_string(), "[Bar!]!");
}

#[test]
fn set_type_replaces_the_entire_shape() {
    let mut type_ref = non_null_list_of_non_null_foo();
    type_ref.set_type(TypeRef::named("ID"));

    assert_eq!(type_ref, TypeRef::named("ID"));
}

/// The deep/shallow matrix for `NonNull(List(NonNull(Named("Foo"))))`:
/// shallow tests see only the outer non-null; deep tests unwrap it and
/// also find the list.
#[test]
fn deep_and_shallow_flags_on_a_mixed_chain() {
    let type_ref = non_null_list_of_non_null_foo();

    assert!(type_ref.is_non_null(false));
    assert!(type_ref.is_non_null(true));
    assert!(!type_ref.is_list(false));
    assert!(type_ref.is_list(true));
}

#[test]
fn deep_non_null_sees_through_a_nullable_list() {
    // `[Foo!]` is nullable at the outermost layer, but a layer on the
    // way to the named type is non-null.
    let type_ref = TypeRef::list(TypeRef::non_null(TypeRef::named("Foo")));

    assert!(!type_ref.is_non_null(false));
    assert!(type_ref.is_non_null(true));
}

#[test]
fn deep_flags_are_false_on_a_bare_named_type() {
    let type_ref = TypeRef::named("Foo");

    assert!(!type_ref.is_non_null(true));
    assert!(!type_ref.is_list(true));
}

#[test]
fn set_non_null_round_trip_restores_the_original_shape() {
    let original = TypeRef::list(TypeRef::named("Foo"));
    let mut type_ref = original.clone();

    type_ref.set_non_null(true);
    assert_eq!(type_ref.to_string(), "[Foo]!");

    type_ref.set_non_null(false);
    assert_eq!(type_ref, original);
}

#[test]
fn set_non_null_is_idempotent() {
    let mut type_ref = TypeRef::named("Foo");
    type_ref.set_non_null(true).set_non_null(true);

    assert_eq!(type_ref, TypeRef::non_null(TypeRef::named("Foo")));

    type_ref.set_non_null(false).set_non_null(false);
    assert_eq!(type_ref, TypeRef::named("Foo"));
}

#[test]
fn set_list_wraps_and_unwraps_in_place() {
    let mut type_ref = TypeRef::non_null(TypeRef::named("Foo"));

    type_ref.set_list(true);
    assert_eq!(type_ref.to_string(), "[Foo!]");

    type_ref.set_list(false);
    assert_eq!(type_ref.to_string(), "Foo!");
}

#[test]
fn type_name_is_invariant_under_wrapper_edits() {
    let mut type_ref = TypeRef::named("Foo");

    type_ref
        .set_non_null(true)
        .set_list(true)
        .set_non_null(true)
        .set_non_null(false)
        .set_list(false);

    assert_eq!(type_ref.type_name(), "Foo");
}

#[test]
fn non_null_constructor_never_double_wraps() {
    let already_non_null = TypeRef::non_null(TypeRef::named("Foo"));

    assert_eq!(
        TypeRef::non_null(already_non_null.clone()),
        already_non_null,
    );
}

#[test]
fn kind_reflects_the_outermost_layer() {
    assert_eq!(TypeRef::named("Foo").kind(), NodeKind::NamedType);
    assert_eq!(
        TypeRef::list(TypeRef::named("Foo")).kind(),
        NodeKind::ListType,
    );
    assert_eq!(
        TypeRef::non_null(TypeRef::named("Foo")).kind(),
        NodeKind::NonNullType,
    );
}

#[test]
fn display_prints_graphql_surface_syntax() {
    assert_eq!(non_null_list_of_non_null_foo().to_string(), "[Foo!]!");
    assert_eq!(
        TypeRef::list(TypeRef::list(TypeRef::named("Int"))).to_string(),
        "[[Int]]",
    );
}
