use assert_matches::assert_matches;
use kaminari_connection::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn post_connection_descriptor() {
    let registry = KaminariRegistry::new();
    let field = registry
        .connection("Post")
        .kaminari_connection(ConnectionOverrides::new());

    assert_eq!(field.ty.name(), "PostPage");
    assert!(!field.nullable);
    assert!(field.extra.is_empty());
    assert_eq!(
        field.arguments,
        vec![
            ArgumentDef::new("page", "Int", false),
            ArgumentDef::new("per", "Int", false),
        ]
    );

    assert_eq!(field.ty.field_names(), vec!["page_data", "items"]);

    let page_data = field.ty.get_field("page_data").unwrap();
    assert!(!page_data.nullable);
    assert_eq!(page_data.accessor(), OBJECT_METHOD);
    assert_matches!(
        &page_data.ty,
        FieldType::Named(NamedType::Object(ty)) if Arc::ptr_eq(ty, &registry.page_data_type())
    );

    let items = field.ty.get_field("items").unwrap();
    assert!(!items.nullable);
    assert_eq!(items.accessor(), OBJECT_METHOD);
    assert_eq!(items.description.as_deref(), Some("A list of items"));
    assert_matches!(&items.ty, FieldType::List(NamedType::Named(name)) if name == "Post");
}

#[test]
fn distinct_consumers_get_distinct_page_types() {
    let registry = KaminariRegistry::new();
    let a = registry.connection("A").page_type();
    let b = registry.connection("B").page_type();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(a.name(), "APage");
    assert_eq!(b.name(), "BPage");
    assert_eq!(b.description(), Some("Autogenerated page type for B"));
}

#[test]
fn nullable_override_keeps_other_defaults() {
    let registry = KaminariRegistry::new();
    let connection = registry.connection("Post");
    let default = connection.kaminari_connection(ConnectionOverrides::new());
    let nullable = connection.kaminari_connection(ConnectionOverrides::new().nullable(true));

    assert!(nullable.nullable);
    assert!(Arc::ptr_eq(&default.ty, &nullable.ty));
    assert_eq!(default.arguments, nullable.arguments);
    assert_eq!(default.extra, nullable.extra);
}

#[test]
fn unrelated_override_keys_are_preserved() {
    let registry = KaminariRegistry::new();
    let field = registry.connection("Post").kaminari_connection(
        ConnectionOverrides::new()
            .extra("complexity", 5)
            .extra("camelize", false),
    );

    assert_eq!(field.get_extra("complexity"), Some(&serde_json::json!(5)));
    assert_eq!(field.get_extra("camelize"), Some(&serde_json::json!(false)));
    assert!(!field.nullable);
    assert_eq!(field.arguments.len(), 2);
}

#[test]
fn page_arguments_are_optional_ints() {
    let arguments = ConnectionBuilder::page_arguments();
    let names = arguments
        .iter()
        .map(|argument| argument.name.as_str())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["page", "per"]);
    assert!(arguments
        .iter()
        .all(|argument| argument.type_name == "Int" && !argument.required));
}
