use kaminari_connection::*;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[test]
fn page_data_type_declares_pagination_fields() {
    let registry = KaminariRegistry::new();
    let page_data = registry.page_data_type();

    assert_eq!(page_data.name(), "PageData");
    assert_eq!(page_data.description(), Some("Information about pagination"));
    assert_eq!(
        page_data.field_names(),
        vec![
            "current_page",
            "is_first_page",
            "is_last_page",
            "is_out_of_range",
            "limit_value",
            "next_page",
            "prev_page",
            "total_pages",
        ]
    );

    let shape = page_data
        .fields()
        .map(|field| {
            (
                field.name.as_str(),
                field.ty.named_type().name(),
                field.nullable,
                field.accessor(),
            )
        })
        .collect::<Vec<_>>();
    assert_eq!(
        shape,
        vec![
            ("current_page", "Int", false, "current_page"),
            ("is_first_page", "Boolean", false, "first_page"),
            ("is_last_page", "Boolean", false, "last_page"),
            ("is_out_of_range", "Boolean", false, "out_of_range"),
            ("limit_value", "Int", false, "limit_value"),
            ("next_page", "Int", true, "next_page"),
            ("prev_page", "Int", true, "prev_page"),
            ("total_pages", "Int", false, "total_pages"),
        ]
    );
}

#[test]
fn page_data_type_is_shared_across_consumers() {
    let registry = KaminariRegistry::new();

    let first = registry.page_data_type();
    let posts = registry.connection("Post").page_type();
    let second = registry.page_data_type();
    let comments = registry.connection("Comment").page_type();
    let third = registry.page_data_type();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&second, &third));

    for page_type in [posts, comments] {
        let field = page_type.get_field("page_data").unwrap();
        let referenced = field.ty.named_type().as_object().unwrap();
        assert!(Arc::ptr_eq(referenced, &first));
    }
}

#[test]
fn page_data_name_is_frozen_after_first_build() {
    let registry = KaminariRegistry::new();
    registry.set_page_data_type_name("Pagination");
    assert_eq!(registry.page_data_type().name(), "Pagination");

    registry.set_page_data_type_name("PaginationInfo");
    assert_eq!(registry.page_data_type().name(), "Pagination");

    let page_type = registry.connection("Post").page_type();
    let page_data = page_type.get_field("page_data").unwrap();
    assert_eq!(page_data.ty.named_type().name(), "Pagination");
}

#[test]
fn global_page_data_type_is_a_singleton() {
    // The only test touching the process-wide registry.
    set_page_data_type_name("GlobalPageData");
    let first = page_data_type();
    set_page_data_type_name("Renamed");
    let second = page_data_type();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.name(), "GlobalPageData");
    assert!(KaminariRegistry::global().is_page_data_type_built());
}
