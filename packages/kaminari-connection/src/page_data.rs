use super::object::*;
use super::self_prelude::*;

pub const PAGE_DATA_DESCRIPTION: &str = "Information about pagination";

/// Fields of the page data type, in declaration order.
pub fn page_data_fields() -> Vec<FieldDef> {
    use FieldType::Named;
    use NamedType::{Boolean, Int};

    vec![
        FieldDef::new("current_page", Named(Int), false),
        FieldDef::new("is_first_page", Named(Boolean), false).with_method("first_page"),
        FieldDef::new("is_last_page", Named(Boolean), false).with_method("last_page"),
        FieldDef::new("is_out_of_range", Named(Boolean), false)
            .with_method("out_of_range"),
        FieldDef::new("limit_value", Named(Int), false),
        FieldDef::new("next_page", Named(Int), true),
        FieldDef::new("prev_page", Named(Int), true),
        FieldDef::new("total_pages", Named(Int), false),
    ]
}

/// Build the shared page data type.
pub fn define_page_data_type(
    type_name: impl Into<String>,
    base: Arc<dyn ObjectClass>,
) -> ObjectTypeDef {
    page_data_fields().into_iter().fold(
        ObjectTypeDef::new(base, type_name).with_description(PAGE_DATA_DESCRIPTION),
        ObjectTypeDef::field,
    )
}
