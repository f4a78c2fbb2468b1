//! Rendering of generated types into `async_graphql::dynamic`.

use super::connection::*;
use super::object::*;
use super::registry::*;
use super::resolver::*;
use super::self_prelude::*;

impl ObjectTypeDef {
    /// Build the dynamic object. The base class creates the object; the
    /// description and fields are applied on top.
    pub fn to_object(&self) -> Object {
        let mut object = self.base().new_object(self.name());
        if let Some(description) = self.description() {
            object = object.description(description);
        }
        self.fields()
            .fold(object, |object, field| object.field(field.to_field()))
    }
}

impl FieldDef {
    /// Build the dynamic field, resolved by invoking this field's accessor on
    /// the backing object.
    pub fn to_field(&self) -> Field {
        let resolution = Resolution::for_field(self);
        let field_name = self.name.clone();
        let mut field = Field::new(self.name.clone(), self.type_ref(), move |ctx| {
            let result = resolution
                .resolve(&field_name, ctx.parent_value)
                .map_err(async_graphql::Error::from);
            FieldFuture::new(async move { result })
        });
        if let Some(description) = &self.description {
            field = field.description(description.clone());
        }
        field
    }
}

impl ArgumentDef {
    pub fn to_input_value(&self) -> InputValue {
        InputValue::new(self.name.clone(), self.type_ref())
    }
}

impl ConnectionField {
    /// Build the paginated field on the consumer's schema. `resolver_fn` must
    /// return a [`crate::PageValue`].
    pub fn to_field<F>(&self, name: impl Into<String>, resolver_fn: F) -> Field
    where
        F: for<'a> Fn(ResolverContext<'a>) -> FieldFuture<'a> + Send + Sync + 'static,
    {
        let field = Field::new(name, self.type_ref(), resolver_fn);
        let field = self
            .arguments
            .iter()
            .fold(field, |field, argument| field.argument(argument.to_input_value()));
        match self.description() {
            Some(description) => field.description(description),
            None => field,
        }
    }
}

#[extension_trait]
pub impl KaminariSchemaBuilder for SchemaBuilder {
    /// Register the page data type and every page type built so far.
    ///
    /// Types are keyed by name: a generated type replaces any type of the same
    /// name registered earlier, and a type registered afterwards replaces the
    /// generated one. No error is reported. Rename the page data type with
    /// [`KaminariRegistry::set_page_data_type_name`] if the schema already
    /// has a `PageData` type.
    ///
    /// Page types built after this call are not registered.
    fn register_kaminari(self, registry: &KaminariRegistry) -> Self {
        let page_types = registry.page_types();
        debug!("Registering page data type and {} page types", page_types.len());
        page_types.iter().fold(
            self.register_object_type(&registry.page_data_type()),
            |schema, page_type| schema.register_object_type(page_type),
        )
    }

    fn register_object_type(self, object_type: &ObjectTypeDef) -> Self {
        self.register(object_type.to_object())
    }
}

/// Finish a schema, reporting build errors as [`KaminariError::Schema`].
pub fn finish_schema(schema: SchemaBuilder) -> KaminariResult<Schema> {
    Ok(schema.finish()?)
}
