//! Descriptors for the object types this crate generates.
//!
//! Descriptors are plain values built once at schema construction time and
//! rendered into `async_graphql::dynamic` objects by the [`crate::schema`]
//! module.

use super::self_prelude::*;

/// Accessor name of a field that resolves to the backing object itself.
pub const OBJECT_METHOD: &str = "object";

/// Base class of a generated object type.
///
/// The base creates the dynamic [`Object`] before the generated description
/// and fields are applied, so it can attach interfaces, directives or extra
/// fields shared by every type derived from it.
pub trait ObjectClass: fmt::Debug + Send + Sync + 'static {
    fn class_name(&self) -> &str;

    fn new_object(&self, name: &str) -> Object {
        Object::new(name)
    }
}

/// The plain object type, default base of every generated type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlainObject;

impl ObjectClass for PlainObject {
    fn class_name(&self) -> &str {
        "Object"
    }
}

pub fn plain_object() -> Arc<dyn ObjectClass> {
    Arc::new(PlainObject)
}

/// A named GraphQL output type.
#[derive(Clone, Debug)]
pub enum NamedType {
    Int,
    Boolean,
    /// A generated object type, shared by reference.
    Object(Arc<ObjectTypeDef>),
    /// A type declared by the host schema, referenced by name.
    Named(String),
}

impl NamedType {
    pub fn name(&self) -> &str {
        match self {
            Self::Int => TypeRef::INT,
            Self::Boolean => TypeRef::BOOLEAN,
            Self::Object(def) => def.name(),
            Self::Named(name) => name,
        }
    }

    pub fn as_object(&self) -> Option<&Arc<ObjectTypeDef>> {
        match self {
            Self::Object(def) => Some(def),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum FieldType {
    Named(NamedType),
    /// A list of non-null items.
    List(NamedType),
}

impl FieldType {
    pub fn named_type(&self) -> &NamedType {
        match self {
            Self::Named(ty) | Self::List(ty) => ty,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn type_ref(&self, nullable: bool) -> TypeRef {
        match (self, nullable) {
            (Self::Named(ty), true) => TypeRef::named(ty.name()),
            (Self::Named(ty), false) => TypeRef::named_nn(ty.name()),
            (Self::List(ty), true) => TypeRef::named_nn_list(ty.name()),
            (Self::List(ty), false) => TypeRef::named_nn_list_nn(ty.name()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldDef {
    pub name: String,
    pub ty: FieldType,
    pub nullable: bool,
    pub description: Option<String>,
    /// Method invoked on the backing object. Defaults to the field name.
    pub method: Option<String>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, ty: FieldType, nullable: bool) -> Self {
        Self {
            name: name.into(),
            ty,
            nullable,
            description: None,
            method: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn accessor(&self) -> &str {
        self.method.as_deref().unwrap_or(&self.name)
    }

    pub fn type_ref(&self) -> TypeRef {
        self.ty.type_ref(self.nullable)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgumentDef {
    pub name: String,
    pub type_name: String,
    pub required: bool,
}

impl ArgumentDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            required,
        }
    }

    pub fn type_ref(&self) -> TypeRef {
        if self.required {
            TypeRef::named_nn(self.type_name.clone())
        } else {
            TypeRef::named(self.type_name.clone())
        }
    }
}

#[derive(Debug)]
pub struct ObjectTypeDef {
    name: String,
    description: Option<String>,
    base: Arc<dyn ObjectClass>,
    fields: IndexMap<String, FieldDef>,
}

impl ObjectTypeDef {
    pub fn new(base: Arc<dyn ObjectClass>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            base,
            fields: IndexMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare a field. Fields keep their declaration order.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.insert(field.name.clone(), field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    pub fn base(&self) -> &Arc<dyn ObjectClass> {
        &self.base
    }
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.values()
    }
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(String::as_str).collect()
    }
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_accessor_defaults_to_field_name() {
        let field = FieldDef::new("limit_value", FieldType::Named(NamedType::Int), false);
        assert_eq!(field.accessor(), "limit_value");

        let field = field.with_method("limit");
        assert_eq!(field.accessor(), "limit");
    }

    #[test]
    fn fields_keep_declaration_order() {
        let object = ObjectTypeDef::new(plain_object(), "Thing")
            .field(FieldDef::new("b", FieldType::Named(NamedType::Int), false))
            .field(FieldDef::new("a", FieldType::Named(NamedType::Boolean), true));

        assert_eq!(object.field_names(), vec!["b", "a"]);
        assert_eq!(object.base().class_name(), "Object");
    }

    #[test]
    fn list_type_ref_names_item_type() {
        let ty = FieldType::List(NamedType::Named("Post".to_string()));
        assert!(ty.is_list());
        assert_eq!(ty.named_type().name(), "Post");
        assert_eq!(ty.type_ref(false).to_string(), "[Post!]!");
        assert_eq!(ty.type_ref(true).to_string(), "[Post!]");
    }
}
