//! Per-consumer page types and the connection field descriptor.

use super::object::*;
use super::registry::*;
use super::resolver::{PAGE_ARGUMENT, PER_ARGUMENT};
use super::self_prelude::*;
use kaminari_connection_lib::defaults;
use once_cell::sync::OnceCell;
use serde_json::Value as JsonValue;
use std::sync::{PoisonError, RwLock};

pub const ITEMS_DESCRIPTION: &str = "A list of items";

/// Extra key rendered as the field description.
pub const DESCRIPTION_KEY: &str = "description";

pub const TYPE_KEY: &str = "type";
pub const ARGUMENTS_KEY: &str = "arguments";
pub const NULLABLE_KEY: &str = "nullable";

pub fn page_type_name(consumer: &str) -> String {
    format!("{}{}", consumer, defaults::PAGE_TYPE_SUFFIX)
}

pub fn page_type_description(consumer: &str) -> String {
    format!("Autogenerated page type for {consumer}")
}

/// Builds and caches the page type of one consumer type.
///
/// Builders obtained from [`KaminariRegistry::connection`] are shared, so a
/// consumer gets at most one page type per registry.
#[derive(Debug)]
pub struct ConnectionBuilder {
    consumer: String,
    page_data: Arc<PageDataSlot>,
    base_page_class: RwLock<Arc<dyn ObjectClass>>,
    page_type: OnceCell<Arc<ObjectTypeDef>>,
}

impl ConnectionBuilder {
    pub fn new(registry: &KaminariRegistry, consumer: impl Into<String>) -> Self {
        Self {
            consumer: consumer.into(),
            page_data: registry.page_data_slot(),
            base_page_class: RwLock::new(plain_object()),
            page_type: OnceCell::new(),
        }
    }

    pub fn consumer_name(&self) -> &str {
        &self.consumer
    }

    /// Field descriptor for a paginated field returning this consumer's page
    /// type. Keys set in `overrides` replace the defaults.
    pub fn kaminari_connection(&self, overrides: ConnectionOverrides) -> ConnectionField {
        ConnectionField {
            ty: self.page_type(),
            arguments: Self::page_arguments(),
            nullable: false,
            extra: IndexMap::new(),
        }
        .merge(overrides)
    }

    pub fn page_arguments() -> Vec<ArgumentDef> {
        vec![
            ArgumentDef::new(PAGE_ARGUMENT, TypeRef::INT, false),
            ArgumentDef::new(PER_ARGUMENT, TypeRef::INT, false),
        ]
    }

    /// The page type, built on first call.
    pub fn page_type(&self) -> Arc<ObjectTypeDef> {
        self.page_type
            .get_or_init(|| Arc::new(self.define_page_type()))
            .clone()
    }

    pub fn built_page_type(&self) -> Option<Arc<ObjectTypeDef>> {
        self.page_type.get().cloned()
    }

    pub fn base_page_class(&self) -> Arc<dyn ObjectClass> {
        self.base_page_class
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Change the base class of this consumer's page type. Must be called
    /// before the page type is first built.
    pub fn set_base_page_class(&self, base: Arc<dyn ObjectClass>) {
        if let Some(page_type) = self.page_type.get() {
            warn!(
                "Page type {} is already built; base class {} has no effect",
                page_type.name(),
                base.class_name()
            );
        }
        *self
            .base_page_class
            .write()
            .unwrap_or_else(PoisonError::into_inner) = base;
    }

    fn define_page_type(&self) -> ObjectTypeDef {
        let type_name = page_type_name(&self.consumer);
        let page_data = self.page_data.get();
        let base = self.base_page_class();
        debug!("Building page type {} from {}", type_name, base.class_name());

        ObjectTypeDef::new(base, type_name)
            .with_description(page_type_description(&self.consumer))
            .field(
                FieldDef::new(
                    "page_data",
                    FieldType::Named(NamedType::Object(page_data)),
                    false,
                )
                .with_method(OBJECT_METHOD),
            )
            .field(
                FieldDef::new(
                    "items",
                    FieldType::List(NamedType::Named(self.consumer.clone())),
                    false,
                )
                .with_description(ITEMS_DESCRIPTION)
                .with_method(OBJECT_METHOD),
            )
    }
}

/// Keys replacing the defaults of a [`ConnectionField`]. Unset keys keep
/// their default; extra keys are carried through unchanged.
#[derive(Clone, Debug, Default)]
pub struct ConnectionOverrides {
    ty: Option<Arc<ObjectTypeDef>>,
    arguments: Option<Vec<ArgumentDef>>,
    nullable: Option<bool>,
    extra: IndexMap<String, JsonValue>,
}

impl ConnectionOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ty(mut self, ty: Arc<ObjectTypeDef>) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn arguments(mut self, arguments: Vec<ArgumentDef>) -> Self {
        self.arguments = Some(arguments);
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = Some(nullable);
        self
    }

    /// Set a key with no typed setter. A boolean `nullable` goes to
    /// [`Self::nullable`]; other values for `type`, `arguments` or `nullable`
    /// are dropped, as those keys only take typed values.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match (key.as_str(), &value) {
            (NULLABLE_KEY, JsonValue::Bool(nullable)) => self.nullable(*nullable),
            (TYPE_KEY | ARGUMENTS_KEY | NULLABLE_KEY, _) => {
                warn!("Ignoring override {} = {}; use the typed setter", key, value);
                self
            }
            _ => {
                self.extra.insert(key, value);
                self
            }
        }
    }

    pub fn description(self, description: impl Into<String>) -> Self {
        self.extra(DESCRIPTION_KEY, description.into())
    }
}

/// Configuration of a paginated field, ready to attach to a consumer's schema.
#[derive(Clone, Debug)]
pub struct ConnectionField {
    pub ty: Arc<ObjectTypeDef>,
    pub arguments: Vec<ArgumentDef>,
    pub nullable: bool,
    pub extra: IndexMap<String, JsonValue>,
}

impl ConnectionField {
    /// Shallow merge: every key set in `overrides` fully replaces this one.
    pub fn merge(mut self, overrides: ConnectionOverrides) -> Self {
        let ConnectionOverrides {
            ty,
            arguments,
            nullable,
            extra,
        } = overrides;

        if let Some(ty) = ty {
            self.ty = ty;
        }
        if let Some(arguments) = arguments {
            self.arguments = arguments;
        }
        if let Some(nullable) = nullable {
            self.nullable = nullable;
        }
        self.extra.extend(extra);
        self
    }

    pub fn type_ref(&self) -> TypeRef {
        if self.nullable {
            TypeRef::named(self.ty.name())
        } else {
            TypeRef::named_nn(self.ty.name())
        }
    }

    pub fn get_extra(&self, key: &str) -> Option<&JsonValue> {
        self.extra.get(key)
    }

    pub fn description(&self) -> Option<&str> {
        self.get_extra(DESCRIPTION_KEY).and_then(JsonValue::as_str)
    }
}
