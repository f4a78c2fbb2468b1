//! Resolution of generated fields against the backing object.

use super::object::*;
use super::page::*;
use super::self_prelude::*;
use async_graphql::Value;

pub const PAGE_ARGUMENT: &str = "page";
pub const PER_ARGUMENT: &str = "per";

/// The [`PageMetadata`] methods, addressable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDataAccessor {
    CurrentPage,
    FirstPage,
    LastPage,
    OutOfRange,
    LimitValue,
    NextPage,
    PrevPage,
    TotalPages,
}

impl PageDataAccessor {
    pub const ALL: [Self; 8] = [
        Self::CurrentPage,
        Self::FirstPage,
        Self::LastPage,
        Self::OutOfRange,
        Self::LimitValue,
        Self::NextPage,
        Self::PrevPage,
        Self::TotalPages,
    ];

    pub fn method(&self) -> &'static str {
        match self {
            Self::CurrentPage => "current_page",
            Self::FirstPage => "first_page",
            Self::LastPage => "last_page",
            Self::OutOfRange => "out_of_range",
            Self::LimitValue => "limit_value",
            Self::NextPage => "next_page",
            Self::PrevPage => "prev_page",
            Self::TotalPages => "total_pages",
        }
    }

    pub fn from_method(method: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|accessor| accessor.method() == method)
    }

    /// Invoke the accessor. `None` stands for a null value.
    pub fn get(&self, data: &dyn PageMetadata) -> Option<Value> {
        match self {
            Self::CurrentPage => Some(Value::from(data.current_page())),
            Self::FirstPage => Some(Value::from(data.first_page())),
            Self::LastPage => Some(Value::from(data.last_page())),
            Self::OutOfRange => Some(Value::from(data.out_of_range())),
            Self::LimitValue => Some(Value::from(data.limit_value())),
            Self::NextPage => data.next_page().map(Value::from),
            Self::PrevPage => data.prev_page().map(Value::from),
            Self::TotalPages => Some(Value::from(data.total_pages())),
        }
    }
}

/// How a generated field produces its value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Pass the backing object through.
    BackingObject,
    /// The backing object's items.
    Items,
    PageData(PageDataAccessor),
    /// No such accessor; resolving the field fails.
    Unknown(String),
}

impl Resolution {
    pub fn for_field(field: &FieldDef) -> Self {
        match field.accessor() {
            OBJECT_METHOD if field.ty.is_list() => Self::Items,
            OBJECT_METHOD => Self::BackingObject,
            method => PageDataAccessor::from_method(method)
                .map(Self::PageData)
                .unwrap_or_else(|| Self::Unknown(method.to_string())),
        }
    }

    pub fn resolve<'a>(
        &self,
        field: &str,
        parent: &'a FieldValue<'a>,
    ) -> KaminariResult<Option<FieldValue<'a>>> {
        match self {
            Self::BackingObject => {
                let page = page_value(field, parent)?;
                Ok(Some(FieldValue::borrowed_any(page)))
            }
            Self::Items => {
                let page = page_value(field, parent)?;
                Ok(Some(FieldValue::list(
                    page.page()
                        .items()
                        .into_iter()
                        .map(FieldValue::borrowed_any),
                )))
            }
            Self::PageData(accessor) => {
                let data = page_metadata(field, parent)?;
                Ok(accessor.get(data).map(FieldValue::value))
            }
            Self::Unknown(method) => Err(KaminariError::resolver_mismatch(
                field,
                format!("backing object has no accessor `{method}`"),
            )),
        }
    }
}

fn page_value<'a>(field: &str, parent: &'a FieldValue<'a>) -> KaminariResult<&'a PageValue> {
    parent.try_downcast_ref::<PageValue>().map_err(|_| {
        KaminariError::resolver_mismatch(field, "backing object is not a paginated result")
    })
}

fn page_metadata<'a>(
    field: &str,
    parent: &'a FieldValue<'a>,
) -> KaminariResult<&'a dyn PageMetadata> {
    if let Ok(page) = parent.try_downcast_ref::<PageValue>() {
        return Ok(page.page().page_data());
    }
    parent
        .try_downcast_ref::<PageData>()
        .map(|data| data as &dyn PageMetadata)
        .map_err(|_| {
            KaminariError::resolver_mismatch(field, "backing object has no page metadata")
        })
}

#[extension_trait]
pub impl<'a> KaminariResolverContext<'a> for ResolverContext<'a> {
    /// The requested page number, if any.
    fn page_arg(&self) -> KaminariResult<Option<u64>> {
        self.optional_u64_arg(PAGE_ARGUMENT)
    }

    /// The requested page size, if any.
    fn per_arg(&self) -> KaminariResult<Option<u64>> {
        self.optional_u64_arg(PER_ARGUMENT)
    }

    fn optional_u64_arg(&self, name: &str) -> KaminariResult<Option<u64>> {
        match self.args.get(name).map(|arg| arg.as_value().clone()) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Number(number)) => number.as_u64().map(Some).ok_or_else(|| {
                KaminariError::InvalidArgument(
                    name.to_string(),
                    format!("expected a non-negative integer, got {number}"),
                )
            }),
            Some(other) => Err(KaminariError::InvalidArgument(
                name.to_string(),
                format!("expected an integer, got {other}"),
            )),
        }
    }
}
