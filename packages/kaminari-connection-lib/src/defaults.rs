/// GraphQL name of the shared page data type.
pub const PAGE_DATA_TYPE_NAME: &str = "PageData";

/// Suffix appended to a consumer type's name to form its page type name.
pub const PAGE_TYPE_SUFFIX: &str = "Page";

pub const LOG_LEVEL: &str = "info";
pub const VERBOSE_LOGGING: bool = false;
