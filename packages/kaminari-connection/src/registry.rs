use super::connection::*;
use super::object::*;
use super::page_data::*;
use super::self_prelude::*;
use kaminari_connection_lib::{
    config::{KaminariArgs, KaminariConfig},
    defaults,
};
use lazy_static::lazy_static;
use once_cell::sync::OnceCell;
use std::sync::{Mutex, PoisonError, RwLock};

lazy_static! {
    /// Process-wide registry backing the free functions of this module.
    static ref GLOBAL_REGISTRY: KaminariRegistry = KaminariRegistry::default();
}

#[derive(Debug)]
struct PageDataSettings {
    type_name: String,
    base: Arc<dyn ObjectClass>,
}

/// The lazily built page data type together with the settings used to build
/// it. Shared between a registry and the connection builders it hands out.
#[derive(Debug)]
pub struct PageDataSlot {
    settings: RwLock<PageDataSettings>,
    built: OnceCell<Arc<ObjectTypeDef>>,
}

impl PageDataSlot {
    fn new(type_name: impl Into<String>) -> Self {
        Self {
            settings: RwLock::new(PageDataSettings {
                type_name: type_name.into(),
                base: plain_object(),
            }),
            built: OnceCell::new(),
        }
    }

    pub fn get(&self) -> Arc<ObjectTypeDef> {
        if let Some(page_data) = self.built.get() {
            trace!("Reusing page data type {}", page_data.name());
        }
        self.built
            .get_or_init(|| {
                let settings = self.settings.read().unwrap_or_else(PoisonError::into_inner);
                debug!(
                    "Building page data type {} from {}",
                    settings.type_name,
                    settings.base.class_name()
                );
                Arc::new(define_page_data_type(
                    settings.type_name.clone(),
                    settings.base.clone(),
                ))
            })
            .clone()
    }

    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    fn set_type_name(&self, type_name: String) {
        if let Some(page_data) = self.built.get() {
            warn!(
                "Page data type {} is already built; name {} has no effect",
                page_data.name(),
                type_name
            );
        }
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .type_name = type_name;
    }

    fn set_base(&self, base: Arc<dyn ObjectClass>) {
        if let Some(page_data) = self.built.get() {
            warn!(
                "Page data type {} is already built; base class {} has no effect",
                page_data.name(),
                base.class_name()
            );
        }
        self.settings
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .base = base;
    }
}

/// Owner of the shared page data type and of the per-consumer connection
/// builders.
///
/// Configuration is effectively write-once: setters only affect types built
/// after they are called.
#[derive(Debug)]
pub struct KaminariRegistry {
    page_data: Arc<PageDataSlot>,
    connections: Mutex<IndexMap<String, Arc<ConnectionBuilder>>>,
}

impl Default for KaminariRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl KaminariRegistry {
    pub fn new() -> Self {
        Self {
            page_data: Arc::new(PageDataSlot::new(defaults::PAGE_DATA_TYPE_NAME)),
            connections: Mutex::new(IndexMap::new()),
        }
    }

    pub fn from_config(config: &KaminariConfig) -> Self {
        let registry = Self::new();
        registry.set_page_data_type_name(config.page_data_type_name.clone());
        registry
    }

    /// Registry configured from command line arguments, an optional config
    /// file and the environment.
    pub fn from_args(args: KaminariArgs) -> KaminariResult<Self> {
        let config = KaminariConfig::try_from(args)?;
        Ok(Self::from_config(&config))
    }

    /// The process-wide registry.
    pub fn global() -> &'static KaminariRegistry {
        &GLOBAL_REGISTRY
    }

    /// The shared page data type, built on first call.
    pub fn page_data_type(&self) -> Arc<ObjectTypeDef> {
        self.page_data.get()
    }

    pub fn is_page_data_type_built(&self) -> bool {
        self.page_data.is_built()
    }

    /// Rename the page data type, e.g. when the schema already has a
    /// `PageData` type. Must be called before the type is first built.
    pub fn set_page_data_type_name(&self, type_name: impl Into<String>) {
        self.page_data.set_type_name(type_name.into());
    }

    /// Change the base class of the page data type. Must be called before the
    /// type is first built.
    pub fn set_base_page_data_class(&self, base: Arc<dyn ObjectClass>) {
        self.page_data.set_base(base);
    }

    pub(crate) fn page_data_slot(&self) -> Arc<PageDataSlot> {
        self.page_data.clone()
    }

    /// The connection builder for a consumer type, created once per name.
    pub fn connection(&self, consumer: impl Into<String>) -> Arc<ConnectionBuilder> {
        let consumer = consumer.into();
        let mut connections = self
            .connections
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        connections
            .entry(consumer.clone())
            .or_insert_with(|| Arc::new(ConnectionBuilder::new(self, consumer)))
            .clone()
    }

    /// Page types built so far, in the order their consumers were registered.
    pub fn page_types(&self) -> Vec<Arc<ObjectTypeDef>> {
        self.connections
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter_map(|connection| connection.built_page_type())
            .collect()
    }
}

/// The shared page data type of the process-wide registry.
pub fn page_data_type() -> Arc<ObjectTypeDef> {
    KaminariRegistry::global().page_data_type()
}

pub fn set_page_data_type_name(type_name: impl Into<String>) {
    KaminariRegistry::global().set_page_data_type_name(type_name)
}

pub fn set_base_page_data_class(base: Arc<dyn ObjectClass>) {
    KaminariRegistry::global().set_base_page_data_class(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kaminari_connection_lib::config::KaminariConfigError;

    #[derive(Debug)]
    struct Audited;

    impl ObjectClass for Audited {
        fn class_name(&self) -> &str {
            "Audited"
        }
    }

    #[test]
    fn page_data_type_is_built_once() {
        let registry = KaminariRegistry::new();
        assert!(!registry.is_page_data_type_built());

        let first = registry.page_data_type();
        let second = registry.page_data_type();

        assert!(registry.is_page_data_type_built());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), defaults::PAGE_DATA_TYPE_NAME);
    }

    #[test]
    fn settings_apply_before_first_build() {
        let registry = KaminariRegistry::new();
        registry.set_page_data_type_name("Pagination");
        registry.set_base_page_data_class(Arc::new(Audited));

        let page_data = registry.page_data_type();
        assert_eq!(page_data.name(), "Pagination");
        assert_eq!(page_data.base().class_name(), "Audited");
    }

    #[test]
    fn settings_after_first_build_are_ignored() {
        let registry = KaminariRegistry::new();
        let before = registry.page_data_type();

        registry.set_page_data_type_name("Pagination");
        registry.set_base_page_data_class(Arc::new(Audited));
        let after = registry.page_data_type();

        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(after.name(), defaults::PAGE_DATA_TYPE_NAME);
        assert_eq!(after.base().class_name(), "Object");
    }

    #[test]
    fn registry_from_config_uses_configured_name() {
        let config = KaminariConfig {
            page_data_type_name: "PaginationInfo".to_string(),
            ..KaminariConfig::default()
        };
        let registry = KaminariRegistry::from_config(&config);
        assert_eq!(registry.page_data_type().name(), "PaginationInfo");
    }

    #[test]
    fn registry_from_args() {
        let args = KaminariArgs {
            page_data_type_name: Some("Pagination".to_string()),
            ..KaminariArgs::default()
        };
        let registry = KaminariRegistry::from_args(args).unwrap();
        assert_eq!(registry.page_data_type().name(), "Pagination");

        let args = KaminariArgs {
            page_data_type_name: Some(" ".to_string()),
            ..KaminariArgs::default()
        };
        assert!(matches!(
            KaminariRegistry::from_args(args),
            Err(KaminariError::Config(KaminariConfigError::InvalidValue(..)))
        ));
    }

    #[test]
    fn connections_are_cached_per_consumer() {
        let registry = KaminariRegistry::new();
        let a = registry.connection("Post");
        let b = registry.connection("Post");
        let c = registry.connection("Comment");

        assert!(Arc::ptr_eq(&a, &b));
        assert!(!Arc::ptr_eq(&a, &c));
        assert!(registry.page_types().is_empty());

        c.page_type();
        a.page_type();
        let names = registry
            .page_types()
            .iter()
            .map(|page_type| page_type.name().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["PostPage", "CommentPage"]);
    }

    #[test]
    fn page_data_type_is_built_once_under_concurrent_access() {
        let registry = Arc::new(KaminariRegistry::new());
        let handles = (0..8)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || registry.page_data_type())
            })
            .collect::<Vec<_>>();

        let built = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>();
        assert!(built.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
    }
}
