use leptos::*;
use std::rc::Rc;

pub const THEME_STORAGE_KEY: &str = "hrms-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Where the chosen theme survives a reload. The browser build uses
/// localStorage; tests inject an in-memory implementation.
pub trait ThemePersistence {
    fn load(&self) -> Option<Theme>;
    fn store(&self, theme: Theme);
}

#[derive(Default)]
pub struct LocalStoragePersistence;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

impl ThemePersistence for LocalStoragePersistence {
    fn load(&self) -> Option<Theme> {
        #[cfg(target_arch = "wasm32")]
        {
            let value = local_storage()?.get_item(THEME_STORAGE_KEY).ok()??;
            Theme::parse(&value)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn store(&self, theme: Theme) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = theme;
        }
    }
}

fn system_prefers_dark() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten()
            .map(|m| m.matches())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

fn apply_document_class(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root
                .class_list()
                .toggle_with_force("dark", theme == Theme::Dark);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = theme;
    }
}

/// Stored preference wins, then the system preference, then light.
pub fn resolve_initial(stored: Option<Theme>, system_dark: bool) -> Theme {
    stored.unwrap_or(if system_dark {
        Theme::Dark
    } else {
        Theme::Light
    })
}

#[derive(Clone)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
    persistence: Rc<dyn ThemePersistence>,
}

impl ThemeStore {
    pub fn new(persistence: Rc<dyn ThemePersistence>) -> Self {
        let initial = resolve_initial(persistence.load(), system_prefers_dark());
        apply_document_class(initial);
        Self {
            theme: create_rw_signal(initial),
            persistence,
        }
    }

    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        apply_document_class(next);
        self.persistence.store(next);
    }

    pub fn current(&self) -> ReadSignal<Theme> {
        self.theme.read_only()
    }
}

pub fn provide_theme() -> ThemeStore {
    let store = ThemeStore::new(Rc::new(LocalStoragePersistence));
    provide_context(store.clone());
    store
}

pub fn use_theme() -> ThemeStore {
    expect_context::<ThemeStore>()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod testing {
    use super::{Theme, ThemePersistence};
    use std::cell::RefCell;

    /// In-memory stand-in for localStorage in host tests.
    #[derive(Default)]
    pub struct MemoryPersistence {
        value: RefCell<Option<Theme>>,
    }

    impl MemoryPersistence {
        pub fn stored(&self) -> Option<Theme> {
            *self.value.borrow()
        }

        pub fn seed(&self, theme: Theme) {
            *self.value.borrow_mut() = Some(theme);
        }
    }

    impl ThemePersistence for MemoryPersistence {
        fn load(&self) -> Option<Theme> {
            *self.value.borrow()
        }

        fn store(&self, theme: Theme) {
            *self.value.borrow_mut() = Some(theme);
        }
    }
}
