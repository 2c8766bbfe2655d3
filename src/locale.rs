/// Locale state and string localization
///
/// The page language comes from the `past_lang` cookie, which is fetched
/// asynchronously through the background relay. Until it arrives (or if it
/// never does) every string renders in English.
use std::cell::RefCell;
use std::rc::Rc;

const LOCALE_RU: &str = "ru";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Locale {
    #[default]
    Unresolved,
    /// Cookie lookup failed or the cookie was missing
    Error,
    /// Raw cookie value; only "ru" changes the output
    Code(String),
}

impl Locale {
    pub fn is_russian(&self) -> bool {
        matches!(self, Locale::Code(code) if code == LOCALE_RU)
    }

    /// Pick the variant for this locale; English unless resolved to "ru"
    pub fn localize<'a>(&self, english: &'a str, russian: &'a str) -> &'a str {
        if self.is_russian() { russian } else { english }
    }

    /// "1950s" in English, "1950-е" in Russian
    pub fn decade_name(&self, year: i64) -> String {
        format!("{}{}", year, self.localize("s", "-е"))
    }

    pub fn default_decade_text(&self) -> &'static str {
        self.localize("----s", "----е")
    }

    pub fn tooltip_text(&self) -> &'static str {
        self.localize("Decade", "Декада")
    }
}

type Listener = Box<dyn Fn(&Locale)>;

struct LocaleState {
    locale: Locale,
    resolved: bool,
    listeners: Vec<Listener>,
}

/// Shared, resolve-once locale handle
///
/// Cloning shares the same state. Single-threaded: it lives on the page's
/// event loop alongside the mutation observer and the cookie callback.
#[derive(Clone)]
pub struct LocaleContext {
    inner: Rc<RefCell<LocaleState>>,
}

impl LocaleContext {
    pub fn new() -> Self {
        LocaleContext {
            inner: Rc::new(RefCell::new(LocaleState {
                locale: Locale::Unresolved,
                resolved: false,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn current(&self) -> Locale {
        self.inner.borrow().locale.clone()
    }

    pub fn is_resolved(&self) -> bool {
        self.inner.borrow().resolved
    }

    /// Set the locale and notify subscribers. Only the first call counts;
    /// returns whether this call performed the resolution.
    pub fn resolve(&self, locale: Locale) -> bool {
        let listeners = {
            let mut state = self.inner.borrow_mut();
            if state.resolved {
                return false;
            }
            state.locale = locale.clone();
            state.resolved = true;
            std::mem::take(&mut state.listeners)
        };

        // Borrow released: listeners may read the context again
        for listener in &listeners {
            listener(&locale);
        }
        true
    }

    /// Run `listener` once when the locale resolves. Ignored if it already
    /// has, since callers read `current()` when they render.
    pub fn on_resolved(&self, listener: impl Fn(&Locale) + 'static) {
        let mut state = self.inner.borrow_mut();
        if !state.resolved {
            state.listeners.push(Box::new(listener));
        }
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for LocaleContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_localize_defaults_to_english() {
        for locale in [
            Locale::Unresolved,
            Locale::Error,
            Locale::Code("en".to_string()),
            Locale::Code("RU".to_string()),
            Locale::Code(String::new()),
        ] {
            assert_eq!(locale.localize("Decade", "Декада"), "Decade");
        }
    }

    #[test]
    fn test_localize_russian() {
        let locale = Locale::Code("ru".to_string());
        assert_eq!(locale.localize("Decade", "Декада"), "Декада");
        assert_eq!(locale.default_decade_text(), "----е");
    }

    #[test]
    fn test_decade_name() {
        assert_eq!(Locale::Code("en".to_string()).decade_name(1950), "1950s");
        assert_eq!(Locale::Code("ru".to_string()).decade_name(1950), "1950-е");
        assert_eq!(Locale::Unresolved.decade_name(1820), "1820s");
    }

    #[test]
    fn test_context_starts_unresolved() {
        let ctx = LocaleContext::new();

        assert!(!ctx.is_resolved());
        assert_eq!(ctx.current(), Locale::Unresolved);
        assert_eq!(ctx.current().default_decade_text(), "----s");
    }

    #[test]
    fn test_context_resolves_once() {
        let ctx = LocaleContext::new();

        assert!(ctx.resolve(Locale::Code("ru".to_string())));
        assert!(!ctx.resolve(Locale::Error));
        assert_eq!(ctx.current(), Locale::Code("ru".to_string()));
    }

    #[test]
    fn test_listeners_fire_on_resolution() {
        let ctx = LocaleContext::new();
        let calls = Rc::new(Cell::new(0));

        {
            let calls = calls.clone();
            let ctx_inner = ctx.clone();
            ctx.on_resolved(move |locale| {
                assert!(locale.is_russian());
                assert!(ctx_inner.current().is_russian());
                calls.set(calls.get() + 1);
            });
        }

        ctx.resolve(Locale::Code("ru".to_string()));
        ctx.resolve(Locale::Error);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_listener_after_resolution_is_ignored() {
        let ctx = LocaleContext::new();
        ctx.resolve(Locale::Error);

        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        ctx.on_resolved(move |_| counter.set(counter.get() + 1));

        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let ctx = LocaleContext::new();
        let other = ctx.clone();

        other.resolve(Locale::Code("ru".to_string()));

        assert!(ctx.current().is_russian());
        assert!(ctx == other);
        assert!(ctx != LocaleContext::new());
    }
}
