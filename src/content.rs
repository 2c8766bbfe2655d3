/// Toolbar augmenter running as a content script on the map page
///
/// Two independent flows start together: the locale cookie request and the
/// mutation observer waiting for the toolbar. Injection never waits for the
/// locale; the injected control re-renders once the locale arrives.

use crate::config::AugmenterConfig;
use crate::dom;
use crate::error::ExtensionError;
use crate::locale::LocaleContext;
use crate::messaging::{resolve_locale, CookieRequest, CookieResponse};
use crate::ui::toolbar::{inject_toolbar, DecadeControlProps, MARKER_ATTR};
use crate::watcher::{Candidate, ToolbarWatcher, Transition};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, MutationObserver, MutationObserverInit, MutationRecord, Node};

const CHILD_LIST: &str = "childList";

// Import JS bridge functions
#[wasm_bindgen(module = "/content.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn sendMessage(message: JsValue) -> Result<JsValue, JsValue>;
}

pub fn start_augmenter(config: AugmenterConfig) -> Result<(), ExtensionError> {
    config.validate()?;
    let config = Rc::new(config);
    let locale = LocaleContext::new();

    {
        let config = config.clone();
        let locale = locale.clone();
        spawn_local(async move {
            let response = request_cookie(&config.cookie_url, &config.cookie_name).await;
            let resolved = resolve_locale(response);
            log::debug!("Locale resolved: {:?}", resolved);
            locale.resolve(resolved);
        });
    }

    observe_for_toolbar(config, locale)
}

async fn request_cookie(url: &str, name: &str) -> Result<CookieResponse, ExtensionError> {
    let message = serde_wasm_bindgen::to_value(&CookieRequest::get_cookie(url, name))
        .map_err(ExtensionError::codec)?;

    let response = sendMessage(message).await.map_err(ExtensionError::bridge)?;

    serde_wasm_bindgen::from_value(response).map_err(ExtensionError::codec)
}

pub fn observe_for_toolbar(config: Rc<AugmenterConfig>, locale: LocaleContext) -> Result<(), ExtensionError> {
    let document = dom::document()?;
    let body = dom::body()?;
    let mut watcher = ToolbarWatcher::new(config.toolbar_fingerprint);
    let selector = config.toolbar_selector.clone();

    let callback = Closure::wrap(Box::new(move |records: js_sys::Array, observer: MutationObserver| {
        for record in records.iter() {
            let record: MutationRecord = record.unchecked_into();
            if record.type_() != CHILD_LIST {
                continue;
            }

            let added = record.added_nodes();
            for i in 0..added.length() {
                let is_element = added
                    .item(i)
                    .is_some_and(|node| node.node_type() == Node::ELEMENT_NODE);
                if !is_element {
                    continue;
                }

                let container = document
                    .query_selector(&config.toolbar_selector)
                    .ok()
                    .flatten();
                let candidate = container.as_ref().map(candidate_for);

                if watcher.on_element_added(candidate) == Transition::Inject {
                    observer.disconnect();
                    if let Some(container) = container {
                        inject(&document, &container, &config, &locale);
                    }
                    return;
                }
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, MutationObserver)>);

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(ExtensionError::bridge)?;

    let options = MutationObserverInit::new();
    options.set_child_list(true);
    options.set_attributes(false);
    options.set_subtree(true);

    observer
        .observe_with_options(&body, &options)
        .map_err(ExtensionError::bridge)?;

    // The observer keeps a reference to the callback until it disconnects
    callback.forget();
    log::debug!("Watching for toolbar {}", selector);
    Ok(())
}

pub fn candidate_for(container: &Element) -> Candidate {
    let marker = format!("[{}]", MARKER_ATTR);
    Candidate {
        child_count: container.child_element_count(),
        has_marker: container.query_selector(&marker).ok().flatten().is_some(),
    }
}

fn inject(document: &Document, container: &Element, config: &Rc<AugmenterConfig>, locale: &LocaleContext) {
    let props = DecadeControlProps {
        config: config.clone(),
        locale: locale.clone(),
        reload: None,
    };

    match inject_toolbar(document, container, props) {
        Ok(()) => log::info!("Decade filter injected into {}", config.toolbar_selector),
        Err(e) => log::error!("Toolbar injection failed: {}", e),
    }
}
