//! Browser tests for toolbar injection; run with `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use pastvu_decade_filter::config::AugmenterConfig;
use pastvu_decade_filter::content::observe_for_toolbar;
use pastvu_decade_filter::locale::{Locale, LocaleContext};
use pastvu_decade_filter::messaging::CookieRequest;
use pastvu_decade_filter::ui::components::DECADE_SELECTOR_ID;
use pastvu_decade_filter::relay_message;
use pastvu_decade_filter::ui::toolbar::{inject_toolbar, DecadeControlProps, MARKER_ATTR};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};
use yew::Callback;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Let mutation observers and the Yew scheduler run
async fn settle() {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 30)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn clear_stored_range() {
    let storage = storage();
    storage.remove_item("map.isPainting").unwrap();
    storage.remove_item("map.year.1").unwrap();
    storage.remove_item("map.year2.1").unwrap();
}

fn build_toolbar(id: &str, items: u32) -> Element {
    let doc = document();
    let container = doc.create_element("div").unwrap();
    container.set_id(id);
    container.set_class_name("trtools");
    for i in 0..items {
        let item = doc.create_element("div").unwrap();
        item.set_id(&format!("{}-item-{}", id, i));
        container.append_child(&item).unwrap();
    }
    container
}

fn config_for(id: &str) -> AugmenterConfig {
    AugmenterConfig {
        toolbar_selector: format!("#{}", id),
        ..AugmenterConfig::default()
    }
}

fn props(id: &str, locale: &LocaleContext) -> DecadeControlProps {
    DecadeControlProps {
        config: Rc::new(config_for(id)),
        locale: locale.clone(),
        reload: None,
    }
}

fn click(container: &Element, selector: &str) {
    let element: HtmlElement = container
        .query_selector(selector)
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    element.click();
}

fn wrapper_of(container: &Element) -> Element {
    container.first_element_child().unwrap()
}

fn button_text(container: &Element) -> String {
    container
        .query_selector(".fringe-button-text")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap()
}

#[wasm_bindgen_test]
async fn test_inject_prepends_control() {
    clear_stored_range();
    let container = build_toolbar("toolbar-inject", 6);
    document().body().unwrap().append_child(&container).unwrap();

    inject_toolbar(&document(), &container, props("toolbar-inject", &LocaleContext::new())).unwrap();
    settle().await;

    assert_eq!(container.child_element_count(), 7);
    let wrapper = wrapper_of(&container);
    assert_eq!(wrapper.class_name(), "tltp-wrap");
    assert!(wrapper.has_attribute(MARKER_ATTR));
    assert_eq!(
        container.last_element_child().unwrap().id(),
        "toolbar-inject-item-5"
    );
    assert_eq!(button_text(&container), "----s");

    let tooltip = wrapper.query_selector("[role=tooltip]").unwrap().unwrap();
    assert_eq!(tooltip.text_content().unwrap(), "Decade");
}

#[wasm_bindgen_test]
async fn test_observer_injects_once() {
    clear_stored_range();
    let id = "toolbar-once";
    observe_for_toolbar(Rc::new(config_for(id)), LocaleContext::new()).unwrap();

    let body = document().body().unwrap();
    let first = build_toolbar(id, 6);
    body.append_child(&first).unwrap();
    settle().await;

    assert_eq!(first.child_element_count(), 7);

    // A fresh toolbar after the first injection is left alone
    body.remove_child(&first).unwrap();
    let second = build_toolbar(id, 6);
    body.append_child(&second).unwrap();
    settle().await;

    assert_eq!(second.child_element_count(), 6);
}

#[wasm_bindgen_test]
async fn test_observer_ignores_other_child_counts() {
    let id = "toolbar-five";
    observe_for_toolbar(Rc::new(config_for(id)), LocaleContext::new()).unwrap();

    let container = build_toolbar(id, 5);
    document().body().unwrap().append_child(&container).unwrap();
    settle().await;

    assert_eq!(container.child_element_count(), 5);
    assert!(container
        .query_selector(&format!("[{}]", MARKER_ATTR))
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
async fn test_toggle_dropdown() {
    clear_stored_range();
    let container = build_toolbar("toolbar-toggle", 6);
    document().body().unwrap().append_child(&container).unwrap();
    inject_toolbar(&document(), &container, props("toolbar-toggle", &LocaleContext::new())).unwrap();
    settle().await;

    let button: HtmlElement = container
        .query_selector(".fringe-button")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    button.click();
    settle().await;

    let list = document().get_element_by_id(DECADE_SELECTOR_ID).unwrap();
    assert_eq!(list.child_element_count(), 18);
    assert_eq!(list.first_element_child().unwrap().text_content().unwrap(), "1990s");
    assert_eq!(list.last_element_child().unwrap().text_content().unwrap(), "1820s");

    let tooltip = wrapper_of(&container).query_selector("[role=tooltip]").unwrap().unwrap();
    assert_eq!(tooltip.class_name(), "");

    button.click();
    settle().await;

    assert!(document().get_element_by_id(DECADE_SELECTOR_ID).is_none());
    assert_eq!(tooltip.class_name(), "tltp tltp-bottom tltp-animate-opacity");
}

#[wasm_bindgen_test]
async fn test_rerenders_when_locale_resolves() {
    clear_stored_range();
    let locale = LocaleContext::new();
    let container = build_toolbar("toolbar-locale", 6);
    document().body().unwrap().append_child(&container).unwrap();
    inject_toolbar(&document(), &container, props("toolbar-locale", &locale)).unwrap();
    settle().await;

    assert_eq!(button_text(&container), "----s");

    locale.resolve(Locale::Code("ru".to_string()));
    settle().await;

    assert_eq!(button_text(&container), "----е");
}

#[wasm_bindgen_test]
async fn test_selecting_decade_stores_range_then_reloads() {
    clear_stored_range();
    let id = "toolbar-select";
    let container = build_toolbar(id, 6);
    document().body().unwrap().append_child(&container).unwrap();

    let reloads = Rc::new(Cell::new(0));
    let props = DecadeControlProps {
        reload: Some({
            let reloads = reloads.clone();
            Callback::from(move |_| {
                // Writes land before the reload fires
                assert_eq!(storage().get_item("map.year2.1").unwrap().as_deref(), Some("1869"));
                reloads.set(reloads.get() + 1);
            })
        }),
        ..props(id, &LocaleContext::new())
    };
    inject_toolbar(&document(), &container, props).unwrap();
    settle().await;

    click(&container, ".fringe-button");
    settle().await;

    let list = document().get_element_by_id(DECADE_SELECTOR_ID).unwrap();
    let rows = list.children();
    let row: HtmlElement = (0..rows.length())
        .filter_map(|i| rows.item(i))
        .find(|row| row.text_content().as_deref() == Some("1860s"))
        .unwrap()
        .dyn_into()
        .unwrap();
    row.click();
    settle().await;

    assert_eq!(reloads.get(), 1);
    assert_eq!(storage().get_item("map.isPainting").unwrap().as_deref(), Some("false"));
    assert_eq!(storage().get_item("map.year.1").unwrap().as_deref(), Some("1860"));
    assert_eq!(storage().get_item("map.year2.1").unwrap().as_deref(), Some("1869"));
    assert_eq!(button_text(&container), "1860s");

    // Close the list so later tests start without it
    click(&container, ".fringe-button");
    settle().await;
    clear_stored_range();
}

#[wasm_bindgen_test]
fn test_relay_ignores_other_messages() {
    let ping = CookieRequest {
        action: "ping".to_string(),
        ..CookieRequest::get_cookie("https://pastvu.com", "past_lang")
    };
    let ping = serde_wasm_bindgen::to_value(&ping).unwrap();

    assert!(relay_message(ping).is_undefined());
    assert!(relay_message(JsValue::from_str("getCookie")).is_undefined());
}

#[wasm_bindgen_test]
async fn test_relay_settles_cookie_requests() {
    let request =
        serde_wasm_bindgen::to_value(&CookieRequest::get_cookie("https://pastvu.com", "past_lang"))
            .unwrap();

    let pending = relay_message(request);
    assert!(pending.is_instance_of::<js_sys::Promise>());

    // No cookie store on a test page: the request fails instead of hanging
    let result = JsFuture::from(pending.unchecked_into::<js_sys::Promise>()).await;
    assert!(result.is_err());
}
