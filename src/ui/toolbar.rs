/// The decade control injected at the front of the map toolbar

use crate::config::{AugmenterConfig, DropdownOffset, StorageKeys};
use crate::decades::Decade;
use crate::dom;
use crate::error::ExtensionError;
use crate::locale::LocaleContext;
use crate::selection::{apply_selection, StoredRange};
use crate::ui::components::{DecadeList, Tooltip};
use std::rc::Rc;
use web_sys::{Document, Element};
use yew::prelude::*;

/// Set on our wrapper so a toolbar that already holds it is never
/// mistaken for an unaugmented one
pub const MARKER_ATTR: &str = "data-decade-filter";
const TOOLTIP_WRAPPER_CLASS: &str = "tltp-wrap";
const TOOLBAR_BUTTON_CLASS: &str = "trtool fringe-base fringe-button";
const TOOLBAR_BUTTON_TEXT_CLASS: &str = "fringe-button-text";

/// Viewport position of the open dropdown
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DropdownPosition {
    pub top: f64,
    pub left: f64,
}

impl DropdownPosition {
    /// Just below and right of a box whose bottom/left edges are given
    pub fn below(bottom: f64, left: f64, offset: DropdownOffset) -> DropdownPosition {
        DropdownPosition {
            top: bottom + offset.top,
            left: left + offset.left,
        }
    }

    pub fn style(&self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }
}

#[derive(Properties, PartialEq)]
pub struct DecadeControlProps {
    pub config: Rc<AugmenterConfig>,
    pub locale: LocaleContext,
    /// Replaces the page reload after a selection is stored
    #[prop_or_default]
    pub reload: Option<Callback<()>>,
}

#[function_component(DecadeControl)]
pub fn decade_control(props: &DecadeControlProps) -> Html {
    let stored = {
        let keys = props.config.storage_keys.clone();
        use_state(move || read_stored_range(&keys))
    };
    let selected = use_state(|| None::<Decade>);
    // Some while the list is open
    let dropdown = use_state(|| None::<DropdownPosition>);
    let button_ref = use_node_ref();
    let force_update = use_force_update();

    let locale = props.locale.current();
    let rendered_resolved = props.locale.is_resolved();

    // Re-render when the cookie lookup finishes after we mounted
    {
        let ctx = props.locale.clone();
        use_effect_with((), move |_| {
            if ctx.is_resolved() {
                if !rendered_resolved {
                    force_update.force_update();
                }
            } else {
                ctx.on_resolved(move |_| force_update.force_update());
            }
            || ()
        });
    }

    let on_toggle = {
        let dropdown = dropdown.clone();
        let button_ref = button_ref.clone();
        let offset = props.config.dropdown_offset;

        Callback::from(move |_: MouseEvent| {
            if dropdown.is_some() {
                dropdown.set(None);
                return;
            }

            let position = button_ref
                .cast::<Element>()
                .map(|button| {
                    let rect = button.get_bounding_client_rect();
                    DropdownPosition::below(rect.bottom(), rect.left(), offset)
                })
                .unwrap_or_default();
            dropdown.set(Some(position));
        })
    };

    let on_select = {
        let selected = selected.clone();
        let keys = props.config.storage_keys.clone();
        let reload = props.reload.clone();

        Callback::from(move |decade: Decade| {
            selected.set(Some(decade));
            if let Err(e) = store_and_reload(&keys, &decade, reload.as_ref()) {
                log::error!("Failed to apply decade {}: {}", decade.label, e);
            }
        })
    };

    let label = match *selected {
        Some(decade) => locale.decade_name(decade.label),
        None => stored.label(&locale),
    };

    let list = (*dropdown).and_then(|position| {
        let host: Element = dom::body().ok()?.into();
        Some(create_portal(
            html! {
                <DecadeList locale={locale.clone()} position={position} on_select={on_select.clone()} />
            },
            host,
        ))
    });

    html! {
        <>
            <div class={TOOLBAR_BUTTON_CLASS} ref={button_ref} onclick={on_toggle}>
                <div class={TOOLBAR_BUTTON_TEXT_CLASS}>{label}</div>
            </div>
            <Tooltip text={locale.tooltip_text()} hidden={dropdown.is_some()} />
            {list.unwrap_or_default()}
        </>
    }
}

/// Prepend the decade control to `container`, keeping its original children
/// (and their listeners) after it.
pub fn inject_toolbar(
    document: &Document,
    container: &Element,
    props: DecadeControlProps,
) -> Result<(), ExtensionError> {
    let children = container.children();
    let original: Vec<Element> = (0..children.length())
        .filter_map(|i| children.item(i))
        .collect();
    container.set_inner_html("");

    let wrapper = document
        .create_element("span")
        .map_err(ExtensionError::bridge)?;
    wrapper.set_class_name(TOOLTIP_WRAPPER_CLASS);
    wrapper
        .set_attribute(MARKER_ATTR, "")
        .map_err(ExtensionError::bridge)?;

    container
        .append_child(&wrapper)
        .map_err(ExtensionError::bridge)?;
    for child in &original {
        container
            .append_child(child)
            .map_err(ExtensionError::bridge)?;
    }

    yew::Renderer::<DecadeControl>::with_root_and_props(wrapper, props).render();
    Ok(())
}

fn read_stored_range(keys: &StorageKeys) -> StoredRange {
    match dom::local_storage() {
        Ok(storage) => StoredRange::read(&storage, keys),
        Err(e) => {
            log::warn!("Stored year range unavailable: {}", e);
            StoredRange::default()
        }
    }
}

fn store_and_reload(
    keys: &StorageKeys,
    decade: &Decade,
    reload: Option<&Callback<()>>,
) -> Result<(), ExtensionError> {
    let mut storage = dom::local_storage()?;
    apply_selection(&mut storage, keys, decade, || match reload {
        Some(reload) => {
            reload.emit(());
            Ok(())
        }
        None => dom::reload(),
    })
}
