/// Pieces of the decade control styled with the host page's classes

use crate::decades::{decades_newest_first, Decade};
use crate::locale::Locale;
use crate::ui::toolbar::DropdownPosition;
use yew::prelude::*;

pub const DECADE_SELECTOR_ID: &str = "decade-selector";
const FRINGE_LIST_CLASS: &str = "fringe-base fringe-list";
const DECADE_ITEM_CLASS: &str = "decade-item";
const TOOLTIP_TEXT_CLASS: &str = "tltp tltp-bottom tltp-animate-opacity";
const TOOLTIP_ROLE: &str = "tooltip";

#[derive(Properties, PartialEq)]
pub struct TooltipProps {
    pub text: AttrValue,
    #[prop_or(false)]
    pub hidden: bool,
}

/// Hover label under the button; hidden (class stripped) while the list is open
#[function_component(Tooltip)]
pub fn tooltip(props: &TooltipProps) -> Html {
    let (class, style) = if props.hidden {
        (classes!(), "display: none;")
    } else {
        (classes!(TOOLTIP_TEXT_CLASS), "display: block;")
    };

    html! {
        <div class={class} role={TOOLTIP_ROLE} style={style}>
            {props.text.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DecadeItemProps {
    pub label: AttrValue,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(DecadeItem)]
pub fn decade_item(props: &DecadeItemProps) -> Html {
    html! {
        <div class={DECADE_ITEM_CLASS} onclick={props.onclick.clone()}>
            {props.label.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DecadeListProps {
    pub locale: Locale,
    pub position: DropdownPosition,
    pub on_select: Callback<Decade>,
}

/// Dropdown with every decade, newest first
#[function_component(DecadeList)]
pub fn decade_list(props: &DecadeListProps) -> Html {
    html! {
        <div id={DECADE_SELECTOR_ID} class={FRINGE_LIST_CLASS} style={props.position.style()}>
            {for decades_newest_first().map(|decade| {
                let decade = *decade;
                html! {
                    <DecadeItem
                        key={decade.label.to_string()}
                        label={props.locale.decade_name(decade.label)}
                        onclick={props.on_select.reform(move |_: MouseEvent| decade)}
                    />
                }
            })}
        </div>
    }
}
