use yew::prelude::*;
use web_sys::MouseEvent;

use crate::content::ContentItem;
use crate::icons::icon;

pub const DETAILS_HEADING: &str = "Highlights:";
/// Detail heading on the landing page.
pub const LANDING_DETAILS_HEADING: &str = "What I Offer:";

#[derive(Properties, PartialEq)]
pub struct ContentTileProps {
    pub item: &'static ContentItem,
    pub expanded: bool,
    pub on_toggle: Callback<&'static str>,
    #[prop_or(DETAILS_HEADING)]
    pub heading: &'static str,
}

#[function_component(ContentTile)]
pub fn content_tile(props: &ContentTileProps) -> Html {
    let ContentTileProps { item, expanded, on_toggle, heading } = props;
    let expanded = *expanded;

    let toggle_tile = {
        let on_toggle = on_toggle.clone();
        let id = item.id;
        Callback::from(move |_: MouseEvent| on_toggle.emit(id))
    };

    // The button sits inside the tile, so stop the click reaching the tile
    // handler and toggling twice.
    let toggle_button = {
        let on_toggle = on_toggle.clone();
        let id = item.id;
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_toggle.emit(id);
        })
    };

    html! {
        <div class={classes!("content-tile", expanded.then(|| "expanded"))} onclick={toggle_tile}>
            <div class="tile-body">
                <div class="tile-top">
                    <div class="tile-icon-wrap">{ icon(item.icon) }</div>
                    <button
                        class={classes!("tile-toggle", expanded.then(|| "rotated"))}
                        onclick={toggle_button}
                        aria-label={if expanded { "Collapse details" } else { "Expand details" }}
                    >
                        <svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 6v6m0 0v6m0-6h6m-6 0H6" />
                        </svg>
                    </button>
                </div>
                <h3 class="tile-title">{ item.title }</h3>
                <p class="tile-description">{ item.description }</p>
                if expanded {
                    <div class="tile-details">
                        <h4>{ *heading }</h4>
                        <ul class={classes!("detail-list", item.wide_details().then(|| "two-columns"))}>
                            { for item.details.iter().map(|detail| html! {
                                <li>
                                    <svg class="detail-check" width="20" height="20" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 13l4 4L19 7" />
                                    </svg>
                                    <span>{ *detail }</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                }
            </div>
        </div>
    }
}
