use yew::prelude::*;

use crate::config;

pub const BOOKING_TITLE: &str = "Book a Consultation";

fn default_booking_url() -> AttrValue {
    AttrValue::from(config::booking_url())
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_else(default_booking_url)]
    pub src: AttrValue,
}

/// Overlay hosting the external scheduling page. Renders nothing while closed.
#[function_component(BookingModal)]
pub fn booking_modal(props: &BookingModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal-content">
                <button class="modal-close" onclick={close} aria-label="Close">
                    {"×"}
                </button>
                <div class="modal-frame-wrap">
                    <iframe
                        id="calendly-link"
                        src={props.src.clone()}
                        width="100%"
                        height="100%"
                        frameborder="0"
                        allow="camera; microphone; fullscreen"
                        title={BOOKING_TITLE}
                        class="booking-frame"
                        style="min-height: 700px; border: none;"
                    />
                </div>
            </div>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(20, 20, 30, 0.10);
                }
                .modal-content {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    width: 100%;
                    max-width: 64rem;
                    height: 90vh;
                    background: #111827;
                    border-radius: 0.5rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                }
                .modal-close {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    z-index: 10;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    color: #6b7280;
                    cursor: pointer;
                }
                .modal-close:hover {
                    color: #d1d5db;
                }
                .modal-frame-wrap {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                }
                .booking-frame {
                    border-bottom-left-radius: 0.5rem;
                    border-bottom-right-radius: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}
