use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::config;
use crate::content::{SectionId, NAV_LINKS};

fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLL_THRESHOLD
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let sync = {
                let window = window.clone();
                move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(is_past_threshold(scroll_y));
                }
            };
            // A reload can restore a scrolled position without firing "scroll".
            sync();
            let scroll_callback = Closure::wrap(Box::new(sync) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("could not watch scroll position for the header");
                }
            }

            move || {
                if let Some(window) = window {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links keep their default so the browser still jumps to the anchor.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container header-content">
                <a href="/" class="brand">
                    <div class="brand-logo">
                        <img src="/assets/logo.png" alt="Company Logo" width="48" height="48" />
                    </div>
                    <span class="brand-name">{"Xenetron"}</span>
                </a>

                <nav class="desktop-nav">
                    { for NAV_LINKS.iter().enumerate().map(|(i, link)| html! {
                        <a
                            href={link.target.href()}
                            class="nav-link"
                            style={format!("animation-delay: {}ms;", i * 100)}
                        >
                            {link.label}
                            <span class="nav-underline"></span>
                        </a>
                    }) }
                </nav>

                <div class="header-ctas">
                    <a href={SectionId::Contact.href()} class="nav-demo-link">{"Book a Demo"}</a>
                    <Button href={SectionId::Pricing.href()} size={ButtonSize::Sm}>
                        {"Get Started"}
                    </Button>
                </div>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    onclick={toggle_menu}
                >
                    <span class="sr-only">{"Open menu"}</span>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                <nav class="container mobile-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.target.href()} class="nav-link" onclick={close_menu.clone()}>
                            {link.label}
                        </a>
                    }) }
                    <div class="mobile-ctas">
                        <Button
                            href={SectionId::Contact.href()}
                            variant={ButtonVariant::Outline}
                            onclick={close_menu.clone()}
                        >
                            {"Book a Demo"}
                        </Button>
                        <Button href={SectionId::Pricing.href()} onclick={close_menu.clone()}>
                            {"Get Started"}
                        </Button>
                    </div>
                </nav>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_only_past_threshold() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(50.0));
        assert!(is_past_threshold(50.5));
        assert!(is_past_threshold(1200.0));
    }
}
