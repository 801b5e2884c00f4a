use chrono::Datelike;
use web_sys::{HtmlInputElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::contact_form::is_valid_email;
use crate::content::FOOTER_GROUPS;

const SOCIAL_LINKS: &[(&str, &str, &str)] = &[
    ("#twitter", "Twitter", "𝕏"),
    ("#linkedin", "LinkedIn", "in"),
    ("#facebook", "Facebook", "f"),
    ("#instagram", "Instagram", "◎"),
];

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Clone, PartialEq)]
enum Newsletter {
    Editing,
    Invalid,
    Subscribed,
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let email = use_state(String::new);
    let newsletter = use_state(|| Newsletter::Editing);
    let year = chrono::Local::now().year();

    let on_email_input = {
        let email = email.clone();
        let newsletter = newsletter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
            if *newsletter == Newsletter::Invalid {
                newsletter.set(Newsletter::Editing);
            }
        })
    };

    // Nothing is sent anywhere; the confirmation is local only.
    let on_subscribe = {
        let email = email.clone();
        let newsletter = newsletter.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if is_valid_email(&email) {
                log::info!("newsletter signup accepted");
                email.set(String::new());
                newsletter.set(Newsletter::Subscribed);
            } else {
                newsletter.set(Newsletter::Invalid);
            }
        })
    };

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <a href="/" class="brand">
                        <div class="brand-mark">{"X"}</div>
                        <span class="brand-name">{"Xenetron"}</span>
                    </a>
                    <p class="footer-blurb">
                        {"Empowering businesses through AI-driven digital transformation. We build intelligent solutions that drive innovation and efficiency."}
                    </p>
                    <div class="social-links">
                        { for SOCIAL_LINKS.iter().map(|(href, label, glyph)| html! {
                            <a href={*href} aria-label={*label} class="social-link">{*glyph}</a>
                        }) }
                    </div>

                    <h3>{"Subscribe to our newsletter"}</h3>
                    {
                        match *newsletter {
                            Newsletter::Subscribed => html! {
                                <p class="newsletter-thanks">{"Thanks for subscribing!"}</p>
                            },
                            ref state => html! {
                                <form class="newsletter-form" onsubmit={on_subscribe}>
                                    <input
                                        type="email"
                                        placeholder="Your email address"
                                        value={(*email).clone()}
                                        oninput={on_email_input}
                                    />
                                    <button type="submit" aria-label="Subscribe">{"✉"}</button>
                                    {
                                        if *state == Newsletter::Invalid {
                                            html! { <div class="field-error">{"Please enter a valid email address"}</div> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </form>
                            },
                        }
                    }
                </div>

                { for FOOTER_GROUPS.iter().map(|group| html! {
                    <div class="footer-group">
                        <h3>{group.title}</h3>
                        <ul>
                            { for group.links.iter().map(|(name, href)| html! {
                                <li><a href={*href}>{*name}</a></li>
                            }) }
                        </ul>
                    </div>
                }) }
            </div>

            <div class="container footer-bottom">
                <span>{format!("© {} Xenetron. All rights reserved.", year)}</span>
                <button class="scroll-top" aria-label="Scroll to top" onclick={Callback::from(|_| scroll_to_top())}>
                    {"↑"}
                </button>
            </div>
        </footer>
    }
}
