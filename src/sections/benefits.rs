use yew::prelude::*;

use crate::content::BENEFITS;
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

#[function_component(BenefitsBanner)]
pub fn benefits_banner() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::ONCE_INSET);

    html! {
        <section class="benefits-banner">
            <div class="container">
                <div ref={node} class="benefits-grid">
                    { for BENEFITS.iter().enumerate().map(|(i, benefit)| html! {
                        <div
                            class="benefit-card"
                            data-hover="true"
                            style={reveal_style(visible, Entrance::Rise(15), 500, i as u32 * 150)}
                        >
                            <div class="benefit-top">
                                <span class="benefit-icon">{benefit.icon}</span>
                                <span class="benefit-arrow">{"↗"}</span>
                            </div>
                            <h3>{benefit.title}</h3>
                            <p>{benefit.description}</p>
                        </div>
                    }) }
                </div>

                <div class="trust-line" style={reveal_style(visible, Entrance::Fade, 500, 600)}>
                    <p>
                        {"Join "}<span class="accent-text">{"500+ businesses"}</span>
                        {" that trust Xenetron for their digital transformation journey"}
                    </p>
                    <div class="trust-pulses">
                        { for (1..=5).map(|n: u32| html! {
                            <div
                                class="trust-pulse"
                                style={format!("animation: pulse 3s ease-in-out {}ms infinite alternate;", n * 500)}
                            />
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
