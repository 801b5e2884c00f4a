use yew::prelude::*;

use crate::components::button::Button;
use crate::components::section_heading::SectionHeading;
use crate::content::{teaser, SectionId, SERVICES};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

const CARD_TEASER_CHARS: usize = 60;

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::ONCE);
    let active = use_state(|| 0usize);

    let Some(selected) = SERVICES.get(*active) else {
        return html! {};
    };

    html! {
        <section id={SectionId::Services.as_str()} class="services">
            <div ref={node} class="container">
                <SectionHeading
                    badge="Our Services"
                    title="Comprehensive Solutions for"
                    highlight="Digital Transformation"
                    subtitle="We offer end-to-end services designed to transform your business operations through the power of artificial intelligence and cutting-edge technology."
                    {visible}
                />

                <div class="services-layout">
                    <div class="service-tabs">
                        { for SERVICES.iter().enumerate().map(|(i, service)| {
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_| active.set(i))
                            };
                            html! {
                                <button
                                    class={classes!("service-tab", (*active == i).then(|| "active"))}
                                    style={reveal_style(visible, Entrance::Rise(15), 500, i as u32 * 100)}
                                    {onclick}
                                >
                                    <span class="service-icon">{service.icon}</span>
                                    <span class="service-tab-text">
                                        <h3>{service.title}</h3>
                                        <p>{teaser(service.description, CARD_TEASER_CHARS)}</p>
                                    </span>
                                </button>
                            }
                        }) }
                    </div>

                    // Keyed so the detail pane re-animates on every switch.
                    <div key={*active} class="service-detail fade-in" style={reveal_style(visible, Entrance::FromRight(20), 600, 300)}>
                        <div class="service-detail-header">
                            <span class="service-icon large">{selected.icon}</span>
                            <h3>{selected.title}</h3>
                        </div>
                        <p>{selected.description}</p>
                        <ul class="check-list">
                            { for selected.features.iter().map(|feature| html! {
                                <li><span class="check">{"✓"}</span>{*feature}</li>
                            }) }
                        </ul>
                        <Button href={SectionId::Contact.href()}>
                            {"Learn More"}<span>{"→"}</span>
                        </Button>
                    </div>
                </div>
            </div>
        </section>
    }
}
