use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::section_heading::SectionHeading;
use crate::content::{discount_percentage, BillingCycle, SectionId, PRICING_PLANS};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

/// The annual toggle advertises the saving of the highlighted tier.
fn advertised_discount() -> u32 {
    PRICING_PLANS
        .iter()
        .find(|plan| plan.popular)
        .map(|plan| discount_percentage(plan.monthly, plan.annually))
        .unwrap_or(0)
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::LIVE);
    let cycle = use_state(BillingCycle::default);

    let set_cycle = |target: BillingCycle| {
        let cycle = cycle.clone();
        Callback::from(move |_| cycle.set(target))
    };

    html! {
        <section id={SectionId::Pricing.as_str()} class="pricing">
            <div ref={node} class="container">
                <SectionHeading
                    badge="Pricing"
                    title="Transparent Plans for Your"
                    highlight="Digital Transformation"
                    subtitle="Choose the plan that suits your business needs and scale as you grow. All plans include our core AI-powered features."
                    {visible}
                    duration_ms={800}
                />

                <div class="billing-toggle" style={reveal_style(visible, Entrance::Rise(20), 800, 0)}>
                    <button
                        class={classes!("billing-option", (*cycle == BillingCycle::Monthly).then(|| "active"))}
                        onclick={set_cycle(BillingCycle::Monthly)}
                    >
                        {"Monthly"}
                    </button>
                    <button
                        class={classes!("billing-option", (*cycle == BillingCycle::Annually).then(|| "active"))}
                        onclick={set_cycle(BillingCycle::Annually)}
                    >
                        {"Annually "}
                        <span class="billing-save">{format!("(Save {}%)", advertised_discount())}</span>
                    </button>
                </div>

                <div class="pricing-grid">
                    { for PRICING_PLANS.iter().enumerate().map(|(i, plan)| html! {
                        <div
                            class={classes!("plan-card", plan.popular.then(|| "popular"))}
                            style={reveal_style(visible, Entrance::Rise(20), 600, i as u32 * 200)}
                        >
                            {
                                if plan.popular {
                                    html! { <div class="plan-ribbon">{"Most Popular"}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <div class="plan-body">
                                <h3>{plan.name}</h3>
                                <p class="plan-description">{plan.description}</p>
                                <div class="plan-price">
                                    <span class="plan-amount">{format!("${}", plan.price(*cycle))}</span>
                                    <span class="plan-period">{"/ month"}</span>
                                    {
                                        if *cycle == BillingCycle::Annually {
                                            html! {
                                                <div class="plan-billed">
                                                    {format!("Billed annually (${}/year)", plan.yearly_total())}
                                                </div>
                                            }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </div>
                                <Button
                                    href={SectionId::Contact.href()}
                                    variant={if plan.popular { ButtonVariant::Primary } else { ButtonVariant::Outline }}
                                    class="plan-cta"
                                >
                                    {plan.cta}
                                </Button>
                                <ul class="check-list">
                                    { for plan.features.iter().map(|f| html! {
                                        <li><span class="check">{"✓"}</span>{*f}</li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    }) }
                </div>

                <p class="pricing-note" style={reveal_style(visible, Entrance::Fade, 600, 600)}>
                    {"Need a custom plan? "}
                    <a href={SectionId::Contact.href()}>{"Contact us"}</a>
                    {" for enterprise pricing and tailored solutions."}
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annual_toggle_advertises_professional_saving() {
        assert_eq!(advertised_discount(), 10);
    }
}
