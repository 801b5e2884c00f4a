use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::section_heading::SectionHeading;
use crate::content::{SectionId, PRODUCTS};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

fn opens_new_tab(url: &str) -> bool {
    url.starts_with("http")
}

#[function_component(ProductsSection)]
pub fn products_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::ONCE);
    let active = use_state(|| 0usize);

    let Some(product) = PRODUCTS.get(*active) else {
        return html! {};
    };
    let target = opens_new_tab(product.demo_url).then_some("_blank");

    html! {
        <section id={SectionId::Products.as_str()} class="products">
            <div ref={node} class="container">
                <SectionHeading
                    badge="Our Products"
                    title="Innovative Solutions for"
                    highlight="Modern Challenges"
                    subtitle="Discover our suite of AI-powered products designed to solve real problems for educators, developers, and businesses."
                    {visible}
                />

                <div class="product-tabs" style={reveal_style(visible, Entrance::Rise(15), 500, 200)}>
                    { for PRODUCTS.iter().enumerate().map(|(i, p)| {
                        let onclick = {
                            let active = active.clone();
                            Callback::from(move |_| active.set(i))
                        };
                        html! {
                            <button class={classes!("product-tab", (*active == i).then(|| "active"))} {onclick}>
                                {p.name}
                            </button>
                        }
                    }) }
                </div>

                <div key={product.id} class="product-card fade-in" style={reveal_style(visible, Entrance::Rise(20), 600, 300)}>
                    <div class="product-main">
                        <div class="product-title">
                            <img src={product.icon} alt={product.name} width="30" height="30" />
                            <div>
                                <h3>{product.name}</h3>
                                <p class="accent-text">{product.tagline}</p>
                            </div>
                        </div>
                        <p>{product.description}</p>

                        <h4>{"Core Features"}</h4>
                        <ul class="check-list">
                            { for product.core_features.iter().map(|f| html! {
                                <li><span class="check">{"✓"}</span>{*f}</li>
                            }) }
                        </ul>

                        <div class="tag-row">
                            { for product.tech_stack.iter().map(|t| html! { <span class="tag">{*t}</span> }) }
                        </div>

                        <div class="product-ctas">
                            <a href={product.demo_url} class="product-demo" target={target} rel="noopener noreferrer">
                                {product.cta}<span>{"→"}</span>
                            </a>
                            <Button href={product.docs_url} variant={ButtonVariant::Outline}>
                                {"Documentation"}
                            </Button>
                        </div>
                    </div>

                    <div class="product-side">
                        <h4>{"Key Benefits"}</h4>
                        { for product.benefits.iter().map(|b| html! {
                            <div class="product-benefit" data-hover="true">
                                <h5>{b.title}</h5>
                                <p>{b.description}</p>
                            </div>
                        }) }
                        <h4>{"Perfect For"}</h4>
                        <div class="tag-row">
                            { for product.user_types.iter().map(|u| html! { <span class="tag tag-muted">{*u}</span> }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_demos_open_in_new_tab() {
        assert!(opens_new_tab("https://autogradepro.vercel.app/"));
        assert!(!opens_new_tab("#products"));
    }
}
