use yew::prelude::*;

use crate::reveal::{reveal_style, Entrance};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub badge: AttrValue,
    pub title: AttrValue,
    /// Second line rendered with the accent gradient.
    pub highlight: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub visible: bool,
    #[prop_or(700)]
    pub duration_ms: u32,
}

/// Badge, two-line title and subtitle shared by every page section.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading" style={reveal_style(props.visible, Entrance::Rise(20), props.duration_ms, 0)}>
            <div class="section-badge">{&props.badge}</div>
            <h2>
                {&props.title}
                <span class="gradient-text block">{&props.highlight}</span>
            </h2>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
