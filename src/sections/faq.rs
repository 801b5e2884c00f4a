use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{search_faq, toggle_open, SectionId};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

/// "implementation" -> "Implementation".
fn category_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
    category: AttrValue,
    open: bool,
    on_toggle: Callback<()>,
    delay_ms: u32,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div
            class={classes!("faq-item", "fade-in", props.open.then(|| "open"))}
            style={format!("animation-delay: {}ms;", props.delay_ms)}
        >
            <button class="faq-question" onclick={toggle} aria-expanded={props.open.to_string()}>
                <span class="question-text">{&props.question}</span>
                <span class="tag tag-muted">{category_label(&props.category)}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{&props.answer}</p>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::LIVE);
    let search = use_state(String::new);
    let open = use_state(|| None::<u32>);

    let oninput = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
        })
    };

    let entries = search_faq(&search);

    html! {
        <section id={SectionId::Faq.as_str()} class="faq">
            <div ref={node} class="container">
                <SectionHeading
                    badge="FAQ"
                    title="Frequently Asked"
                    highlight="Questions"
                    subtitle="Find answers to common questions about our services, implementation process, and technology."
                    {visible}
                    duration_ms={800}
                />

                <div class="faq-search" style={reveal_style(visible, Entrance::Rise(20), 600, 200)}>
                    <span class="faq-search-icon">{"⚲"}</span>
                    <input
                        type="text"
                        placeholder="Search for questions..."
                        value={(*search).clone()}
                        {oninput}
                    />
                </div>

                <div class="faq-list" style={reveal_style(visible, Entrance::Fade, 800, 400)}>
                    {
                        if entries.is_empty() {
                            html! {
                                <p class="faq-empty muted">
                                    {format!("No results found for \"{}\". Please try a different search term.", *search)}
                                </p>
                            }
                        } else {
                            html! {
                                <>
                                { for entries.iter().enumerate().map(|(i, entry)| {
                                    let on_toggle = {
                                        let open = open.clone();
                                        let id = entry.id;
                                        Callback::from(move |_| open.set(toggle_open(*open, id)))
                                    };
                                    html! {
                                        <FaqItem
                                            key={entry.id}
                                            question={entry.question}
                                            answer={entry.answer}
                                            category={entry.category}
                                            open={*open == Some(entry.id)}
                                            {on_toggle}
                                            delay_ms={i as u32 * 100}
                                        />
                                    }
                                }) }
                                </>
                            }
                        }
                    }
                </div>

                <div class="faq-more" style={reveal_style(visible, Entrance::Rise(20), 800, 600)}>
                    <h3>{"Still have questions?"}</h3>
                    <p class="muted">
                        {"Our team is here to help. Contact us for personalized assistance with your specific needs."}
                    </p>
                    <a href={SectionId::Contact.href()} class="solid-link">{"Contact Us"}</a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQ_ENTRIES;

    #[test]
    fn category_tags_are_capitalised() {
        assert_eq!(category_label("security"), "Security");
        assert_eq!(category_label(""), "");
        assert!(FAQ_ENTRIES
            .iter()
            .all(|entry| category_label(entry.category).starts_with(char::is_uppercase)));
    }
}
