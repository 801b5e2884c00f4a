use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::section_heading::SectionHeading;
use crate::content::{blog_categories, display_date, posts_in, SectionId};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

#[function_component(BlogSection)]
pub fn blog_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::LIVE);
    let category = use_state(|| None::<&'static str>);

    let filters: Vec<(Option<&'static str>, &'static str)> = std::iter::once((None, "All"))
        .chain(blog_categories().into_iter().map(|c| (Some(c), c)))
        .collect();
    let posts = posts_in(*category);

    html! {
        <section id={SectionId::Blog.as_str()} class="blog">
            <div ref={node} class="container">
                <SectionHeading
                    badge="Our Blog"
                    title="Latest Insights &"
                    highlight="Industry Trends"
                    subtitle="Stay updated with the latest developments in AI, machine learning, and digital transformation through our expert articles and insights."
                    {visible}
                    duration_ms={800}
                />

                <div class="filter-row" style={reveal_style(visible, Entrance::Rise(20), 600, 200)}>
                    { for filters.into_iter().map(|(value, label)| {
                        let onclick = {
                            let category = category.clone();
                            Callback::from(move |_| category.set(value))
                        };
                        html! {
                            <button class={classes!("filter-pill", (*category == value).then(|| "active"))} {onclick}>
                                {label}
                            </button>
                        }
                    }) }
                </div>

                <div class="blog-grid">
                    { for posts.iter().enumerate().map(|(i, post)| html! {
                        <article
                            key={post.id}
                            class="blog-card"
                            data-hover="true"
                            style={reveal_style(visible, Entrance::Rise(20), 600, i as u32 * 150)}
                        >
                            <div class="blog-cover">
                                <span class="blog-badge">{post.badge}</span>
                                <span class="tag">{post.category}</span>
                            </div>
                            <div class="blog-body">
                                <div class="blog-meta muted">
                                    <span>{display_date(post.published)}</span>
                                    <span>{"•"}</span>
                                    <span>{post.read_time}</span>
                                </div>
                                <h3>{post.title}</h3>
                                <p>{post.excerpt}</p>
                                <div class="blog-author">
                                    <div class="avatar small">{post.author.chars().next().unwrap_or('X')}</div>
                                    <div>
                                        <p class="author-name">{post.author}</p>
                                        <p class="muted">{post.author_role}</p>
                                    </div>
                                </div>
                                <a href={SectionId::Blog.href()} class="course-link">
                                    {"Read More"}<span>{"→"}</span>
                                </a>
                            </div>
                        </article>
                    }) }
                </div>

                <div class="section-footer-cta" style={reveal_style(visible, Entrance::Fade, 600, 500)}>
                    <Button href={SectionId::Blog.href()} variant={ButtonVariant::Outline}>
                        {"View All Articles"}
                    </Button>
                </div>
            </div>
        </section>
    }
}
