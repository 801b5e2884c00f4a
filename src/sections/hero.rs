use web_sys::js_sys::Math;
use yew::prelude::*;

use crate::components::button::{Button, ButtonSize, ButtonVariant};
use crate::content::SectionId;

const TITLE: &str = "Empowering Digital Transformation Through AI";
const PARTICLE_COUNT: usize = 50;

#[derive(Clone, PartialEq)]
struct Particle {
    size: f64,
    left: f64,
    top: f64,
    delay: f64,
    duration: f64,
    accent: bool,
}

impl Particle {
    fn random() -> Self {
        Self {
            size: Math::random() * 5.0 + 2.0,
            left: Math::random() * 100.0,
            top: Math::random() * 100.0,
            delay: Math::random() * 5.0,
            duration: Math::random() * 10.0 + 10.0,
            accent: Math::random() > 0.7,
        }
    }

    fn style(&self) -> String {
        format!(
            "width: {size:.1}px; height: {size:.1}px; left: {left:.1}%; top: {top:.1}%; \
             animation: float {duration:.1}s ease-in-out {delay:.1}s infinite alternate, \
             fadeIn 2s ease-in-out {delay:.1}s forwards;",
            size = self.size,
            left = self.left,
            top = self.top,
            duration = self.duration,
            delay = self.delay,
        )
    }
}

/// The fourth and fifth title words carry the accent gradient.
fn is_highlighted_word(index: usize) -> bool {
    index == 3 || index == 4
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let particles = use_memo(|_| (0..PARTICLE_COUNT).map(|_| Particle::random()).collect::<Vec<_>>(), ());

    html! {
        <section id={SectionId::Home.as_str()} class="hero">
            <div class="hero-particles">
                { for particles.iter().map(|p| html! {
                    <div
                        class={classes!("particle", if p.accent { "particle-accent" } else { "particle-plain" })}
                        style={p.style()}
                    />
                }) }
            </div>
            <div class="hero-glow"></div>

            <div class="container hero-grid">
                <div class="hero-copy">
                    <p class="hero-kicker fade-in">{"XENETRON"}</p>
                    <h1>
                        { for TITLE.split(' ').enumerate().map(|(i, word)| html! {
                            <span
                                class={classes!("hero-word", is_highlighted_word(i).then(|| "gradient-text"))}
                                style={format!("animation-delay: {}ms;", 300 + i * 100)}
                            >
                                {word}{" "}
                            </span>
                        }) }
                    </h1>
                    <p class="hero-subtitle fade-in" style="animation-delay: 900ms;">
                        {"We build intelligent SaaS applications that revolutionize business operations, streamline processes, and drive innovation through cutting-edge AI technology."}
                    </p>
                    <div class="hero-ctas fade-in" style="animation-delay: 1100ms;">
                        <Button href={SectionId::Services.href()} size={ButtonSize::Lg}>{"Explore Our Services"}</Button>
                        <Button href={SectionId::Contact.href()} variant={ButtonVariant::Secondary} size={ButtonSize::Lg}>
                            {"Schedule a Consultation"}
                        </Button>
                    </div>
                </div>

                <div class="hero-visual fade-in" style="animation-delay: 600ms;">
                    <div class="code-window">
                        <div class="code-window-bar">
                            <span class="dot red"></span>
                            <span class="dot amber"></span>
                            <span class="dot green"></span>
                            <span class="code-file">{"ai_transformation.py"}</span>
                        </div>
                        <pre><code>
                            <span class="kw">{"import"}</span>{" xenetron.ai "}<span class="kw">{"as"}</span>{" xai\n\n"}
                            <span class="comment">{"# Initialize AI transformation\n"}</span>
                            {"model = xai.Model("}<span class="str">{"'business_intelligence'"}</span>{")\n"}
                            {"result = model.transform(data)\n\n"}
                            <span class="str">{"→ Transformation complete: 98.5% efficiency"}</span>
                        </code></pre>
                    </div>
                    <div class="metric-card metric-speed">
                        <p class="metric-label">{"Processing Speed"}</p>
                        <p class="metric-value gradient-text">{"2.7x Faster"}</p>
                    </div>
                    <div class="metric-card metric-cost">
                        <p class="metric-label">{"Cost Reduction"}</p>
                        <p class="metric-value gradient-text">{"32% Lower"}</p>
                    </div>
                </div>
            </div>

            <a href={SectionId::About.href()} class="scroll-cue">
                <span>{"Scroll to explore"}</span>
                <span class="scroll-cue-arrow">{"↓"}</span>
            </a>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlights_last_two_words() {
        let highlighted: Vec<&str> = TITLE
            .split(' ')
            .enumerate()
            .filter(|(i, _)| is_highlighted_word(*i))
            .map(|(_, w)| w)
            .collect();
        assert_eq!(highlighted, vec!["Through", "AI"]);
    }
}
