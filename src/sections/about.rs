use yew::prelude::*;

use crate::components::button::Button;
use crate::content::{SectionId, STATS};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

const ORBIT_LETTERS: [&str; 6] = ["N", "E", "T", "R", "O", "TN"];
const ORBIT_RADIUS: f64 = 140.0;

/// Position of an orbiting letter around the central mark.
fn orbit_transform(angle_deg: u32) -> String {
    format!("rotate({angle_deg}deg) translate({ORBIT_RADIUS}px) rotate(-{angle_deg}deg)")
}

/// End point of a dashed spoke from the centre (200, 150) of the 400x300 canvas.
fn spoke_end(angle_deg: u32) -> (f64, f64) {
    let radians = f64::from(angle_deg).to_radians();
    (radians.cos() * ORBIT_RADIUS + 200.0, radians.sin() * ORBIT_RADIUS + 150.0)
}

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::ONCE_INSET);

    html! {
        <section id={SectionId::About.as_str()} class="about">
            <div ref={node} class="container about-grid">
                <div class="about-visual" style={reveal_style(visible, Entrance::FromLeft(30), 700, 0)}>
                    <div class="orbit">
                        <div class="orbit-dots">
                            { for (0..40).map(|i: u32| html! {
                                <span class="orbit-dot" style={format!("animation-delay: {}ms;", (i % 5) * 400)} />
                            }) }
                        </div>
                        <div class="orbit-core"><span>{"X"}</span></div>
                        { for [45u32, 135, 225, 315, 405, 495].iter().zip(ORBIT_LETTERS).enumerate().map(|(i, (angle, letter))| html! {
                            <div
                                class="orbit-letter"
                                style={format!("transform: {}; animation-delay: {}ms;", orbit_transform(*angle), i * 700)}
                            >
                                {letter}
                            </div>
                        }) }
                        <svg class="orbit-spokes" xmlns="http://www.w3.org/2000/svg">
                            { for [45u32, 135, 225, 315].iter().map(|angle| {
                                let (x2, y2) = spoke_end(*angle);
                                html! {
                                    <line
                                        x1="200" y1="150"
                                        x2={format!("{x2:.1}")} y2={format!("{y2:.1}")}
                                        stroke="#ff3366" stroke-width="1.5" stroke-opacity="0.3" stroke-dasharray="5,5"
                                    />
                                }
                            }) }
                        </svg>
                    </div>

                    <div class="stats-grid">
                        { for STATS.iter().enumerate().map(|(i, (number, label))| html! {
                            <div class="stat-card" style={reveal_style(visible, Entrance::Rise(15), 500, 300 + i as u32 * 100)}>
                                <p class="stat-number gradient-text">{*number}</p>
                                <p class="stat-label">{*label}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="about-copy" style={reveal_style(visible, Entrance::FromRight(30), 700, 200)}>
                    <div class="section-badge">{"About Xenetron"}</div>
                    <h2>
                        {"Pioneering the Future of"}
                        <span class="gradient-text block">{"Digital Transformation"}</span>
                    </h2>
                    <p>
                        {"Xenetron is a forward-thinking software technology service provider dedicated to revolutionizing the digital landscape. We specialize in building and deploying cutting-edge SaaS applications that harness the power of Artificial Intelligence to streamline business processes, enhance decision-making, and drive innovation."}
                    </p>
                    <blockquote class="mission">
                        {"\"Our mission is to empower businesses by integrating AI-driven solutions that simplify operations, unlock new growth opportunities, and catalyze digital transformation.\""}
                    </blockquote>
                    <h3>{"Our Vision"}</h3>
                    <p>
                        {"To be recognized as a global leader in innovative digital solutions, pioneering the next generation of AI-powered applications that redefine how companies operate and succeed in a rapidly evolving technological world."}
                    </p>
                    <Button href={SectionId::Services.href()}>{"Explore Our Services"}</Button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spokes_start_at_canvas_centre() {
        let (x, y) = spoke_end(45);
        assert!((x - (200.0 + 140.0 * std::f64::consts::FRAC_1_SQRT_2)).abs() < 1e-9);
        assert!((y - (150.0 + 140.0 * std::f64::consts::FRAC_1_SQRT_2)).abs() < 1e-9);
        assert_eq!(orbit_transform(90), "rotate(90deg) translate(140px) rotate(-90deg)");
    }
}
