use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::carousel::{Carousel, CarouselEvent, Phase};
use crate::components::section_heading::SectionHeading;
use crate::config;
use crate::content::{SectionId, CLIENT_LOGOS, MAX_RATING, TESTIMONIALS};
use crate::reveal::{reveal_style, use_reveal, Entrance, RevealOptions};

/// Filled and empty stars for a rating, clamped to the scale.
fn stars(rating: u8) -> (u8, u8) {
    let filled = rating.min(MAX_RATING);
    (filled, MAX_RATING - filled)
}

/// Callback for any DOM event that always feeds the same carousel event.
fn relay<E: 'static>(sink: Callback<CarouselEvent>, event: CarouselEvent) -> Callback<E> {
    Callback::from(move |_: E| sink.emit(event))
}

fn phase_class(phase: Phase) -> &'static str {
    match phase {
        Phase::Autoplay => "playing",
        Phase::Paused => "paused",
        Phase::Dragging { .. } => "dragging",
    }
}

fn track_style(index: usize, offset: i32, dragging: bool) -> String {
    let transition = if dragging {
        "none"
    } else {
        "transform 0.5s ease-out"
    };
    format!(
        "transform: translateX(calc(-{}% + {}px)); transition: {};",
        index * 100,
        offset,
        transition
    )
}

#[function_component(TestimonialsSection)]
pub fn testimonials_section() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealOptions::ONCE);
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    // Restarted on every slide change so a manual jump gets a full interval.
    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |(autoplaying, _index)| {
                let interval = autoplaying.then(|| {
                    Interval::new(config::AUTOPLAY_INTERVAL_MS, move || {
                        dispatcher.dispatch(CarouselEvent::Tick)
                    })
                });
                move || drop(interval)
            },
            (carousel.is_autoplaying(), carousel.index()),
        );
    }

    let sink = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |event: CarouselEvent| dispatcher.dispatch(event))
    };

    let onpointerdown = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |e: PointerEvent| {
            dispatcher.dispatch(CarouselEvent::PointerDown(e.client_x()))
        })
    };
    let onpointermove = {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |e: PointerEvent| {
            dispatcher.dispatch(CarouselEvent::PointerMove(e.client_x()))
        })
    };

    let dragging = carousel.is_dragging();

    html! {
        <section id={SectionId::Testimonials.as_str()} class="testimonials">
            <div ref={node} class="container">
                <SectionHeading
                    badge="Client Success Stories"
                    title="What Our"
                    highlight="Clients Say"
                    subtitle="Discover how Xenetron has helped businesses across various industries achieve their digital transformation goals through innovative AI solutions."
                    {visible}
                />

                <div class={classes!("carousel", phase_class(carousel.phase()))} style={reveal_style(visible, Entrance::Rise(20), 600, 200)}>
                    <div
                        class={classes!("carousel-viewport", dragging.then(|| "grabbing"))}
                        {onpointerdown}
                        {onpointermove}
                        onpointerup={relay::<PointerEvent>(sink.clone(), CarouselEvent::PointerUp)}
                        onpointerleave={relay::<PointerEvent>(sink.clone(), CarouselEvent::PointerLeave)}
                    >
                        <div
                            class="carousel-track"
                            style={track_style(carousel.index(), carousel.drag_offset(), dragging)}
                        >
                            { for TESTIMONIALS.iter().map(|t| {
                                let (filled, empty) = stars(t.rating);
                                html! {
                                    <div key={t.id} class="carousel-slide">
                                        <div class="testimonial-card">
                                            <div class="testimonial-quote">{"❝"}</div>
                                            <div class="testimonial-head">
                                                <div class="avatar" style={format!("background: {};", t.avatar_gradient)}>
                                                    {t.avatar}
                                                </div>
                                                <div>
                                                    <h4>{t.name}</h4>
                                                    <p class="muted">{t.position}</p>
                                                    <span class="tag">{t.industry}</span>
                                                </div>
                                            </div>
                                            <div class="stars" aria-label={format!("{} out of {}", filled, MAX_RATING)}>
                                                { for (0..filled).map(|_| html! { <span class="star filled">{"★"}</span> }) }
                                                { for (0..empty).map(|_| html! { <span class="star">{"☆"}</span> }) }
                                            </div>
                                            <p class="testimonial-content">{t.content}</p>
                                            <div class="testimonial-highlight">
                                                <span class="accent-text">{"Key result: "}</span>{t.highlight}
                                            </div>
                                        </div>
                                    </div>
                                }
                            }) }
                        </div>
                    </div>

                    <div
                        class="carousel-controls"
                        onmouseenter={relay::<MouseEvent>(sink.clone(), CarouselEvent::HoverControls(true))}
                        onmouseleave={relay::<MouseEvent>(sink.clone(), CarouselEvent::HoverControls(false))}
                    >
                        <button class="carousel-arrow" aria-label="Previous testimonial" onclick={relay::<MouseEvent>(sink.clone(), CarouselEvent::Previous)}>
                            {"‹"}
                        </button>
                        <div class="carousel-dots">
                            { for (0..carousel.len()).map(|i| html! {
                                <button
                                    class={classes!("carousel-dot", (carousel.index() == i).then(|| "active"))}
                                    aria-label={format!("Go to testimonial {}", i + 1)}
                                    onclick={relay::<MouseEvent>(sink.clone(), CarouselEvent::GoTo(i))}
                                />
                            }) }
                        </div>
                        <button class="carousel-arrow" aria-label="Next testimonial" onclick={relay::<MouseEvent>(sink.clone(), CarouselEvent::Next)}>
                            {"›"}
                        </button>
                        <button class="carousel-autoplay" onclick={relay::<MouseEvent>(sink.clone(), CarouselEvent::ToggleAutoplay)}>
                            { if carousel.autoplay_enabled() { "Pause" } else { "Play" } }
                        </button>
                    </div>

                    <p class="carousel-hint">{"Drag to explore"}</p>
                </div>

                <div class="client-logos" style={reveal_style(visible, Entrance::Fade, 800, 400)}>
                    <p class="muted">{"Trusted by innovative companies worldwide"}</p>
                    <div class="logo-row">
                        { for CLIENT_LOGOS.iter().map(|(name, tint)| html! {
                            <div class="client-logo" style={format!("background: {};", tint)}>{*name}</div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn relay_forwards_its_event_whatever_the_dom_event() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let seen = seen.clone();
            Callback::from(move |event: CarouselEvent| seen.borrow_mut().push(event))
        };

        // Pointer and mouse handlers come from the same helper.
        let _on_pointer: Callback<PointerEvent> = relay(sink.clone(), CarouselEvent::PointerUp);
        let _on_click: Callback<MouseEvent> = relay(sink.clone(), CarouselEvent::Next);

        let next = relay::<()>(sink.clone(), CarouselEvent::Next);
        let go_to = relay::<()>(sink, CarouselEvent::GoTo(2));
        next.emit(());
        go_to.emit(());
        next.emit(());

        assert_eq!(
            *seen.borrow(),
            vec![CarouselEvent::Next, CarouselEvent::GoTo(2), CarouselEvent::Next]
        );
    }

    #[test]
    fn phase_class_tracks_the_state_machine() {
        let mut carousel = Carousel::new(3);
        assert_eq!(phase_class(carousel.phase()), "playing");
        carousel.apply(CarouselEvent::HoverControls(true));
        assert_eq!(phase_class(carousel.phase()), "paused");
        carousel.apply(CarouselEvent::PointerDown(10));
        assert_eq!(phase_class(carousel.phase()), "dragging");
    }

    #[test]
    fn stars_fill_up_to_the_rating() {
        assert_eq!(stars(4), (4, 1));
        assert_eq!(stars(5), (5, 0));
        assert_eq!(stars(9), (5, 0));
    }

    #[test]
    fn track_follows_the_finger_without_easing() {
        assert_eq!(
            track_style(2, -40, true),
            "transform: translateX(calc(-200% + -40px)); transition: none;"
        );
        assert!(track_style(0, 0, false).ends_with("transition: transform 0.5s ease-out;"));
    }
}
