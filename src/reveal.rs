//! Reveal-on-scroll: a boolean "is visible" signal per observed element.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be inside the viewport.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"-50px 0px"`.
    pub root_margin: &'static str,
    /// Latch on the first sighting instead of tracking live visibility.
    pub once: bool,
}

impl RevealOptions {
    pub const ONCE: RevealOptions = RevealOptions {
        threshold: 0.1,
        root_margin: "0px",
        once: true,
    };

    /// Latches slightly before the element is fully on screen.
    pub const ONCE_INSET: RevealOptions = RevealOptions {
        threshold: 0.1,
        root_margin: "-50px 0px",
        once: true,
    };

    pub const LIVE: RevealOptions = RevealOptions {
        threshold: 0.1,
        root_margin: "0px",
        once: false,
    };
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::ONCE
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    Observed(bool),
    /// No way to observe visibility; show the content.
    Unsupported,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealState {
    once: bool,
    visible: bool,
}

impl RevealState {
    pub fn new(once: bool) -> Self {
        Self { once, visible: false }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn apply(&mut self, action: RevealAction) {
        match action {
            RevealAction::Unsupported => self.visible = true,
            RevealAction::Observed(intersecting) => {
                if !(self.once && self.visible) {
                    self.visible = intersecting;
                }
            }
        }
    }
}

impl Reducible for RevealState {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Direction an element slides in from while revealing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entrance {
    Rise(u32),
    FromLeft(u32),
    FromRight(u32),
    Fade,
}

/// Inline style for the rest pose (hidden) or the animated pose (visible).
pub fn reveal_style(visible: bool, entrance: Entrance, duration_ms: u32, delay_ms: u32) -> String {
    let transform = if visible {
        "none".to_string()
    } else {
        match entrance {
            Entrance::Rise(px) => format!("translateY({px}px)"),
            Entrance::FromLeft(px) => format!("translateX(-{px}px)"),
            Entrance::FromRight(px) => format!("translateX({px}px)"),
            Entrance::Fade => "none".to_string(),
        }
    };
    let opacity = if visible { 1 } else { 0 };
    format!(
        "opacity: {opacity}; transform: {transform}; \
         transition: opacity {duration_ms}ms ease-out {delay_ms}ms, transform {duration_ms}ms ease-out {delay_ms}ms;"
    )
}

type ObserverHandle = (IntersectionObserver, Closure<dyn FnMut(js_sys::Array)>);

fn observe(
    node: &NodeRef,
    options: RevealOptions,
    dispatcher: UseReducerDispatcher<RevealState>,
) -> Option<ObserverHandle> {
    let supported = web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false);
    let Some(element) = node.cast::<Element>().filter(|_| supported) else {
        log::warn!("IntersectionObserver unavailable, showing content without reveal");
        dispatcher.dispatch(RevealAction::Unsupported);
        return None;
    };

    let callback = {
        let dispatcher = dispatcher.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                dispatcher.dispatch(RevealAction::Observed(entry.is_intersecting()));
            }
        }) as Box<dyn FnMut(js_sys::Array)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some((observer, callback))
        }
        Err(err) => {
            log::warn!("failed to create IntersectionObserver: {:?}", err);
            dispatcher.dispatch(RevealAction::Unsupported);
            None
        }
    }
}

/// Tracks whether the element behind `node` has scrolled into view.
#[hook]
pub fn use_reveal(node: NodeRef, options: RevealOptions) -> bool {
    let state = use_reducer(move || RevealState::new(options.once));

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |(node, options)| {
                let handle = observe(node, *options, dispatcher);
                move || {
                    if let Some((observer, _callback)) = handle {
                        observer.disconnect();
                    }
                }
            },
            (node, options),
        );
    }

    state.visible()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_latches_visible() {
        let mut state = RevealState::new(true);
        state.apply(RevealAction::Observed(false));
        assert!(!state.visible());
        state.apply(RevealAction::Observed(true));
        state.apply(RevealAction::Observed(false));
        assert!(state.visible());
    }

    #[test]
    fn live_follows_every_callback() {
        let mut state = RevealState::new(false);
        let mut seen = Vec::new();
        for intersecting in [true, false, true, true, false] {
            state.apply(RevealAction::Observed(intersecting));
            seen.push(state.visible());
        }
        assert_eq!(seen, vec![true, false, true, true, false]);
    }

    #[test]
    fn unsupported_fails_open() {
        let mut state = RevealState::new(true);
        state.apply(RevealAction::Unsupported);
        assert!(state.visible());
    }

    #[test]
    fn reducer_keeps_same_state_when_unchanged() {
        let state = Rc::new(RevealState::new(true));
        let next = state.clone().reduce(RevealAction::Observed(false));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn rest_pose_is_offset_and_transparent() {
        let style = reveal_style(false, Entrance::Rise(20), 700, 0);
        assert!(style.starts_with("opacity: 0; transform: translateY(20px);"));
        let style = reveal_style(true, Entrance::FromLeft(20), 600, 200);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("600ms ease-out 200ms"));
    }
}
