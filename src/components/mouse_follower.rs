use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

const RESTING_SIZE: u32 = 40;
const HOVER_SIZE: u32 = 60;

fn is_interactive(tag_name: &str, inside_hover_zone: bool) -> bool {
    inside_hover_zone || tag_name.eq_ignore_ascii_case("a") || tag_name.eq_ignore_ascii_case("button")
}

fn hovers_interactive(event: &MouseEvent) -> bool {
    let Some(element) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return false;
    };
    let inside_hover_zone = matches!(element.closest("[data-hover]"), Ok(Some(_)));
    is_interactive(&element.tag_name(), inside_hover_zone)
}

/// Accent circle trailing the cursor; grows over links and buttons.
#[function_component(MouseFollower)]
pub fn mouse_follower() -> Html {
    let position = use_state(|| None::<(i32, i32)>);
    let enlarged = use_state(|| false);

    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(Some((e.client_x(), e.client_y())));
        });
    }
    {
        let enlarged = enlarged.clone();
        use_event_with_window("mouseover", move |e: MouseEvent| {
            if hovers_interactive(&e) {
                enlarged.set(true);
            }
        });
    }
    {
        let enlarged = enlarged.clone();
        use_event_with_window("mouseout", move |_: MouseEvent| {
            enlarged.set(false);
        });
    }

    // Nothing to draw until the mouse has moved at least once.
    let Some((x, y)) = *position else {
        return html! {};
    };

    let (size, color) = if *enlarged {
        (HOVER_SIZE, "rgba(255, 51, 102, 0.2)")
    } else {
        (RESTING_SIZE, "rgba(255, 51, 102, 0.5)")
    };

    html! {
        <div
            class="cursor-follower"
            style={format!(
                "left: {x}px; top: {y}px; width: {size}px; height: {size}px; background-color: {color};"
            )}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_buttons_and_hover_zones_are_interactive() {
        assert!(is_interactive("A", false));
        assert!(is_interactive("BUTTON", false));
        assert!(is_interactive("DIV", true));
        assert!(!is_interactive("P", false));
    }
}
