//! Slide carousel state machine.
//!
//! The carousel is in exactly one of three phases: autoplaying, paused, or
//! being dragged. Every input (timer tick, button press, pointer gesture,
//! hover over the controls) is a [`CarouselEvent`] fed through
//! [`Carousel::apply`]. The Yew side only renders the state and schedules ticks.

use std::rc::Rc;

use yew::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Autoplay,
    Paused,
    Dragging { origin: i32, offset: i32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselEvent {
    Tick,
    Next,
    Previous,
    GoTo(usize),
    PointerDown(i32),
    PointerMove(i32),
    PointerUp,
    /// Pointer left the slide area mid-drag; the drag is dropped.
    PointerLeave,
    HoverControls(bool),
    ToggleAutoplay,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    phase: Phase,
    hovering: bool,
    autoplay_enabled: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            phase: Phase::Autoplay,
            hovering: false,
            autoplay_enabled: true,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// User-facing autoplay switch, independent of hover.
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay_enabled
    }

    /// Whether the interval timer should currently be running.
    pub fn is_autoplaying(&self) -> bool {
        self.phase == Phase::Autoplay
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Transient pixel offset of the track while dragging, 0 otherwise.
    pub fn drag_offset(&self) -> i32 {
        match self.phase {
            Phase::Dragging { offset, .. } => offset,
            _ => 0,
        }
    }

    pub fn apply(&mut self, event: CarouselEvent) {
        if self.len == 0 {
            return;
        }

        match event {
            CarouselEvent::Tick => {
                if self.phase == Phase::Autoplay {
                    self.step_forward();
                    tracing::debug!(index = self.index, "carousel autoplay tick");
                }
            }
            CarouselEvent::Next => self.step_forward(),
            CarouselEvent::Previous => self.step_back(),
            CarouselEvent::GoTo(index) => {
                if index < self.len {
                    self.index = index;
                }
            }
            CarouselEvent::PointerDown(x) => {
                if !self.is_dragging() {
                    self.phase = Phase::Dragging { origin: x, offset: 0 };
                }
            }
            CarouselEvent::PointerMove(x) => {
                if let Phase::Dragging { origin, .. } = self.phase {
                    self.phase = Phase::Dragging {
                        origin,
                        offset: x - origin,
                    };
                }
            }
            CarouselEvent::PointerUp => {
                if let Phase::Dragging { offset, .. } = self.phase {
                    if offset > config::SWIPE_COMMIT_PX {
                        self.step_back();
                    } else if offset < -config::SWIPE_COMMIT_PX {
                        self.step_forward();
                    }
                    tracing::debug!(offset, index = self.index, "carousel drag released");
                    self.phase = self.resting_phase();
                }
            }
            CarouselEvent::PointerLeave => {
                if self.is_dragging() {
                    self.phase = self.resting_phase();
                }
            }
            CarouselEvent::HoverControls(hovering) => {
                self.hovering = hovering;
                self.settle();
            }
            CarouselEvent::ToggleAutoplay => {
                self.autoplay_enabled = !self.autoplay_enabled;
                self.settle();
            }
        }
    }

    fn step_forward(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    fn step_back(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    fn resting_phase(&self) -> Phase {
        if self.autoplay_enabled && !self.hovering {
            Phase::Autoplay
        } else {
            Phase::Paused
        }
    }

    // A drag in progress keeps its phase; hover/toggle take effect on release.
    fn settle(&mut self) {
        if !self.is_dragging() {
            self.phase = self.resting_phase();
        }
    }
}

impl Reducible for Carousel {
    type Action = CarouselEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(carousel: &mut Carousel, from: i32, to: i32) {
        carousel.apply(CarouselEvent::PointerDown(from));
        carousel.apply(CarouselEvent::PointerMove(to));
        carousel.apply(CarouselEvent::PointerUp);
    }

    #[test]
    fn starts_autoplaying_at_first_slide() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.phase(), Phase::Autoplay);
        assert_eq!(carousel.drag_offset(), 0);
    }

    #[test]
    fn index_stays_in_bounds_for_any_navigation() {
        for len in 1..=6 {
            let mut carousel = Carousel::new(len);
            let pattern = [true, true, false, true, false, false, false, true];
            for step in 0..50 {
                let forward = pattern[step % pattern.len()];
                carousel.apply(if forward {
                    CarouselEvent::Next
                } else {
                    CarouselEvent::Previous
                });
                assert!(carousel.index() < len, "len {len} step {step}");
            }
        }
    }

    #[test]
    fn wraps_at_both_ends() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::Previous);
        assert_eq!(carousel.index(), 3);
        carousel.apply(CarouselEvent::Next);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn next_then_previous_round_trips_from_every_index() {
        for start in 0..5 {
            let mut carousel = Carousel::new(5);
            carousel.apply(CarouselEvent::GoTo(start));
            carousel.apply(CarouselEvent::Next);
            carousel.apply(CarouselEvent::Previous);
            assert_eq!(carousel.index(), start);
        }
    }

    #[test]
    fn single_slide_always_stays_at_zero() {
        let mut carousel = Carousel::new(1);
        carousel.apply(CarouselEvent::Next);
        carousel.apply(CarouselEvent::Previous);
        carousel.apply(CarouselEvent::Tick);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_ignores_events() {
        let mut carousel = Carousel::new(0);
        carousel.apply(CarouselEvent::Next);
        carousel.apply(CarouselEvent::Tick);
        carousel.apply(CarouselEvent::PointerDown(10));
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.phase(), Phase::Autoplay);
    }

    #[test]
    fn go_to_out_of_range_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.apply(CarouselEvent::GoTo(2));
        carousel.apply(CarouselEvent::GoTo(3));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn drag_right_past_threshold_goes_back_one() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::GoTo(2));
        drag(&mut carousel, 300, 450);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.drag_offset(), 0);
        assert_eq!(carousel.phase(), Phase::Autoplay);
    }

    #[test]
    fn drag_left_past_threshold_goes_forward_one() {
        let mut carousel = Carousel::new(4);
        drag(&mut carousel, 400, 250);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn short_drags_do_not_change_slide() {
        let mut carousel = Carousel::new(4);
        drag(&mut carousel, 200, 300);
        drag(&mut carousel, 200, 100);
        drag(&mut carousel, 200, 260);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn drag_commits_on_last_pointer_position() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::PointerDown(500));
        carousel.apply(CarouselEvent::PointerMove(300));
        carousel.apply(CarouselEvent::PointerMove(420));
        assert_eq!(carousel.drag_offset(), -80);
        assert_eq!(carousel.index(), 0);
        carousel.apply(CarouselEvent::PointerUp);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn pointer_leave_cancels_drag_without_moving() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::PointerDown(500));
        carousel.apply(CarouselEvent::PointerMove(100));
        carousel.apply(CarouselEvent::PointerLeave);
        assert_eq!(carousel.index(), 0);
        assert!(!carousel.is_dragging());
        carousel.apply(CarouselEvent::PointerUp);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn move_without_pointer_down_is_ignored() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::PointerMove(300));
        assert_eq!(carousel.drag_offset(), 0);
        assert_eq!(carousel.phase(), Phase::Autoplay);
    }

    #[test]
    fn tick_advances_exactly_once_per_tick() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::Tick);
        assert_eq!(carousel.index(), 1);
        carousel.apply(CarouselEvent::Tick);
        carousel.apply(CarouselEvent::Tick);
        assert_eq!(carousel.index(), 3);
        carousel.apply(CarouselEvent::Tick);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn ticks_are_ignored_while_dragging() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::PointerDown(0));
        carousel.apply(CarouselEvent::Tick);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn hovering_controls_pauses_until_leave() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::HoverControls(true));
        assert_eq!(carousel.phase(), Phase::Paused);
        carousel.apply(CarouselEvent::Tick);
        assert_eq!(carousel.index(), 0);

        carousel.apply(CarouselEvent::HoverControls(false));
        assert_eq!(carousel.phase(), Phase::Autoplay);
        carousel.apply(CarouselEvent::Tick);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn manual_navigation_keeps_phase() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::HoverControls(true));
        carousel.apply(CarouselEvent::Next);
        assert_eq!(carousel.phase(), Phase::Paused);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn autoplay_toggle_is_sticky_across_hover() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::ToggleAutoplay);
        assert!(!carousel.autoplay_enabled());
        carousel.apply(CarouselEvent::HoverControls(true));
        carousel.apply(CarouselEvent::HoverControls(false));
        assert_eq!(carousel.phase(), Phase::Paused);

        carousel.apply(CarouselEvent::ToggleAutoplay);
        assert_eq!(carousel.phase(), Phase::Autoplay);
    }

    #[test]
    fn drag_release_returns_to_paused_while_hovering() {
        let mut carousel = Carousel::new(4);
        carousel.apply(CarouselEvent::PointerDown(0));
        carousel.apply(CarouselEvent::HoverControls(true));
        assert!(carousel.is_dragging());
        carousel.apply(CarouselEvent::PointerMove(-150));
        carousel.apply(CarouselEvent::PointerUp);
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.phase(), Phase::Paused);
    }

    #[test]
    fn reducer_applies_events_in_order() {
        let state = Rc::new(Carousel::new(3));
        let state = state.reduce(CarouselEvent::Next);
        let state = state.reduce(CarouselEvent::Next);
        let state = state.reduce(CarouselEvent::Previous);
        assert_eq!(state.index(), 1);
    }
}
