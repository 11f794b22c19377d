//! Slide transition timeline.
//!
//! Every moving property is a [`Track`] on one shared clock. The timeline owns
//! the [`Transition`] it animates, so finishing the clock (or dropping the
//! timeline early) is what hands the animation lock back to the navigator.

use raylib::prelude::*;
use crate::constants::*;
use crate::navigator::{Direction, Transition};

pub type Easing = fn(f32, f32, f32, f32) -> f32;

/// A tween placed `start` seconds into a timeline.
pub struct Track {
    start: f32,
    duration: f32,
    end_value: f32,
    value: f32,
    tween: ease::Tween,
}

impl Track {
    pub fn new(easing: Easing, from: f32, to: f32, start: f32, duration: f32) -> Self {
        Self {
            start,
            duration,
            end_value: to,
            value: from,
            tween: ease::Tween::new(easing, from, to, duration),
        }
    }

    /// Moves the track from timeline time `before` to `after`.
    pub fn advance(&mut self, before: f32, after: f32) -> f32 {
        if after < self.start {
            return self.value;
        }
        let local_before = (before - self.start).max(0.0);
        let local_after = after - self.start;
        self.value = self.tween.apply(local_after - local_before);
        if local_after >= self.duration {
            self.value = self.end_value;
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEvent {
    /// The counter display should now read this (1-based) number.
    Counter(usize),
    Completed,
}

/// Offsets are percentages of the moved element's own width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePose {
    pub outer_x: f32,
    pub inner_x: f32,
    pub heading_x: f32,
    pub heading_opacity: f32,
    pub image_scale: f32,
}

impl SlidePose {
    pub const RESTING: SlidePose = SlidePose {
        outer_x: 0.0,
        inner_x: 0.0,
        heading_x: 0.0,
        heading_opacity: 1.0,
        image_scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayPose {
    pub x: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl OverlayPose {
    pub const RESTING: OverlayPose = OverlayPose {
        x: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };
}

/// A slide and its stacking priority. Higher `z` is drawn later (on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub slide: usize,
    pub z: u8,
}

pub struct SlideTimeline {
    from: usize,
    to: usize,
    direction: Direction,
    transition: Option<Transition>,
    clock: f32,
    counter_shown: bool,

    outer_x: Track,
    inner_x: Track,
    image_scale: Track,
    outgoing_heading_x: Track,
    outgoing_heading_opacity: Track,
    incoming_heading_x: Track,
    incoming_heading_opacity: Track,

    incoming_overlay_x: Track,
    incoming_overlay_sx: Track,
    incoming_overlay_sy: Track,
    outgoing_overlay_x: Track,
    outgoing_overlay_sx: Track,
    outgoing_overlay_sy: Track,
}

impl SlideTimeline {
    pub fn new(transition: Transition) -> Self {
        let d = transition.direction.sign();
        let track = |from: f32, to: f32| Track::new(ease::expo_in_out, from, to, 0.0, SLIDE_DURATION);

        Self {
            from: transition.from,
            to: transition.to,
            direction: transition.direction,
            transition: Some(transition),
            clock: 0.0,
            counter_shown: false,

            outer_x: track(WRAPPER_SHIFT * d, 0.0),
            inner_x: track(-WRAPPER_SHIFT * d, 0.0),
            image_scale: track(IMAGE_ZOOM, 1.0),
            outgoing_heading_x: track(0.0, HEADING_SHIFT * d),
            outgoing_heading_opacity: track(1.0, HEADING_DIM),
            incoming_heading_x: track(-HEADING_SHIFT * d, 0.0),
            incoming_heading_opacity: track(HEADING_DIM, 1.0),

            incoming_overlay_x: track(OVERLAY_SHIFT * d, 0.0),
            incoming_overlay_sx: track(OVERLAY_STRETCH_X, 1.0),
            incoming_overlay_sy: track(OVERLAY_STRETCH_Y, 1.0),
            outgoing_overlay_x: track(0.0, -OVERLAY_SHIFT * d),
            outgoing_overlay_sx: track(1.0, OVERLAY_STRETCH_X),
            outgoing_overlay_sy: track(1.0, OVERLAY_STRETCH_Y),
        }
    }

    /// Advances by `dt` seconds of wall time.
    pub fn update(&mut self, dt: f32) -> Vec<TimelineEvent> {
        let mut events = Vec::new();
        if self.is_complete() {
            return events;
        }

        let before = self.clock;
        let after = (before + dt * SLIDE_TIME_SCALE).min(SLIDE_DURATION);
        for track in self.tracks_mut() {
            track.advance(before, after);
        }
        self.clock = after;

        if !self.counter_shown && after >= COUNTER_CUE {
            self.counter_shown = true;
            events.push(TimelineEvent::Counter(self.to + 1));
        }
        if after >= SLIDE_DURATION {
            if let Some(transition) = self.transition.take() {
                transition.complete();
            }
            events.push(TimelineEvent::Completed);
        }
        events
    }

    fn tracks_mut(&mut self) -> [&mut Track; 13] {
        [
            &mut self.outer_x,
            &mut self.inner_x,
            &mut self.image_scale,
            &mut self.outgoing_heading_x,
            &mut self.outgoing_heading_opacity,
            &mut self.incoming_heading_x,
            &mut self.incoming_heading_opacity,
            &mut self.incoming_overlay_x,
            &mut self.incoming_overlay_sx,
            &mut self.incoming_overlay_sy,
            &mut self.outgoing_overlay_x,
            &mut self.outgoing_overlay_sx,
            &mut self.outgoing_overlay_sy,
        ]
    }

    pub fn is_complete(&self) -> bool {
        self.transition.is_none()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Sections in draw order: the slide being left under the slide being entered.
    pub fn layers(&self) -> Vec<Layer> {
        if self.from == self.to {
            return vec![Layer { slide: self.to, z: 2 }];
        }
        vec![Layer { slide: self.from, z: 1 }, Layer { slide: self.to, z: 2 }]
    }

    /// Overlay images in draw order: the outgoing image stays on top while it
    /// slides away.
    pub fn overlay_layers(&self) -> Vec<Layer> {
        if self.from == self.to {
            return vec![Layer { slide: self.to, z: 2 }];
        }
        vec![Layer { slide: self.to, z: 1 }, Layer { slide: self.from, z: 2 }]
    }

    pub fn slide_pose(&self, slide: usize) -> Option<SlidePose> {
        if slide == self.to {
            Some(SlidePose {
                outer_x: self.outer_x.value(),
                inner_x: self.inner_x.value(),
                heading_x: self.incoming_heading_x.value(),
                heading_opacity: self.incoming_heading_opacity.value(),
                image_scale: self.image_scale.value(),
            })
        } else if slide == self.from {
            Some(SlidePose {
                heading_x: self.outgoing_heading_x.value(),
                heading_opacity: self.outgoing_heading_opacity.value(),
                ..SlidePose::RESTING
            })
        } else {
            None
        }
    }

    pub fn overlay_pose(&self, slide: usize) -> Option<OverlayPose> {
        if slide == self.to {
            Some(OverlayPose {
                x: self.incoming_overlay_x.value(),
                scale_x: self.incoming_overlay_sx.value(),
                scale_y: self.incoming_overlay_sy.value(),
            })
        } else if slide == self.from {
            Some(OverlayPose {
                x: self.outgoing_overlay_x.value(),
                scale_x: self.outgoing_overlay_sx.value(),
                scale_y: self.outgoing_overlay_sy.value(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::SlideNavigator;
    use crate::slide::SlideSet;
    use std::path::PathBuf;

    fn navigator(n: usize) -> SlideNavigator {
        let set = SlideSet::from_paths((0..n).map(|i| PathBuf::from(format!("{i}.jpg"))).collect())
            .expect("non-empty set");
        SlideNavigator::new(&set)
    }

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn track_waits_for_its_start() {
        let mut track = Track::new(ease::linear_none, 0.0, 10.0, 0.5, 1.0);
        assert_eq!(track.advance(0.0, 0.4), 0.0);
        assert!(close(track.advance(0.4, 1.0), 5.0));
        assert_eq!(track.advance(1.0, 3.0), 10.0);
    }

    #[test]
    fn forward_enters_from_the_right() {
        let mut nav = navigator(10);
        let timeline = SlideTimeline::new(nav.step(Direction::Forward).expect("accepted"));
        let pose = timeline.slide_pose(1).expect("incoming pose");
        assert_eq!(pose.outer_x, 100.0);
        assert_eq!(pose.inner_x, -100.0);
        assert_eq!(pose.image_scale, 2.0);
        let overlay = timeline.overlay_pose(1).expect("incoming overlay");
        assert_eq!(overlay.x, 125.0);
    }

    #[test]
    fn backward_enters_from_the_left() {
        let mut nav = navigator(10);
        let mut timeline = SlideTimeline::new(nav.step(Direction::Backward).expect("accepted"));
        assert_eq!(timeline.direction(), Direction::Backward);
        assert_eq!(timeline.slide_pose(9).map(|p| p.outer_x), Some(-100.0));

        timeline.update(10.0);
        let outgoing = timeline.overlay_pose(0).expect("outgoing overlay");
        assert_eq!(outgoing.x, 125.0);
        assert_eq!((outgoing.scale_x, outgoing.scale_y), (1.5, 1.3));
        assert_eq!(timeline.slide_pose(0).map(|p| p.heading_x), Some(-30.0));
    }

    #[test]
    fn halfway_is_half_travelled() {
        let mut nav = navigator(3);
        let mut timeline = SlideTimeline::new(nav.step(Direction::Forward).expect("accepted"));
        timeline.update(0.625);
        let pose = timeline.slide_pose(1).expect("incoming pose");
        assert!((pose.outer_x - 50.0).abs() < 1.0, "outer_x = {}", pose.outer_x);
    }

    #[test]
    fn counter_flips_partway_through() {
        let mut nav = navigator(10);
        let mut timeline = SlideTimeline::new(nav.go_to(4, Direction::Forward).expect("accepted"));

        assert!(timeline.update(0.39).is_empty());
        assert_eq!(timeline.update(0.02), vec![TimelineEvent::Counter(5)]);
        assert!(timeline.update(0.5).is_empty());
        assert!(nav.is_animating());
    }

    #[test]
    fn completion_fires_once_and_releases_the_lock() {
        let mut nav = navigator(10);
        let mut timeline = SlideTimeline::new(nav.step(Direction::Forward).expect("accepted"));

        assert!(!timeline.update(1.2).contains(&TimelineEvent::Completed));
        assert!(nav.is_animating());

        assert_eq!(timeline.update(0.1), vec![TimelineEvent::Completed]);
        assert!(timeline.is_complete());
        assert!(!nav.is_animating());
        assert!(timeline.update(1.0).is_empty());
    }

    #[test]
    fn one_long_frame_reports_counter_then_completion() {
        let mut nav = navigator(10);
        let mut timeline = SlideTimeline::new(nav.go_to(-1, Direction::Backward).expect("accepted"));
        assert_eq!(
            timeline.update(5.0),
            vec![TimelineEvent::Counter(10), TimelineEvent::Completed]
        );
        assert_eq!(timeline.slide_pose(9), Some(SlidePose::RESTING));
        assert_eq!(timeline.overlay_pose(9), Some(OverlayPose::RESTING));
    }

    #[test]
    fn dropping_the_timeline_releases_the_lock() {
        let mut nav = navigator(5);
        let mut timeline = SlideTimeline::new(nav.step(Direction::Forward).expect("accepted"));
        timeline.update(0.2);
        drop(timeline);
        assert!(!nav.is_animating());
    }

    #[test]
    fn entered_slide_is_stacked_above_the_left_one() {
        let mut nav = navigator(5);
        let timeline = SlideTimeline::new(nav.go_to(3, Direction::Forward).expect("accepted"));
        let layers = timeline.layers();
        assert_eq!(layers.len(), 2);
        let incoming = layers.iter().find(|l| l.slide == 3).expect("incoming layer");
        let outgoing = layers.iter().find(|l| l.slide == 0).expect("outgoing layer");
        assert!(incoming.z > outgoing.z);
        assert_eq!(layers.last().map(|l| l.slide), Some(3));
        assert_eq!(timeline.overlay_layers().last().map(|l| l.slide), Some(0));
    }

    #[test]
    fn untouched_slides_have_no_pose() {
        let mut nav = navigator(5);
        let timeline = SlideTimeline::new(nav.step(Direction::Forward).expect("accepted"));
        assert_eq!(timeline.slide_pose(3), None);
        assert_eq!(timeline.overlay_pose(3), None);
    }
}
