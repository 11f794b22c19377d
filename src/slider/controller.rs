use log::debug;
use crate::navigator::{Direction, SlideNavigator, Transition};
use crate::slide::SlideSet;
use crate::state::SliderState;
use crate::timeline::{Layer, OverlayPose, SlidePose, SlideTimeline, TimelineEvent};

/// Navigator plus the timeline of whatever transition is running, and the
/// counter the timeline drives. Window-free so it can be driven from tests.
pub struct SliderController {
    navigator: SlideNavigator,
    timeline: Option<SlideTimeline>,
    counter: usize,
}

impl SliderController {
    pub fn new(slides: &SlideSet) -> Self {
        Self {
            navigator: SlideNavigator::new(slides),
            timeline: None,
            counter: 1,
        }
    }

    /// Starts over when `slides` is a different set. Any running transition
    /// is dropped along with its lock.
    pub fn sync(&mut self, slides: &SlideSet) -> bool {
        if !self.navigator.sync(slides) {
            return false;
        }
        self.timeline = None;
        self.counter = 1;
        true
    }

    #[cfg(test)]
    pub fn go_to(&mut self, requested: i64, direction: Direction) -> bool {
        let transition = self.navigator.go_to(requested, direction);
        self.start(transition)
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        let transition = self.navigator.step(direction);
        self.start(transition)
    }

    fn start(&mut self, transition: Option<Transition>) -> bool {
        match transition {
            Some(transition) => {
                debug!("slide {} -> {} ({:?})", transition.from, transition.to, transition.direction);
                self.timeline = Some(SlideTimeline::new(transition));
                true
            }
            None => false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        let Some(timeline) = self.timeline.as_mut() else {
            return;
        };
        let events = timeline.update(dt);
        for event in events {
            match event {
                TimelineEvent::Counter(n) => self.counter = n,
                TimelineEvent::Completed => self.timeline = None,
            }
        }
    }

    pub fn state(&self) -> SliderState {
        self.navigator.state()
    }

    pub fn is_idle(&self) -> bool {
        self.state() == SliderState::Idle
    }

    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    /// 1-based number shown by the counter.
    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn counter_text(&self) -> String {
        format!("{:02}", self.counter)
    }

    /// Sections to draw, bottom first.
    pub fn visible_layers(&self) -> Vec<Layer> {
        match &self.timeline {
            Some(timeline) => timeline.layers(),
            None => vec![Layer { slide: self.current_index(), z: 1 }],
        }
    }

    /// Overlay images to draw, bottom first.
    pub fn overlay_layers(&self) -> Vec<Layer> {
        match &self.timeline {
            Some(timeline) => timeline.overlay_layers(),
            None => vec![Layer { slide: self.current_index(), z: 1 }],
        }
    }

    pub fn slide_pose(&self, slide: usize) -> SlidePose {
        self.timeline
            .as_ref()
            .and_then(|t| t.slide_pose(slide))
            .unwrap_or(SlidePose::RESTING)
    }

    pub fn overlay_pose(&self, slide: usize) -> OverlayPose {
        self.timeline
            .as_ref()
            .and_then(|t| t.overlay_pose(slide))
            .unwrap_or(OverlayPose::RESTING)
    }
}
