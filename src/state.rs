#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SliderState {
    Idle,          // Current slide shown alone, input accepted
    Transitioning, // Outgoing and incoming slides animating, input dropped
}
