//! Controller layer: UI events, notice forwarding, and command orchestration.

pub mod events;
pub mod notifier;
pub mod orchestration;
