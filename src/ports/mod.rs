//! Port traits: seams between the training core and its collaborators
//!
//! `ActionSelector` is the policy seam (the production implementation is the
//! epsilon-greedy policy; tests substitute scripted selectors). `TrainingObserver`
//! is the observation seam used by progress bars and stat exporters.

pub mod observer;
pub mod selector;

pub use observer::TrainingObserver;
pub use selector::ActionSelector;
