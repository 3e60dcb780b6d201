//! Controller layer: worker events and export command orchestration.

pub mod events;
pub mod orchestration;
