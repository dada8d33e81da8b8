//! Controller layer: UI error modeling and intent dispatch into the booking flow.

pub mod events;
pub mod orchestration;
