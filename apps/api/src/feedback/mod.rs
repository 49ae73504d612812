// Feedback form: validation, delivery sink, and the submit endpoint.
// Delivery goes through the FeedbackSink trait so the relay backend can be
// swapped without touching the handler.

pub mod handlers;
pub mod models;
pub mod relay;
