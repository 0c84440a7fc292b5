// Application and presentation layers for the focusflow backend.
// Domain rules live in focusflow-domain; storage in focusflow-infrastructure.

pub mod application;
pub mod presentation;
