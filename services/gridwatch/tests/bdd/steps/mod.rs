//! BDD step definitions for the gridwatch client

pub mod console_steps;
pub mod envelope_steps;
pub mod session_steps;
