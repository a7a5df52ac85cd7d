//! Metro journey planner.
//!
//! Answers: "What is the quickest way from this stop to that one, what
//! does it cost, and where do I change lines?"

pub mod domain;
pub mod network;
pub mod planner;
