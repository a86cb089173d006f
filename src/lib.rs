//! Impact Forge client core
//!
//! Typed client for the Impact Forge community/cause-donation platform:
//! the conversational and structured onboarding pipeline (profile
//! acquisition, delta merging, tribe matching) and the resilient HTTP
//! client contract every screen depends on.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
