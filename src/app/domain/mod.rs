//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The résumé record and its sections
//! - Message types for the command loop

pub mod messages;
pub mod resume;

pub use messages::Message;
pub use resume::{Experience, ResumeData, Skill};
