//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (ResumeData, Messages)
//! - `controllers/` - Orchestration (EditModeController, ExchangeController)
//! - `services/` - Business operations (extractor, renderer, storage)
//! - `infrastructure/` - External integrations (visual page port, shell port, file store, error)
//! - `state.rs` - The editor session coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::edit_mode::{EditMode, EditModeController};
pub use controllers::exchange::ExchangeController;
pub use domain::{Experience, Message, ResumeData, Skill};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::file_store::FileStore;
pub use infrastructure::shell::Shell;
pub use infrastructure::visual::{JobSlot, ListSection, SkillSlot, TextField, VisualPage};
pub use services::storage::{KeyValueStore, MemoryStore, RecordStore, RECORD_KEY};
pub use state::EditorSession;
