//! # Core Application Logic
//!
//! This module contains Pausenknopf's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Mobile   │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct holding all application state in one place
//! - [`action`]: Actions, effects and the reducer
//! - [`nav`]: Screens, tabs and the back history
//! - [`favorites`]: Persisted favorite cards
//! - [`config`]: Settings with the defaults → file → env → CLI hierarchy
//! - [`audio`]: Playback seam for future audio clips

pub mod action;
pub mod audio;
pub mod config;
pub mod favorites;
pub mod nav;
pub mod state;

// Re-export commonly used types for convenience
// pub use action::Action;
// pub use state::App;
