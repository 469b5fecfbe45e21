//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar showing screen title and status message
//! - `TabBar`: Bottom tab row for the three top-level areas
//! - one screen component per [`crate::core::nav::Screen`] variant
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `SearchBox`: Text input field for the orientation search
//! - `MenuState`: Cursor state shared by every list screen
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally. For example, `SosScreen` renders the
//! breathing pacer, an affirmation and a card list in one view.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! - State types
//! - Event types
//! - Rendering logic
//! - Event handling
//! - Tests
//!
//! **Why:** Makes components self-contained and easy to understand. You can
//! read one file to understand how a component works, rather than jumping
//! between multiple files.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! directly accessing global state. This makes dependencies explicit and
//! components testable.
//!
//! **Example:**
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! CardView { card, category, is_favorite, scroll }.render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! card_view.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs                  (this file)
//! ├── menu.rs                 (Shared list cursor state)
//! ├── title_bar.rs            (Top status bar)
//! ├── tab_bar.rs              (Bottom tab row)
//! ├── search_box.rs           (Search text input)
//! ├── start.rs                (Start screen with pulse glyph)
//! ├── orientation.rs          (Category grid + search results)
//! ├── category.rs             (Cards of one category)
//! ├── card_view.rs            (Single card with scrolling body)
//! ├── situations.rs           (Situation picker)
//! ├── situation_result.rs     (Cards for one situation)
//! ├── sos.rs                  (Breathing pacer and quick help)
//! ├── recovery_types.rs       (Recovery tab entry)
//! ├── recovery_detail.rs      (Signs and helps of one type)
//! ├── questionnaire.rs        (Exhaustion sign checklist)
//! ├── questionnaire_result.rs (Ranked recovery recommendation)
//! ├── favorites_view.rs       (Saved cards)
//! └── legal.rs                (Impressum / Datenschutz)
//! ```

pub mod menu;
pub use menu::MenuState;

mod title_bar;
pub use title_bar::TitleBar;
mod tab_bar;
pub use tab_bar::TabBar;
pub mod search_box;
pub use search_box::{SearchBox, SearchEvent};

pub mod start;
pub use start::StartScreen;
mod orientation;
pub use orientation::OrientationScreen;
mod category;
pub use category::CategoryScreen;
mod card_view;
pub use card_view::CardView;
mod situations;
pub use situations::SituationsScreen;
mod situation_result;
pub use situation_result::SituationResultScreen;
pub mod sos;
pub use sos::SosScreen;
pub mod recovery_types;
pub use recovery_types::RecoveryTypesScreen;
mod recovery_detail;
pub use recovery_detail::RecoveryDetailScreen;
mod questionnaire;
pub use questionnaire::QuestionnaireScreen;
mod questionnaire_result;
pub use questionnaire_result::QuestionnaireResultScreen;
mod favorites_view;
pub use favorites_view::FavoritesScreen;
pub mod legal;
pub use legal::{LegalKind, LegalScreen};
