use ratatui::layout::Rect;
use ratatui::Frame;

/// A reusable UI component.
///
/// Screen components follow the props pattern:
/// - They receive data via props (struct fields borrowed from `App`).
/// - Stateful ones additionally borrow their persistent state
///   (e.g. a `MenuState` or scroll offset) from `TuiState`.
/// - They render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so components can update presentation
/// state (selection highlights, scroll offsets) during the render pass.
/// This aligns with Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
///
/// Only components with their own input handling implement this
/// (e.g. the search box). Plain screens are driven by the event loop.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
