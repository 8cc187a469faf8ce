//! View capability contract.

/// Lifecycle hooks every concrete view implements.
///
/// `configure` runs once after construction (wiring, static text);
/// `render` repaints the view's current state through its surface.
/// Views are composed by explicit construction, never by inheritance from a
/// shared template base.
pub trait ViewComponent {
    fn configure(&mut self);
    fn render(&mut self);
}
