use winit::event::WindowEvent;

use crate::input::PlatformEvent;

/// Translates a winit `WindowEvent` into a [`PlatformEvent`].
///
/// Returns `None` for events that are handled by the runtime itself
/// (redraw and resize bookkeeping) rather than by the frame loop.
pub(crate) fn translate_window_event(event: &WindowEvent) -> Option<PlatformEvent> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(PlatformEvent::Quit),

        WindowEvent::RedrawRequested | WindowEvent::Resized(_) => None,

        _ => Some(PlatformEvent::Ignored),
    }
}
