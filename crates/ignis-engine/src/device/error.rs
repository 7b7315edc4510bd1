use thiserror::Error;

/// Fatal failure while bringing up the window and GL context.
///
/// One variant per bootstrap step; none of them are retried.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to initialize the platform event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("platform never became ready for window creation")]
    NotResumed,

    #[error("failed to create window or select a GL config: {0}")]
    Display(String),

    #[error("window was not created")]
    Window,

    #[error("no framebuffer config with at least {requested} depth bits (best had {found})")]
    DepthBuffer { requested: u8, found: u8 },

    #[error("window handle unavailable: {0}")]
    Handle(#[from] raw_window_handle::HandleError),

    #[error("failed to create GL {major}.{minor} core context: {source}")]
    Context {
        major: u8,
        minor: u8,
        #[source]
        source: glutin::error::Error,
    },

    #[error("failed to create window surface: {0}")]
    Surface(#[source] glutin::error::Error),

    #[error("failed to make GL context current: {0}")]
    MakeCurrent(#[source] glutin::error::Error),

    #[error("GL entry point `{0}` could not be loaded")]
    Loader(&'static str),
}
