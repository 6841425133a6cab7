//! Library exports for the happy-little-pixels paint engine.
//!
//! The engine keeps a committed RGBA pixel buffer, drives it from pointer
//! gestures through a tool state machine, records whole-image snapshots for
//! undo/redo, and maps between screen and image space through a zoomable,
//! pannable viewport. Frontends (and the bundled CLI) work through
//! [`EditorSession`].

pub mod config;
pub mod draw;
pub mod export;
pub mod history;
pub mod input;
pub mod session;
pub mod util;
pub mod viewport;

pub use config::Config;
pub use session::EditorSession;
