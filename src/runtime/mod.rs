//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler and window management
//! - `renderer` - softbuffer surface that paints the model

pub mod app;
pub mod renderer;

pub use app::App;
