//! Drawing surfaces and line batching.

pub mod batch;
#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod framebuffer;
pub mod host;
pub mod surface;

pub use batch::AlphaBatches;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use framebuffer::FrameBuffer;
pub use host::HostSurface;
pub use surface::Surface;
