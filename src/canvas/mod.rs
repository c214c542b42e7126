//! Drawing surface subsystem.
//!
//! # Data Flow
//! ```text
//! PointerEvent (down / move / up / leave)
//!     → pen.rs (stroke state machine, color captured per stroke)
//!     → surface.rs (Bresenham segments into an RGBA raster)
//!     → encode.rs (PNG → data:image/png;base64 payload at mint time)
//! ```

pub mod color;
pub mod encode;
pub mod pen;
pub mod surface;

pub use color::{Color, ColorParseError};
pub use encode::{encode_png, EncodeError, ImagePayload, PNG_DATA_URI_PREFIX};
pub use pen::{Pen, PointerEvent, StrokeState};
pub use surface::{DrawingSurface, Point};
