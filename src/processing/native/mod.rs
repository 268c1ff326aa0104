//! In-process compression backend built on `image` and `fast_image_resize`.

mod encode;
mod executor;
mod resize;

pub use executor::{NativeExecutor, NativeExecutorConfig};
