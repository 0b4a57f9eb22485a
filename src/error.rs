use thiserror::Error;

/// Errors that can occur while setting up or rendering a view.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not allocate a {width}x{height} drawing surface")]
    SurfaceAllocation { width: u32, height: u32 },

    #[error("could not encode image: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
