use thiserror::Error;

/// Errors raised while validating the configuration or wiring the animation
/// into the page.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WormError {
    #[error("point capacity must be at least 1")]
    ZeroCapacity,

    #[error("parameter interval [{min}, {max}) is empty or not finite")]
    InvalidInterval { min: f64, max: f64 },

    #[error("parameter step must be finite and positive, got {0}")]
    InvalidStep(f64),

    #[error("tick interval must be at least 1 ms")]
    ZeroTickInterval,

    #[error("tick interval of {0} ms does not fit a browser timer")]
    TickIntervalTooLong(u32),

    #[error("padding divisor must be finite and positive, got {0}")]
    InvalidPadding(f64),

    #[error("no global window")]
    NoWindow,

    #[error("no document on window")]
    NoDocument,

    #[error("canvas `{0}` not found")]
    CanvasNotFound(String),

    #[error("2d canvas context not supported")]
    NoContext2d,

    #[error("viewport size unavailable")]
    NoViewport,
}

pub type WormResult<T> = Result<T, WormError>;

impl From<WormError> for wasm_bindgen::JsValue {
    fn from(err: WormError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
