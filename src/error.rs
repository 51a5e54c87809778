use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("y-axis interval must be > 0 or the auto sentinel (-1): got {value}")]
    InvalidYInterval { value: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
