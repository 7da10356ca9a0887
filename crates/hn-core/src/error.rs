use thiserror::Error;

pub type HnResult<T> = Result<T, HnError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HnError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Negative value for {what}: {value}")]
    Negative { what: &'static str, value: f64 },
}
