use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("State not found: {type_name}")]
    StateNotFound { type_name: &'static str },
    #[error("Compute not found: {type_name}")]
    ComputeNotFound { type_name: &'static str },
}

impl Error {
    pub fn state_not_found<T>() -> Self {
        Self::StateNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }

    pub fn compute_not_found<T>() -> Self {
        Self::ComputeNotFound {
            type_name: std::any::type_name::<T>(),
        }
    }
}
