use thiserror::Error;

/// Failure of [`crate::clone`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CloneError {
    /// The input refers back to one of its own ancestors.
    #[error("cannot clone a cyclic value graph")]
    Cycle,
}

/// Failure of a value-graph mutation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("prototype chain cycle detected")]
    PrototypeCycle,
}

/// Failure of a [`crate::TypeRegistry`] operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown type: {0}")]
    UnknownType(String),
}
