//! Error types for the Castaway system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Validation errors carry the exact line shown to the player: every token
//! they quote is uppercased when the error is built, so `Display` needs no
//! further formatting at the shell boundary.

use std::fmt;

use thiserror::Error;

/// The main error type for Castaway operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unknown action error.
    #[must_use]
    pub fn action_not_recognized(action: &str) -> Self {
        Self::new(ErrorKind::ActionNotRecognized(action.to_uppercase()))
    }

    /// Creates a missing object error.
    #[must_use]
    pub fn object_required(action: &str) -> Self {
        Self::new(ErrorKind::ObjectRequired(action.to_uppercase()))
    }

    /// Creates an unresolvable or unreachable object error.
    #[must_use]
    pub fn object_not_found(phrase: &str) -> Self {
        Self::new(ErrorKind::ObjectNotFound(phrase.to_uppercase()))
    }

    /// Creates an error for an action the object does not allow.
    #[must_use]
    pub fn cannot_perform_on(action: &str, object: &str) -> Self {
        Self::new(ErrorKind::CannotPerformOn {
            action: action.to_uppercase(),
            object: object.to_uppercase(),
        })
    }

    /// Creates a missing preposition error.
    #[must_use]
    pub fn preposition_required(action: &str) -> Self {
        Self::new(ErrorKind::PrepositionRequired(action.to_uppercase()))
    }

    /// Creates an unknown preposition error.
    #[must_use]
    pub fn preposition_not_recognized(word: &str) -> Self {
        Self::new(ErrorKind::PrepositionNotRecognized(word.to_uppercase()))
    }

    /// Creates an error for a preposition the action does not take.
    #[must_use]
    pub fn cannot_perform_with(action: &str, preposition: &str) -> Self {
        Self::new(ErrorKind::CannotPerformWith {
            action: action.to_uppercase(),
            preposition: preposition.to_uppercase(),
        })
    }

    /// Creates an error for a preposition with nothing after it.
    #[must_use]
    pub fn missing_preposition_object(preposition: &str) -> Self {
        Self::new(ErrorKind::MissingPrepositionObject(preposition.to_uppercase()))
    }

    /// Creates an error for a command matching none of the action's usages.
    #[must_use]
    pub fn invalid_usage(action: &str) -> Self {
        Self::new(ErrorKind::InvalidUsage(action.to_uppercase()))
    }

    /// Returns true if this error was raised while validating a command.
    ///
    /// Validation errors are recoverable: they happen before dispatch and
    /// never leave the world half-changed.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(
            self.kind,
            ErrorKind::Config(_) | ErrorKind::Io(_) | ErrorKind::Internal(_)
        )
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The first word is not a known action, or the action has no usages.
    #[error("Action not recognized: {0}")]
    ActionNotRecognized(String),

    /// The action needs an object and none was given.
    #[error("Action requires object: {0}")]
    ObjectRequired(String),

    /// The phrase names no entity, or the entity is out of reach.
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    /// The entity does not allow the action.
    #[error("Cannot perform: {action} on {object}")]
    CannotPerformOn {
        /// The action that was attempted.
        action: String,
        /// The object phrase as typed.
        object: String,
    },

    /// Every usage of the action needs a preposition and none was given.
    #[error("Action requires preposition: {0}")]
    PrepositionRequired(String),

    /// The word in preposition position is not a preposition.
    #[error("Preposition not recognized: {0}")]
    PrepositionNotRecognized(String),

    /// The action takes no usage with this preposition.
    #[error("Cannot perform: {action} with {preposition}")]
    CannotPerformWith {
        /// The action that was attempted.
        action: String,
        /// The preposition that was given.
        preposition: String,
    },

    /// A preposition was given with nothing after it.
    #[error("Missing object after preposition: {0}")]
    MissingPrepositionObject(String),

    /// The command's argument shape matches none of the action's usages.
    #[error("Invalid usage for action {0}")]
    InvalidUsage(String),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Terminal or stream failure.
    #[error("i/o error: {0}")]
    Io(std::io::Error),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The input line being processed.
    pub input: Option<String>,
    /// The pipeline stage that failed ("action", "object", ...).
    pub stage: Option<&'static str>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input line.
    #[must_use]
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Sets the failing stage.
    #[must_use]
    pub const fn with_stage(mut self, stage: &'static str) -> Self {
        self.stage = Some(stage);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stage) = self.stage {
            write!(f, "in {stage} check")?;
        }
        if let Some(input) = &self.input {
            write!(f, " of {input:?}")?;
        }
        Ok(())
    }
}

/// Result type alias using the Castaway error.
pub type Result<T> = std::result::Result<T, Error>;
