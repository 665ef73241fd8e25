use thiserror::Error;

/// Failures produced while binding chat text to a command's parameters.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BindError {
    /// The descriptor lacks the leading receiver/context parameters.
    #[error("{command}() missing 1 required positional argument: '{missing}'")]
    MalformedCommandSignature {
        command: String,
        missing: &'static str,
    },

    #[error("Missing required arguments in command: {command}()")]
    MissingRequiredArguments { command: String },
}

impl BindError {
    pub fn command(&self) -> &str {
        match self {
            BindError::MalformedCommandSignature { command, .. } => command.as_str(),
            BindError::MissingRequiredArguments { command } => command.as_str(),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("command '{0}' is already registered")]
    DuplicateCommand(String),

    #[error(transparent)]
    Signature(#[from] BindError),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MessageError {
    /// Neither `sent-ts` nor `tmi-sent-ts` was delivered with the line.
    #[error("message carries no sent-ts or tmi-sent-ts tag")]
    MissingTimestamp,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("length of message can not be > {limit}, got {length}")]
    ContentTooLong { length: usize, limit: usize },
}

/// Errors raised by the stream lookup collaborator.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("bad request while fetching streams ({status}): {body}")]
    Status { status: u16, body: String },
}
