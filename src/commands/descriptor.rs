use std::future::Future;
use std::pin::Pin;

use enum_dispatch::enum_dispatch;

use crate::entities::context::Context;
use crate::error::BindError;

use super::signature::{BoundArguments, CommandSignature};

pub type HandlerFuture = Pin<Box<dyn Future<Output = anyhow::Result<()>> + Send + 'static>>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandDescriptor {
    /// Description of the command
    description: &'static str,
    /// Name the command is invoked by, unique within a processor
    name: &'static str,
    /// Declared handler parameters
    signature: CommandSignature,
}

impl CommandDescriptor {
    pub fn new(name: &'static str, description: &'static str, signature: CommandSignature) -> Self {
        Self {
            description,
            name,
            signature,
        }
    }

    pub fn get_description(&self) -> &str {
        self.description
    }

    pub fn get_name(&self) -> &str {
        self.name
    }

    pub fn get_signature(&self) -> &CommandSignature {
        &self.signature
    }

    pub fn validate(&self) -> Result<(), BindError> {
        self.signature.validate(self.name)
    }

    pub fn bind_arguments(&self, tokens: &[String]) -> Result<BoundArguments, BindError> {
        self.signature.bind(tokens, self.name)
    }
}

#[enum_dispatch(CommandItem)]
pub trait Command {
    fn get_command_info(&self) -> &CommandDescriptor;

    fn execute(&self, ctx: Context) -> HandlerFuture;
}
