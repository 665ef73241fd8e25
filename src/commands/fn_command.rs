use std::sync::Arc;

use crate::commands::CommandItem;
use crate::commands::descriptor::{Command, CommandDescriptor, HandlerFuture};
use crate::entities::context::Context;

pub type CommandFn = Arc<dyn Fn(Context) -> HandlerFuture + Send + Sync + 'static>;

/// Command whose logic is a closure rather than a dedicated type.
pub struct FnCommand {
    command_fn: CommandFn,
    command_info: CommandDescriptor,
}

impl FnCommand {
    pub fn new<F>(command_info: CommandDescriptor, command_fn: F) -> CommandItem
    where
        F: Fn(Context) -> HandlerFuture + Send + Sync + 'static,
    {
        let command = Self {
            command_fn: Arc::new(command_fn),
            command_info,
        };

        CommandItem::FnCommand(command)
    }
}

impl Command for FnCommand {
    fn get_command_info(&self) -> &CommandDescriptor {
        &self.command_info
    }

    fn execute(&self, ctx: Context) -> HandlerFuture {
        (self.command_fn)(ctx)
    }
}
