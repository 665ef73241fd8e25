use enum_dispatch::enum_dispatch;

use current_command::CurrentCommand;
use echo_command::EchoCommand;
use fn_command::FnCommand;
use hello_command::HelloCommand;
use stream_command::StreamCommand;

use crate::commands::descriptor::{Command, CommandDescriptor, HandlerFuture};
use crate::entities::context::Context;

pub static DEFAULT_PREFIX: &str = "~";

pub mod current_command;
pub mod descriptor;
pub mod echo_command;
pub mod fn_command;
pub mod hello_command;
pub mod processor;
pub mod signature;
pub mod stream_command;

#[enum_dispatch]
pub enum CommandItem {
    CurrentCommand(CurrentCommand),
    EchoCommand(EchoCommand),
    FnCommand(FnCommand),
    HelloCommand(HelloCommand),
    StreamCommand(StreamCommand),
}

pub fn default_commands() -> Vec<CommandItem> {
    vec![
        CurrentCommand::default(),
        EchoCommand::default(),
        HelloCommand::default(),
        StreamCommand::default(),
    ]
}
