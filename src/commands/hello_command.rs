use crate::commands::CommandItem;
use crate::commands::descriptor::{Command, CommandDescriptor, HandlerFuture};
use crate::commands::signature::CommandSignature;
use crate::entities::context::Context;
use crate::entities::destination::SendableDestination;

pub struct HelloCommand {
    command_info: CommandDescriptor,
}

impl HelloCommand {
    pub fn default() -> CommandItem {
        let command_info = CommandDescriptor::new(
            "hello",
            "Says '<greeting>, <username>!' in the chat",
            CommandSignature::handler()
                .positional_with_default("greeting", "Hello")
                .build(),
        );

        let command = Self {
            command_info
        };

        CommandItem::HelloCommand(command)
    }
}

async fn greet(ctx: Context) -> anyhow::Result<()> {
    let greeting = ctx.arg(0).unwrap_or_default();
    ctx.send(format!("{}, {}!", greeting, ctx.author.display_name()).as_str())?;

    Ok(())
}

impl Command for HelloCommand {
    fn get_command_info(&self) -> &CommandDescriptor {
        &self.command_info
    }

    fn execute(&self, ctx: Context) -> HandlerFuture {
        Box::pin(greet(ctx))
    }
}
