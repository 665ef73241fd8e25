use crate::commands::CommandItem;
use crate::commands::descriptor::{Command, CommandDescriptor, HandlerFuture};
use crate::commands::signature::CommandSignature;
use crate::entities::context::Context;
use crate::entities::destination::SendableDestination;

pub struct StreamCommand {
    command_info: CommandDescriptor,
}

impl StreamCommand {
    pub fn default() -> CommandItem {
        let command_info = CommandDescriptor::new(
            "stream",
            "Tells whether the channel is live and what it is streaming",
            CommandSignature::handler().build(),
        );

        let command = Self {
            command_info
        };

        CommandItem::StreamCommand(command)
    }
}

async fn report_stream(ctx: Context) -> anyhow::Result<()> {
    let channel = ctx.channel.name().trim_start_matches('#').to_string();

    let reply = match ctx.get_stream().await? {
        Some(stream) => {
            let title = stream["title"].as_str().unwrap_or("untitled");
            format!("{} is live: {}", channel, title)
        },
        None => format!("{} is offline", channel),
    };

    ctx.send(reply.as_str())?;

    Ok(())
}

impl Command for StreamCommand {
    fn get_command_info(&self) -> &CommandDescriptor {
        &self.command_info
    }

    fn execute(&self, ctx: Context) -> HandlerFuture {
        Box::pin(report_stream(ctx))
    }
}
