use crate::commands::CommandItem;
use crate::commands::descriptor::{Command, CommandDescriptor, HandlerFuture};
use crate::commands::signature::CommandSignature;
use crate::entities::context::Context;
use crate::entities::destination::SendableDestination;

pub struct EchoCommand {
    command_info: CommandDescriptor,
}

impl EchoCommand {
    pub fn default() -> CommandItem {
        let command_info = CommandDescriptor::new(
            "echo",
            "Repeats everything after the command name",
            CommandSignature::handler().greedy("text").build(),
        );

        let command = Self {
            command_info
        };

        CommandItem::EchoCommand(command)
    }
}

async fn echo(ctx: Context) -> anyhow::Result<()> {
    match ctx.kwarg("text") {
        Some(text) if !text.is_empty() => ctx.send(text)?,
        _ => log::debug!("Nothing to echo for {}", ctx.author),
    }

    Ok(())
}

impl Command for EchoCommand {
    fn get_command_info(&self) -> &CommandDescriptor {
        &self.command_info
    }

    fn execute(&self, ctx: Context) -> HandlerFuture {
        Box::pin(echo(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixture_context;

    #[tokio::test]
    async fn echo_repeats_text() {
        let (sink, mut ctx) = fixture_context("~echo hi there");
        ctx.kwargs.insert("text".to_string(), "hi there".to_string());

        EchoCommand::default().execute(ctx).await.unwrap();

        assert_eq!(sink.sent(), vec![("#art".to_string(), "hi there".to_string())]);
    }

    #[tokio::test]
    async fn echo_stays_quiet_without_text() {
        let (sink, mut ctx) = fixture_context("~echo");
        ctx.kwargs.insert("text".to_string(), String::new());

        EchoCommand::default().execute(ctx).await.unwrap();

        assert!(sink.sent().is_empty());
    }
}
