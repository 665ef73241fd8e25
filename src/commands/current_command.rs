use chrono::Datelike;
use chrono::offset::Utc;

use crate::commands::CommandItem;
use crate::commands::descriptor::{Command, CommandDescriptor, HandlerFuture};
use crate::commands::signature::CommandSignature;
use crate::entities::context::Context;
use crate::entities::destination::SendableDestination;

fn get_day_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th"
    }
}

pub struct CurrentCommand {
    command_info: CommandDescriptor,
}

impl CurrentCommand {
    pub fn default() -> CommandItem {
        let command_info = CommandDescriptor::new(
            "current",
            "Returns current datetime in UTC timezone",
            CommandSignature::handler().build(),
        );

        let command = Self {
            command_info
        };

        CommandItem::CurrentCommand(command)
    }
}

async fn tell_time(ctx: Context) -> anyhow::Result<()> {
    let current_time = Utc::now();

    let day_suffix = get_day_suffix(current_time.day());
    let date_format_str = format!("%I:%M:%S %p on %d{} of %B, %G", day_suffix);

    ctx.send(format!("Current datetime: {}", current_time.format(date_format_str.as_str())).as_str())?;

    Ok(())
}

impl Command for CurrentCommand {
    fn get_command_info(&self) -> &CommandDescriptor {
        &self.command_info
    }

    fn execute(&self, ctx: Context) -> HandlerFuture {
        Box::pin(tell_time(ctx))
    }
}
