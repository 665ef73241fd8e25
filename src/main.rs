extern crate anyhow;
extern crate chatbind;
extern crate clap;
extern crate log;
extern crate log4rs;
extern crate tokio;

use clap::{App, Arg, ArgMatches, crate_authors, crate_description, crate_name, crate_version};

use chatbind::bot::Bot;
use chatbind::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::<'static, 'static>::new(crate_name!())
        .author(crate_authors!())
        .about(crate_description!())
        .version(crate_version!())
        .arg(
            Arg::with_name("app-config")
                .short("c")
                .long("app-config")
                .env("APP_CONFIG_PATH")
                .value_name("APP_CONFIG_PATH")
                .default_value("./configs/config.toml")
                .help("Specifies custom path to bot's primary config file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("log-config")
                .short("l")
                .long("log-config")
                .env("LOG_CONFIG_PATH")
                .value_name("LOG_CONFIG_PATH")
                .default_value("./configs/logger.toml")
                .help("Specifies custom path to bot's logger config file")
                .takes_value(true),
        );

    // Parse args
    let args: ArgMatches<'static> = app.get_matches();

    // Initiate logs
    let log_config = args.value_of("log-config").unwrap_or("./configs/logger.toml");
    log4rs::init_file(log_config, Default::default())?;

    log::debug!("{} version {} starting...", crate_name!(), crate_version!());

    let config = Config::from_args(&args)?;
    let bot = Bot::new(&config)?;

    if let Err(error) = bot.start_chat_processor().await {
        log::error!("Chat processor stopped: {}", error);
        return Err(error);
    }

    Ok(())
}
