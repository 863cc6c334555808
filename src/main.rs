use address_generator::app::App;
use address_generator::config::Config;
use anyhow::{anyhow, Result};
use clap::{crate_version, App as Cli, Arg};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("address-generator")
        .version(crate_version!())
        .about("Generate fake people and addresses for a chosen country")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("widgets")
                .short("w")
                .long("widgets")
                .value_name("N")
                .help("Mount N default widgets instead of the configured mount points")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("endpoint")
                .short("e")
                .long("endpoint")
                .value_name("URL")
                .help("Override the random user API endpoint")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(endpoint) = matches.value_of("endpoint") {
        config.endpoint = endpoint.to_string();
    }

    let widget_count = match matches.value_of("widgets") {
        Some(value) => Some(
            value
                .parse::<usize>()
                .map_err(|e| anyhow!("Invalid widget count '{}': {}", value, e))?,
        ),
        None => None,
    };

    App::start(config, widget_count).await
}
