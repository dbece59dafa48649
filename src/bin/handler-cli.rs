use clap::{Parser, Subcommand};
use reqwest::header::LOCATION;
use url::Url;

use protocol_handler::http::resolve::URL_PARAM;
use protocol_handler::protocol::interpret::decode_data;
use protocol_handler::protocol::{Payload, Scheme};

#[derive(Parser)]
#[command(name = "handler-cli")]
#[command(about = "Build, inspect and resolve custom protocol URLs", long_about = None)]
struct Cli {
    /// Base URL of the running handler service
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    /// Scheme used when building protocol URLs
    #[arg(short, long, default_value = "web+foo")]
    scheme: Scheme,

    /// Path of the resolve endpoint on the service
    #[arg(long, default_value = "/resolve")]
    resolve_path: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a protocol URL from a JSON object
    Encode { json: String },
    /// Print the JSON payload carried by a protocol URL
    Decode { protocol_url: String },
    /// Ask the service where it would send a protocol URL
    Resolve { protocol_url: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { json } => {
            let payload = Payload::from_json(&json)?;
            println!("{}", payload.to_protocol_url(&cli.scheme));
        }
        Commands::Decode { protocol_url } => {
            let data = decode_data(&protocol_url)?;
            println!("{}", data.as_str());
        }
        Commands::Resolve { protocol_url } => {
            let endpoint = Url::parse(&cli.url)?.join(&cli.resolve_path)?;
            let endpoint =
                Url::parse_with_params(endpoint.as_str(), &[(URL_PARAM, &protocol_url)])?;

            let client = reqwest::Client::builder()
                .redirect(reqwest::redirect::Policy::none())
                .build()?;
            let res = client.get(endpoint).send().await?;
            print_location(res);
        }
    }

    Ok(())
}

fn print_location(res: reqwest::Response) {
    let status = res.status();
    match res.headers().get(LOCATION).and_then(|v| v.to_str().ok()) {
        Some(location) if status.is_redirection() => println!("{}", location),
        _ => eprintln!("Error: resolve endpoint answered {} without a redirect", status),
    }
}
