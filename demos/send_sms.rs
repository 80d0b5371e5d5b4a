use std::io;

use textmarketer::{Environment, SendOptions, SendSms, TextMarketerClient, TextMarketerError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mobile_number = std::env::var("TEXTMARKETER_MOBILE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "TEXTMARKETER_MOBILE environment variable is required",
        )
    })?;
    let message = std::env::var("TEXTMARKETER_MESSAGE")
        .unwrap_or_else(|_| "Hello from the textmarketer demo.".to_owned());

    let client = TextMarketerClient::new("", "", Environment::Sandbox)?;
    let request = SendSms::new(message, mobile_number, "Demo", SendOptions::default());

    match client.send_sms(&request) {
        Ok(result) => println!(
            "status: {}, message_id: {}, credits_used: {}",
            result.status, result.message_id, result.credits_used
        ),
        Err(err @ TextMarketerError::Gateway { .. }) => {
            eprintln!("{err}");
            for (code, message) in client.last_errors() {
                eprintln!("  {code}: {message}");
            }
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
