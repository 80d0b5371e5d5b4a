use textmarketer::{Environment, TextMarketerClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Credentials come from TEXTMARKETER_USERNAME / TEXTMARKETER_PASSWORD.
    let client = TextMarketerClient::new("", "", Environment::Sandbox)?;
    if !client.is_login_valid()? {
        eprintln!("credentials were rejected");
        return Ok(());
    }

    println!("credits: {}", client.get_credits()?);
    Ok(())
}
