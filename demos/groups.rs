use textmarketer::{Environment, GroupName, TextMarketerClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TextMarketerClient::new("", "", Environment::Sandbox)?;
    for group in client.get_groups()? {
        println!(
            "{:>6} {:<24} members: {:<6} stop: {}",
            group.id, group.name, group.numbers, group.is_stop
        );
    }

    if let Ok(name) = std::env::var("TEXTMARKETER_GROUP") {
        let group = client.get_group(&GroupName::new(name)?)?;
        for number in group.members {
            println!("  {number}");
        }
    }

    Ok(())
}
