use textmarketer::{DeliveryReportQuery, Environment, ReportName, TextMarketerClient};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = TextMarketerClient::new("", "", Environment::Sandbox)?;
    let listing = client.get_delivery_reports()?;
    println!("directory: {}", listing.userdirectory);
    for report in &listing.reports {
        println!("{} ({}) updated {}", report.name, report.extension, report.last_updated);
    }

    let mut query = DeliveryReportQuery::new(ReportName::all());
    if let Ok(custom) = std::env::var("TEXTMARKETER_CUSTOM") {
        query = query.custom(custom);
    }
    for report in client.get_delivery_report(&query)? {
        for row in report.rows {
            println!(
                "{} {} {} {}",
                row.message_id, row.mobile_number, row.status, row.last_updated
            );
        }
    }

    Ok(())
}
