use std::net::TcpListener;

use csouth_web::configuration::get_configuration;
use csouth_web::email_client::EmailClient;
use csouth_web::startup::run;
use csouth_web::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("csouth-web".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read config file");
    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;

    let sender_email = config
        .email_client
        .sender()
        .expect("Invalid sender email found in config");
    let timeout = config.email_client.timeout();
    let email_client = EmailClient::new(
        config.email_client.base_url,
        sender_email,
        config.email_client.authorization_token,
        timeout,
    );

    run(listener, email_client, config.contact)?.await
}
