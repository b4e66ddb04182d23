use csouth_web::configuration::get_configuration;
use csouth_web::email_client::EmailClient;
use csouth_web::startup::run;
use csouth_web::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;
use std::net::TcpListener;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    /// Stand-in for the email provider.
    pub email_server: MockServer,
    pub notify_email: String,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read config file");
    // Point the client at the mock provider and keep its timeout short
    config.email_client.base_url = email_server.uri();
    config.email_client.timeout_milliseconds = 200;

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    // We retrieve the port assigned to us by the OS
    let port = listener.local_addr().unwrap().port();

    let sender_email = config
        .email_client
        .sender()
        .expect("Invalid email found in config");
    let timeout = config.email_client.timeout();
    let email_client = EmailClient::new(
        config.email_client.base_url.clone(),
        sender_email,
        config.email_client.authorization_token.clone(),
        timeout,
    );

    let notify_email = config.contact.notify_email.clone();
    let server = run(listener, email_client, config.contact).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    // We return the application address to the caller!
    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        email_server,
        notify_email,
    }
}
