use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};

use crate::configuration::ContactSettings;
use crate::email_client::EmailClient;
use crate::routes;
use tracing_actix_web::TracingLogger;

pub fn run(
    listener: TcpListener,
    email_client: EmailClient,
    contact: ContactSettings,
) -> Result<Server, std::io::Error> {
    let email_client = Data::new(email_client);
    let contact = Data::new(contact);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(routes::health_check::health_check))
            .route("/", web::get().to(routes::home::home))
            .route("/api/contact", web::post().to(routes::contact::submit_contact))
            .app_data(email_client.clone())
            .app_data(contact.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
