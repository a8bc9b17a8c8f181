mod error;
mod reminder;
mod shared;
mod status;

use actix_web::{dev::Server, middleware, web, App, HttpServer};
use reminder_server_infra::ReminderContext;
use shared::cors::cors;
use std::net::TcpListener;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub fn configure_server_api(cfg: &mut web::ServiceConfig) {
    // Preflight goes first so that it answers `OPTIONS` on every path
    shared::cors::configure_routes(cfg);
    reminder::configure_routes(cfg);
    status::configure_routes(cfg);
}

pub struct Application {
    server: Server,
    port: u16,
}

impl Application {
    pub async fn new(context: ReminderContext) -> Result<Self, std::io::Error> {
        let (server, port) = Application::configure_server(context).await?;

        Ok(Self { server, port })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    async fn configure_server(
        context: ReminderContext,
    ) -> Result<(Server, u16), std::io::Error> {
        let port = context.config.port;
        let address = format!("0.0.0.0:{}", port);
        let listener = TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        info!(
            "Starting reminder server on port {} with data file: {}",
            port,
            context.config.data_file.display()
        );

        let server = HttpServer::new(move || {
            let ctx = context.clone();

            App::new()
                .wrap(cors())
                .wrap(middleware::Compress::default())
                .wrap(TracingLogger::default())
                .app_data(web::Data::new(ctx))
                .configure(configure_server_api)
        })
        .listen(listener)?
        .workers(4)
        .run();

        Ok((server, port))
    }

    pub async fn start(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
