use crate::configuration::Settings;
use crate::routes;
use crate::task_queue::TaskQueueClient;
use actix_web::{dev::Server, web, App, HttpServer};
use std::io::ErrorKind;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, std::io::Error> {
        let timeout = configuration.task_queue.timeout();
        let task_queue = TaskQueueClient::new(
            configuration.task_queue.base_url,
            configuration.task_queue.authorization_token,
            timeout,
        )
        .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );

        let listener = TcpListener::bind(address)?;
        // Retrieve the port assigned to us by the OS
        let port = listener.local_addr()?.port();
        let server = run(listener, task_queue)?;

        // We "save" the bound port in one of `Application`'s fields.
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// A more expressive name that makes it clear that this function only returns when the application
    /// is stopped.
    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

/// `HttpServer::new` takes a closure that builds an `App` for every worker thread, so anything
/// captured by the closure must be cheap to clone. `web::Data` wraps the task queue client in an
/// `Arc`: every worker shares the same client and, with it, the same connection pool.
pub fn run(listener: TcpListener, task_queue: TaskQueueClient) -> Result<Server, std::io::Error> {
    let task_queue = web::Data::new(task_queue);
    let server = HttpServer::new(move || {
        App::new()
            // Instead of `Logger::default`
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(routes::health_check))
            .route("/benefits/format", web::post().to(routes::format_benefit))
            .route(
                "/offer_assignments/email",
                web::post().to(routes::email_offer_assignment),
            )
            .app_data(task_queue.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
