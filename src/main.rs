use offer_utils::configuration::get_configuration;
use offer_utils::startup::Application;
use offer_utils::telemetry::{get_subscriber, init_subscriber};

/// # tracing-subscriber
/// `tracing-subscriber` introduces a key trait into the picture, `Layer`, which makes it possible
/// to build a *processing pipeline* for spans data: we are not forced to provide an all
/// encompassing subscriber that does everything we want; we can instead combine multiple smaller
/// layers to obtain the processing pipeline we need.
///
/// The cornerstone of the layering approach is `Registry`. `Registry` does not actually record
/// traces itself: instead, it collects and stores span data that is exposed to any layer wrapping
/// it. See `telemetry::get_subscriber` for the layers we stack on top of it.
#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("offer_utils".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    // Panic if we can't read configuration
    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration).await?;

    tracing::info!(port = application.port(), "Offer utilities service is listening");
    application.run_until_stopped().await?;

    Ok(())
}
