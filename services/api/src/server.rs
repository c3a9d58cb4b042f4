use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::with_form_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use inquiry_relay::config::AppConfig;
use inquiry_relay::error::AppError;
use inquiry_relay::telemetry;
use inquiry_relay::workflows::careers::CareersService;
use inquiry_relay::workflows::contact::ContactService;
use inquiry_relay::workflows::delivery::SmtpEmailSender;
use inquiry_relay::workflows::ledger::GoogleSheetsAppender;
use inquiry_relay::workflows::EmailTemplates;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let templates = Arc::new(EmailTemplates::new()?);
    let mailer = Arc::new(SmtpEmailSender::from_config(&config.mail)?);
    let sheet = Arc::new(GoogleSheetsAppender::connect(&config.sheets.service_account()).await?);
    let routing = config.mail.routing();

    let contact = Arc::new(ContactService::new(
        mailer.clone(),
        sheet.clone(),
        routing.clone(),
        config.sheets.contact.clone(),
        templates.clone(),
    ));
    let careers = Arc::new(CareersService::new(
        mailer,
        sheet,
        routing,
        config.sheets.careers.clone(),
        templates,
    ));

    let app = with_form_routes(contact, careers, &config.http)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        operator = %config.mail.routing().operator,
        "inquiry relay ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
