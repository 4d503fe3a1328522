use aegis_tickets::{create_router, create_router_with_config, AppConfig, MetricsBackend};

#[tokio::test]
#[serial_test::serial]
async fn router_builds_from_environment() {
    // ---
    std::env::remove_var("DATABASE_URL");
    std::env::remove_var("AEGIS_METRICS_TYPE");

    let _router = create_router().expect("Should be able to create router");
}

#[tokio::test]
async fn router_builds_with_noop_metrics() {
    // ---
    let mut config = AppConfig::default();
    config.metrics.backend = MetricsBackend::Noop;

    assert!(create_router_with_config(&config).is_ok());
}

#[tokio::test]
async fn malformed_database_url_does_not_prevent_startup() {
    // ---
    let mut config = AppConfig::default();
    config.database.database_url = Some("definitely not a url".to_string());

    assert!(create_router_with_config(&config).is_ok());
}
