//! Tests for ch-gateway.  No network: only construction and decoding.

#[cfg(test)]
mod config_tests {
    use crate::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, ENV_API_KEY, GatewayConfig};

    #[test]
    fn defaults_point_at_local_service() {
        let config = GatewayConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn environment_key_overrides_configured_key() {
        let config = GatewayConfig::new("http://x", "from-file")
            .with_key_from(|k| (k == ENV_API_KEY).then(|| "from-env".to_owned()));
        assert_eq!(config.api_key, "from-env");
    }

    #[test]
    fn blank_environment_key_is_ignored() {
        let config = GatewayConfig::new("http://x", "from-file").with_key_from(|_| Some("  ".into()));
        assert_eq!(config.api_key, "from-file");
        let config = GatewayConfig::new("http://x", "from-file").with_key_from(|_| None);
        assert_eq!(config.api_key, "from-file");
    }

    #[test]
    fn api_key_is_not_serialized() {
        let text = serde_json::to_string(&GatewayConfig::new("http://x", "secret")).unwrap();
        assert!(!text.contains("secret"));
    }
}

#[cfg(test)]
mod client_tests {
    use crate::{GatewayConfig, GatewayError, HttpGateway, MapConfig};

    #[test]
    fn endpoint_trims_trailing_slash() {
        let gateway = HttpGateway::new(&GatewayConfig::new("http://localhost:8080/", "k")).unwrap();
        assert_eq!(gateway.endpoint("/api/game"), "http://localhost:8080/api/game");
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let result = HttpGateway::new(&GatewayConfig::new(" / ", "k"));
        assert!(matches!(result, Err(GatewayError::Config(_))));
    }

    #[test]
    fn map_config_keeps_unknown_fields() {
        let config: MapConfig =
            serde_json::from_str(r#"{ "name": "Turbohill", "ticks": 288, "maxCars": 40, "zones": 3 }"#)
                .unwrap();
        assert_eq!(config.ticks, Some(288));
        assert_eq!(config.max_cars, Some(40));
        assert_eq!(config.other.get("zones"), Some(&serde_json::json!(3)));
    }

    #[test]
    fn status_error_names_url_and_code() {
        let err = GatewayError::Status {
            url:    "http://x/api/game".into(),
            status: 401,
            body:   "bad key".into(),
        };
        assert_eq!(err.to_string(), "http://x/api/game returned 401: bad key");
    }
}
