// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;
    use std::collections::HashMap;
    use std::env::VarError;

    fn lookup_from(
        vars: &[(&str, &str)],
    ) -> impl Fn(&str) -> std::result::Result<String, VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned().ok_or(VarError::NotPresent)
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, 8001);
        assert_eq!(config.host, defaults::HOST);
        assert_eq!(config.service_name, "Eyes Café Analytics Service");
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8001");
    }

    #[test]
    fn test_port_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_port_from_env() {
        let config = Config::from_lookup(lookup_from(&[("ANALYTICS_PORT", "9999")])).unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9999");
    }

    #[test]
    fn test_port_whitespace_trimmed() {
        let config = Config::from_lookup(lookup_from(&[("ANALYTICS_PORT", " 8080\n")])).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_unrelated_vars_ignored() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "3000")])).unwrap();
        assert_eq!(config.port, 8001);
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("ANALYTICS_PORT", "abc")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("ANALYTICS_PORT"));
    }

    #[test]
    fn test_out_of_range_port_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("ANALYTICS_PORT", "70000")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_empty_port_is_config_error() {
        let result = Config::from_lookup(lookup_from(&[("ANALYTICS_PORT", "")]));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_unicode_port_is_config_error() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let err = Config::from_lookup(|key| {
            if key == env_vars::PORT {
                Err(VarError::NotUnicode(OsString::from_vec(b"80\xff".to_vec())))
            } else {
                Err(VarError::NotPresent)
            }
        })
        .unwrap_err();

        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains("ANALYTICS_PORT"));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        // ANALYTICS_PORT is never set by the test harness
        if std::env::var_os(env_vars::PORT).is_none() {
            assert_eq!(Config::from_env().unwrap().port, defaults::PORT);
        }
    }

    #[test]
    fn test_loopback_config() {
        let config = Config::loopback(0);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:0");
        assert_eq!(config.service_name, defaults::SERVICE_NAME);
    }
}
