// Datapoints - Free and Open Source Software Statement
//
// This project, datapoints, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/client_test.rs
// Version: 1.0.0
//
// This file contains tests for the Datapoints API client, located in the
// tests directory. It covers endpoint URL construction, form-pair encoding
// of the payload types, and every branch of the response validator, all
// without touching the network.
//
// Tree Location:
// - tests/client_test.rs (API client tests)
// - Depends on: datapoints, serde_json

#[cfg(test)]
mod tests {
    use datapoints::client::{ApiError, Client, ClientConfig, GroupData, GroupVars, Var, validate_response};

    fn test_client() -> Client {
        Client::new(ClientConfig {
            url: "http://localhost:3323".to_string(),
            key: "KEY".to_string(),
            secret: "SECRET".to_string(),
            ..ClientConfig::default()
        })
        .expect("valid config")
    }

    #[test]
    fn test_endpoint_url_layout() {
        let client = test_client();
        assert_eq!(
            client.endpoint_url("get-vars"),
            "http://localhost:3323/api/1/KEY/SECRET/get-vars"
        );
        assert_eq!(
            client.endpoint_url("group/add-vars"),
            "http://localhost:3323/api/1/KEY/SECRET/group/add-vars"
        );
    }

    #[test]
    fn test_trailing_slash_in_url_is_tolerated() {
        let client = Client::new(ClientConfig {
            url: "http://localhost:3323/".to_string(),
            key: "KEY".to_string(),
            secret: "SECRET".to_string(),
            ..ClientConfig::default()
        })
        .expect("valid config");
        assert_eq!(
            client.endpoint_url("groups"),
            "http://localhost:3323/api/1/KEY/SECRET/groups"
        );
    }

    #[test]
    fn test_missing_credentials_are_rejected() {
        let missing_key = Client::new(ClientConfig {
            secret: "SECRET".to_string(),
            ..ClientConfig::default()
        });
        assert!(matches!(missing_key, Err(ApiError::Config(_))));

        let missing_secret = Client::new(ClientConfig {
            key: "KEY".to_string(),
            ..ClientConfig::default()
        });
        assert!(matches!(missing_secret, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_var_form_pairs() {
        let var = Var {
            uuid: Some("70d950f0".to_string()),
            name: "VAR BY API".to_string(),
            value: "-VALUE-".to_string(),
            color: Some("#FEE720".to_string()),
            is_currency: Some(true),
            is_public: None,
            by: None,
        };
        assert_eq!(
            var.form_pairs(),
            vec![
                ("uuid", "70d950f0".to_string()),
                ("name", "VAR BY API".to_string()),
                ("value", "-VALUE-".to_string()),
                ("color", "#FEE720".to_string()),
                ("isCurrency", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_group_form_pairs_repeat_datapoints_key() {
        let group = GroupData {
            uuid: None,
            name: "GROUP BY API".to_string(),
            datapoints: vec!["aaa".to_string(), "bbb".to_string()],
        };
        assert_eq!(
            group.form_pairs(),
            vec![
                ("name", "GROUP BY API".to_string()),
                ("datapoints", "aaa".to_string()),
                ("datapoints", "bbb".to_string()),
            ]
        );
    }

    #[test]
    fn test_group_vars_all_flag_sent_only_when_set() {
        let explicit = GroupVars {
            uuid: "17a97fb0".to_string(),
            datapoints: vec!["ccc".to_string()],
            all: false,
        };
        assert_eq!(
            explicit.form_pairs(),
            vec![
                ("uuid", "17a97fb0".to_string()),
                ("datapoints", "ccc".to_string()),
            ]
        );

        let clear_all = GroupVars {
            uuid: "17a97fb0".to_string(),
            datapoints: vec![],
            all: true,
        };
        assert_eq!(
            clear_all.form_pairs(),
            vec![
                ("uuid", "17a97fb0".to_string()),
                ("all", "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_validate_response_accepts_json_documents() {
        let data = validate_response(200, r#"{"newItem":{"name":"-TEST-"}}"#).expect("valid body");
        assert_eq!(data["newItem"]["name"], "-TEST-");

        let list = validate_response(200, r#"[{"name":"a"}]"#).expect("arrays are valid");
        assert!(list.is_array());
    }

    #[test]
    fn test_validate_response_rejects_malformed_bodies() {
        assert!(matches!(
            validate_response(200, ""),
            Err(ApiError::InvalidResponse)
        ));
        assert!(matches!(
            validate_response(200, "<html>oops</html>"),
            Err(ApiError::InvalidResponse)
        ));
        // A bare JSON string is not a usable document
        assert!(matches!(
            validate_response(200, r#""just a string""#),
            Err(ApiError::InvalidResponse)
        ));
    }

    #[test]
    fn test_validate_response_rejects_non_200_status() {
        assert!(matches!(
            validate_response(500, r#"{"ok":true}"#),
            Err(ApiError::InvalidResponse)
        ));
        assert!(matches!(
            validate_response(404, r#"{"ok":true}"#),
            Err(ApiError::InvalidResponse)
        ));
    }

    #[test]
    fn test_validate_response_passes_server_errors_through() {
        let err = validate_response(200, r#"{"error":"Unknown variable."}"#);
        match err {
            Err(ApiError::Server(message)) => assert_eq!(message, "Unknown variable."),
            other => panic!("expected server error, got {:?}", other),
        }

        // Non-string error payloads pass through as compact JSON
        let err = validate_response(200, r#"{"error":{"code":7}}"#);
        match err {
            Err(ApiError::Server(message)) => assert_eq!(message, r#"{"code":7}"#),
            other => panic!("expected server error, got {:?}", other),
        }
    }
}

// Changelog:
// - v1.0.0: Initial client test suite.
//   - Purpose: Locks in the endpoint URL contract, repeated-key form
//     encoding, and the three-error response validation contract.
