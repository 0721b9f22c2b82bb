#[cfg(test)]
mod tests {
    use super::super::client::IconifyClient;
    use super::super::error::{Error, RemoteError};
    use super::super::testing::{MockTransport, Scripted, query_param, search_body};
    use super::super::types::SearchParams;
    use std::sync::Arc;

    const API: &str = "https://api.iconify.design";

    fn client_with(mock: MockTransport) -> (IconifyClient, Arc<MockTransport>) {
        let mock = Arc::new(mock);
        (IconifyClient::with_transport(API, mock.clone()), mock)
    }

    fn offline_client() -> IconifyClient {
        client_with(MockTransport::new(|_| Scripted::status(500))).0
    }

    #[test]
    fn test_icon_url_for_valid_ids() {
        let client = offline_client();
        assert_eq!(
            client.icon_url("mdi:home", 24).unwrap(),
            "https://api.iconify.design/mdi/home.svg?height=24"
        );
        assert_eq!(
            client.default_icon_url("lucide:search").unwrap(),
            "https://api.iconify.design/lucide/search.svg?height=24"
        );
        assert_eq!(
            client.icon_url("fa:user", 16).unwrap(),
            "https://api.iconify.design/fa/user.svg?height=16"
        );
    }

    #[test]
    fn test_icon_url_is_stable() {
        let client = offline_client();
        let first = client.icon_url("mdi:home", 32).unwrap();
        for _ in 0..10 {
            assert_eq!(client.icon_url("mdi:home", 32).unwrap(), first);
        }
    }

    #[test]
    fn test_icon_url_rejects_malformed_ids() {
        let client = offline_client();
        for bad in ["", "no-colon", ":noname", "noprefix:"] {
            let err = client.icon_url(bad, 24).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Invalid icon ID: \"{bad}\". Expected format \"prefix:name\".")
            );
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let mock = Arc::new(MockTransport::new(|_| Scripted::status(500)));
        let client = IconifyClient::with_transport("http://localhost:3000/", mock);
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.icon_url("mdi:home", 24).unwrap(),
            "http://localhost:3000/mdi/home.svg?height=24"
        );
    }

    #[tokio::test]
    async fn test_search_default_params() {
        let (client, mock) =
            client_with(MockTransport::new(|_| Scripted::ok(search_body(&["mdi:home"], 64))));

        let result = client.search("home", SearchParams::default()).await.unwrap();
        assert_eq!(result.icons, vec!["mdi:home"]);

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].as_str(),
            "https://api.iconify.design/search?query=home&limit=64"
        );
    }

    #[tokio::test]
    async fn test_search_passes_limit_and_start() {
        let (client, mock) =
            client_with(MockTransport::new(|_| Scripted::ok(search_body(&[], 10))));

        let params = SearchParams {
            limit: Some(10),
            start: Some(20),
        };
        client.search("home", params).await.unwrap();

        assert_eq!(
            mock.requests()[0].as_str(),
            "https://api.iconify.design/search?query=home&limit=10&start=20"
        );
    }

    #[tokio::test]
    async fn test_search_trims_and_substitutes_blank_query() {
        let (client, mock) =
            client_with(MockTransport::new(|_| Scripted::ok(search_body(&[], 64))));

        client.search("  arrow  ", SearchParams::default()).await.unwrap();
        client.search("   ", SearchParams::default()).await.unwrap();

        let requests = mock.requests();
        assert_eq!(query_param(&requests[0], "query").as_deref(), Some("arrow"));
        assert!(requests[1].as_str().contains("query=+"));
        assert_eq!(query_param(&requests[1], "query").as_deref(), Some(" "));
    }

    #[tokio::test]
    async fn test_search_non_success_status() {
        let (client, _) = client_with(MockTransport::new(|_| Scripted::status(500)));

        let err = client.search("home", SearchParams::default()).await.unwrap_err();
        assert_eq!(err, Error::Remote(RemoteError::Status { status: 500 }));
        assert_eq!(err.to_string(), "Iconify API error: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[tokio::test]
    async fn test_search_undecodable_body() {
        let (client, _) = client_with(MockTransport::new(|_| Scripted::ok("<html>")));

        let err = client.search("home", SearchParams::default()).await.unwrap_err();
        assert!(matches!(err, Error::Remote(RemoteError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_search_transport_failure() {
        let (client, _) = client_with(MockTransport::new(|_| Scripted {
            delay: std::time::Duration::ZERO,
            response: Err(RemoteError::Transport {
                details: "connection reset".to_string(),
            }),
        }));

        let err = client.search("home", SearchParams::default()).await.unwrap_err();
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection reset"));
    }

    #[tokio::test]
    async fn test_icon_svg_returns_body() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">...</svg>"#;
        let (client, mock) = client_with(MockTransport::new(move |_| Scripted::ok(svg)));

        assert_eq!(client.icon_svg("mdi:home", 24).await.unwrap(), svg);
        client.icon_svg("mdi:home", 48).await.unwrap();

        let requests = mock.requests();
        assert_eq!(
            requests[0].as_str(),
            "https://api.iconify.design/mdi/home.svg?height=24"
        );
        assert_eq!(
            requests[1].as_str(),
            "https://api.iconify.design/mdi/home.svg?height=48"
        );
    }

    #[tokio::test]
    async fn test_icon_svg_failure_names_icon() {
        let (client, _) = client_with(MockTransport::new(|_| Scripted::status(404)));

        let err = client.icon_svg("mdi:home", 24).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch icon \"mdi:home\": 404");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_icon_svg_invalid_id_never_hits_network() {
        let (client, mock) = client_with(MockTransport::new(|_| Scripted::ok("<svg/>")));

        let err = client.icon_svg("bad", 24).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Invalid icon ID: \"bad\". Expected format \"prefix:name\"."
        );
        assert_eq!(mock.request_count(), 0);
    }
}
