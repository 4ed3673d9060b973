//! Endpoints de organizações

use crate::client::PodioClient;
use crate::error::PodioResult;
use crate::types::Organization;

/// Prefixo das URLs públicas de organizações
const ORG_URL_PREFIX: &str = "https://podio.com/";

impl PodioClient {
    /// GET /org/{org_id}
    pub async fn get_organization(&self, org_id: &str) -> PodioResult<Organization> {
        self.get(&format!("/org/{}", org_id)).await
    }

    /// Busca a organização pelo slug da URL (`https://podio.com/{slug}`)
    pub async fn get_organization_by_slug(&self, slug: &str) -> PodioResult<Organization> {
        let org_url = format!("{}{}", ORG_URL_PREFIX, slug.trim_matches('/'));
        self.get(&format!("/org/url?url={}", urlencoding::encode(&org_url)))
            .await
    }

    /// GET /org/ - organizações do usuário autenticado, com seus spaces
    pub async fn get_organizations(&self) -> PodioResult<Vec<Organization>> {
        self.get("/org/").await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::PodioClient;
    use crate::config::ClientOptions;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PodioClient {
        PodioClient::new(ClientOptions::new("client", "shh").with_api_url(server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_organization() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/org/12"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "org_id": 12,
                "name": "Acme",
                "logo": 321,
                "created_by": {"user_id": 1, "name": "Ana"}
            })))
            .mount(&server)
            .await;

        let org = client_for(&server).get_organization("12").await.unwrap();

        assert_eq!(org.org_id, 12);
        assert_eq!(org.name.as_deref(), Some("Acme"));
        assert_eq!(org.logo, Some(321));
    }

    #[tokio::test]
    async fn test_get_organization_by_slug() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/org/url"))
            .and(query_param("url", "https://podio.com/acme"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"org_id": 12, "url_label": "acme"})))
            .expect(1)
            .mount(&server)
            .await;

        let org = client_for(&server).get_organization_by_slug("acme").await.unwrap();

        assert_eq!(org.url_label.as_deref(), Some("acme"));
    }

    #[tokio::test]
    async fn test_get_organizations_with_spaces() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/org/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"org_id": 1, "name": "Acme", "spaces": [{"space_id": 10, "name": "Sales"}]},
                {"org_id": 2, "name": "Globex"}
            ])))
            .mount(&server)
            .await;

        let orgs = client_for(&server).get_organizations().await.unwrap();

        assert_eq!(orgs.len(), 2);
        assert_eq!(orgs[0].spaces.as_ref().unwrap()[0].space_id, 10);
        assert!(orgs[1].spaces.is_none());
    }

    #[tokio::test]
    async fn test_get_organization_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/org/404"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such org"))
            .mount(&server)
            .await;

        let error = client_for(&server).get_organization("404").await.unwrap_err();

        assert!(error.is_not_found());
        assert_eq!(error.body(), Some("no such org"));
    }
}
