//! Endpoints de apps

use reqwest::StatusCode;

use crate::client::PodioClient;
use crate::error::{PodioError, PodioResult};
use crate::types::{AppCreated, Application, CreateApplicationParams};

impl PodioClient {
    /// GET /app/{app_id}
    pub async fn get_application(&self, app_id: &str) -> PodioResult<Application> {
        self.get(&format!("/app/{}", app_id)).await
    }

    /// Apps ativos do space
    pub async fn get_applications(&self, space_id: &str) -> PodioResult<Vec<Application>> {
        self.get(&format!("/app/space/{}/?include_inactive=false", space_id))
            .await
    }

    /// Cria o app no space informado e devolve o app completo
    ///
    /// O `space_id` vai no corpo como inteiro. Um valor não numérico falha
    /// com [`PodioError::InvalidId`] antes de qualquer requisição.
    pub async fn create_application(
        &self,
        space_id: &str,
        params: &CreateApplicationParams,
    ) -> PodioResult<Application> {
        let space_id: u64 = space_id.trim().parse().map_err(|_| PodioError::InvalidId {
            kind: "space",
            value: space_id.to_string(),
        })?;

        let body = CreateApplicationParams {
            space_id: Some(space_id),
            ..params.clone()
        };

        let created: AppCreated = self.post_json("/app/", &body).await?;
        tracing::debug!("App {} criado no space {}", created.app_id, space_id);

        self.get_application(&created.app_id.to_string()).await
    }

    /// PUT /app/{app_id} (espera 204) seguido de releitura
    pub async fn update_application(
        &self,
        app_id: &str,
        params: &CreateApplicationParams,
    ) -> PodioResult<Application> {
        self.put_json(&format!("/app/{}", app_id), params, &[StatusCode::NO_CONTENT])
            .await?;

        self.get_application(app_id).await
    }

    pub async fn delete_application(&self, app_id: &str) -> PodioResult<()> {
        self.delete(&format!("/app/{}", app_id)).await
    }
}
