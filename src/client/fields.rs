//! Endpoints de campos de apps

use reqwest::StatusCode;

use crate::client::PodioClient;
use crate::error::PodioResult;
use crate::types::{CreateFieldParams, Field, FieldConfig, FieldCreated};

/// A API responde 200 ou 204 dependendo da versão
const FIELD_UPDATE_STATUSES: &[StatusCode] = &[StatusCode::OK, StatusCode::NO_CONTENT];

impl PodioClient {
    /// GET /app/{app_id}/field/{field_id}
    pub async fn get_field(&self, app_id: &str, field_id: &str) -> PodioResult<Field> {
        self.get(&format!("/app/{}/field/{}", app_id, field_id)).await
    }

    /// Adiciona um campo ao app e devolve o campo relido
    pub async fn create_field(&self, app_id: &str, params: &CreateFieldParams) -> PodioResult<Field> {
        let created: FieldCreated = self
            .post_json(&format!("/app/{}/field/", app_id), params)
            .await?;

        self.get_field(app_id, &created.field_id.to_string()).await
    }

    /// Substitui a configuração do campo
    pub async fn update_field(
        &self,
        app_id: &str,
        field_id: &str,
        config: &FieldConfig,
    ) -> PodioResult<Field> {
        self.put_json(
            &format!("/app/{}/field/{}", app_id, field_id),
            config,
            FIELD_UPDATE_STATUSES,
        )
        .await?;

        self.get_field(app_id, field_id).await
    }

    /// Remove o campo; com `delete_values` os valores gravados nos items também somem
    pub async fn delete_field(&self, app_id: &str, field_id: &str, delete_values: bool) -> PodioResult<()> {
        self.delete(&format!(
            "/app/{}/field/{}?delete_values={}",
            app_id, field_id, delete_values
        ))
        .await
    }
}
