//! Endpoints de spaces

use reqwest::StatusCode;

use crate::client::PodioClient;
use crate::error::PodioResult;
use crate::types::{CreateSpaceParams, Space, SpaceCreated};

impl PodioClient {
    /// GET /space/{space_id}
    pub async fn get_space(&self, space_id: &str) -> PodioResult<Space> {
        self.get(&format!("/space/{}", space_id)).await
    }

    /// Busca o space pela URL completa (ex.: `https://podio.com/acme/vendas`)
    pub async fn get_space_by_url(&self, space_url: &str) -> PodioResult<Space> {
        self.get(&format!("/space/url?url={}", urlencoding::encode(space_url)))
            .await
    }

    /// GET /org/{org_id}/space/ - spaces da organização visíveis ao usuário
    pub async fn get_spaces(&self, org_id: &str) -> PodioResult<Vec<Space>> {
        self.get(&format!("/org/{}/space/", org_id)).await
    }

    /// Cria o space e devolve a representação completa
    ///
    /// O `POST /space/` só confirma ID e URL, então o space é relido em
    /// seguida para trazer os valores padrão do servidor.
    pub async fn create_space(&self, params: &CreateSpaceParams) -> PodioResult<Space> {
        let created: SpaceCreated = self.post_json("/space/", params).await?;
        tracing::debug!("Space {} criado, relendo", created.space_id);

        self.get_space(&created.space_id.to_string()).await
    }

    /// Atualiza o space (espera 204) e devolve o estado atual
    pub async fn update_space(&self, space_id: &str, params: &CreateSpaceParams) -> PodioResult<Space> {
        self.put_json(&format!("/space/{}", space_id), params, &[StatusCode::NO_CONTENT])
            .await?;

        self.get_space(space_id).await
    }

    /// DELETE /space/{space_id}
    pub async fn delete_space(&self, space_id: &str) -> PodioResult<()> {
        self.delete(&format!("/space/{}", space_id)).await
    }
}
