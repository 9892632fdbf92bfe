//! Building management endpoints.
//!
//! The backend takes building mutations as query parameters, not bodies.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{Building, BuildingPageQuery, Page};

/// GET /v1/building/getPage
pub async fn get_page(client: &HttpClient, query: &BuildingPageQuery) -> Result<Page<Building>> {
    client.get("/v1/building/getPage", query).await
}

/// GET /v1/building/get
pub async fn get(client: &HttpClient, building_uuid: &str) -> Result<Building> {
    client
        .get("/v1/building/get", &[("building_uuid", building_uuid)])
        .await
}

/// POST /v1/building/add
pub async fn add(client: &HttpClient, building_num: &str, building_name: &str) -> Result<()> {
    client
        .post_query(
            "/v1/building/add",
            &[
                ("building_num", building_num),
                ("building_name", building_name),
            ],
        )
        .await
}

/// PUT /v1/building/update
pub async fn update(
    client: &HttpClient,
    building_uuid: &str,
    building_num: &str,
    building_name: &str,
) -> Result<()> {
    client
        .put_query(
            "/v1/building/update",
            &[
                ("building_uuid", building_uuid),
                ("building_num", building_num),
                ("building_name", building_name),
            ],
        )
        .await
}

/// DELETE /v1/building/delete
pub async fn delete(client: &HttpClient, building_uuid: &str) -> Result<()> {
    client
        .delete_query("/v1/building/delete", &[("building_uuid", building_uuid)])
        .await
}
