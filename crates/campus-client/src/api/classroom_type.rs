//! Classroom type endpoints. Read-only.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{ClassroomType, ClassroomTypePageQuery, Page};

/// GET /v1/classroomType/getPage
pub async fn get_page(
    client: &HttpClient,
    query: &ClassroomTypePageQuery,
) -> Result<Page<ClassroomType>> {
    client.get("/v1/classroomType/getPage", query).await
}

/// GET /v1/classroomType/get
pub async fn get(client: &HttpClient, classroom_type_uuid: &str) -> Result<ClassroomType> {
    client
        .get(
            "/v1/classroomType/get",
            &[("classroom_type_uuid", classroom_type_uuid)],
        )
        .await
}
