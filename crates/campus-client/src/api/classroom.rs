//! Classroom management endpoints.

use crate::error::Result;
use crate::http::HttpClient;
use crate::types::{
    AddClassroomRequest, Classroom, ClassroomPageQuery, Page, UpdateClassroomRequest,
};

/// GET /v1/classroom/get. The uuid is optional; when omitted the backend
/// picks the default scope.
pub async fn get(client: &HttpClient, classroom_uuid: Option<&str>) -> Result<Classroom> {
    let query: Vec<(&str, &str)> = match classroom_uuid {
        Some(uuid) => vec![("classroom_uuid", uuid)],
        None => Vec::new(),
    };
    client.get("/v1/classroom/get", &query).await
}

/// POST /v1/classroom/add
pub async fn add(client: &HttpClient, request: &AddClassroomRequest) -> Result<()> {
    client.post_json("/v1/classroom/add", request).await
}

/// GET /v1/classroom/getPage
pub async fn get_page(client: &HttpClient, query: &ClassroomPageQuery) -> Result<Page<Classroom>> {
    client.get("/v1/classroom/getPage", query).await
}

/// PUT /v1/classroom/update
pub async fn update(client: &HttpClient, request: &UpdateClassroomRequest) -> Result<()> {
    client.put_query("/v1/classroom/update", request).await
}

/// DELETE /v1/classroom/delete
pub async fn delete(client: &HttpClient, classroom_uuid: &str) -> Result<()> {
    client
        .delete_query("/v1/classroom/delete", &[("classroom_uuid", classroom_uuid)])
        .await
}
