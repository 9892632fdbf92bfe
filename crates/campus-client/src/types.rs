//! Wire types for the campus backend.
//!
//! Field casing follows the backend: envelope-level and request fields are
//! snake_case, the role-specific user info DTOs are camelCase.

use serde::{Deserialize, Serialize};

/// Role of the logged-in user. Determines which info DTO the login
/// response carries. Unknown wire values fail the decode; there is no
/// silent fallback to a default role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    Student,
    Teacher,
    AcademicAdmin,
    SystemAdmin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "STUDENT",
            UserType::Teacher => "TEACHER",
            UserType::AcademicAdmin => "ACADEMIC_ADMIN",
            UserType::SystemAdmin => "SYSTEM_ADMIN",
        }
    }
}

impl std::str::FromStr for UserType {
    type Err = UnknownUserType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STUDENT" => Ok(UserType::Student),
            "TEACHER" => Ok(UserType::Teacher),
            "ACADEMIC_ADMIN" => Ok(UserType::AcademicAdmin),
            "SYSTEM_ADMIN" => Ok(UserType::SystemAdmin),
            _ => Err(UnknownUserType(s.to_string())),
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown user type: {0}")]
pub struct UnknownUserType(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfo {
    pub student_uuid: String,
    pub student_id: String,
    pub student_name: String,
    pub class_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherInfo {
    pub teacher_uuid: String,
    pub teacher_num: String,
    pub teacher_name: String,
    pub title: String,
    pub max_hours_per_week: u32,
    pub is_active: bool,
    pub like_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicAdminInfo {
    pub academic_uuid: String,
    pub department_uuid: String,
    pub academic_num: String,
    pub academic_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemAdminInfo {
    pub admin_uuid: String,
    pub admin_username: String,
}

/// Role-specific profile, tagged by user type so the persisted blob
/// round-trips unambiguously.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "user_type")]
pub enum UserInfo {
    #[serde(rename = "STUDENT")]
    Student(StudentInfo),
    #[serde(rename = "TEACHER")]
    Teacher(TeacherInfo),
    #[serde(rename = "ACADEMIC_ADMIN")]
    AcademicAdmin(AcademicAdminInfo),
    #[serde(rename = "SYSTEM_ADMIN")]
    SystemAdmin(SystemAdminInfo),
}

impl UserInfo {
    pub fn user_type(&self) -> UserType {
        match self {
            UserInfo::Student(_) => UserType::Student,
            UserInfo::Teacher(_) => UserType::Teacher,
            UserInfo::AcademicAdmin(_) => UserType::AcademicAdmin,
            UserInfo::SystemAdmin(_) => UserType::SystemAdmin,
        }
    }
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub user_type: UserType,
    pub user_name: String,
    pub password: String,
}

/// Login response: the token plus exactly one role info field, selected by
/// `user_type`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user_type: UserType,
    pub token: String,
    #[serde(default)]
    pub student_info: Option<StudentInfo>,
    #[serde(default)]
    pub teacher_info: Option<TeacherInfo>,
    #[serde(default)]
    pub academic_admin_info: Option<AcademicAdminInfo>,
    #[serde(default)]
    pub system_admin_info: Option<SystemAdminInfo>,
}

impl LoginResponse {
    /// Pick the info field matching `user_type`. `None` when the backend
    /// claimed a role but omitted its profile.
    pub fn user_info(&self) -> Option<UserInfo> {
        match self.user_type {
            UserType::Student => self.student_info.clone().map(UserInfo::Student),
            UserType::Teacher => self.teacher_info.clone().map(UserInfo::Teacher),
            UserType::AcademicAdmin => self.academic_admin_info.clone().map(UserInfo::AcademicAdmin),
            UserType::SystemAdmin => self.system_admin_info.clone().map(UserInfo::SystemAdmin),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    pub new_password: String,
    pub confirm_password: String,
}

/// Generic pagination envelope. `records` keeps the server's ordering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub page: u64,
    pub size: u64,
    pub total: u64,
    pub records: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub building_uuid: String,
    pub building_num: String,
    pub building_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    pub classroom_uuid: String,
    pub building_uuid: String,
    pub classroom_name: String,
    pub classroom_capacity: u32,
    pub classroom_type_uuid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomType {
    pub classroom_type_uuid: String,
    pub classroom_type_name: String,
}

/// Query for `/v1/building/getPage`. Optional filters are omitted from the
/// query string entirely when unset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BuildingPageQuery {
    pub page: u64,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_num: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassroomPageQuery {
    pub page: u64,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classroom_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classroom_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classroom_type_uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassroomTypePageQuery {
    pub page: u64,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classroom_type_name: Option<String>,
}

/// Body for `/v1/classroom/add`. The backend names the capacity field
/// `capacity` here but `classroom_capacity` everywhere else.
#[derive(Debug, Clone, Serialize)]
pub struct AddClassroomRequest {
    pub building_uuid: String,
    pub classroom_name: String,
    pub capacity: u32,
    pub classroom_type_uuid: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateClassroomRequest {
    pub classroom_uuid: String,
    pub building_uuid: String,
    pub classroom_name: String,
    pub classroom_capacity: u32,
    pub classroom_type_uuid: String,
}
