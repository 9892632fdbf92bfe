//! Durable session storage.
//!
//! Three keys under one directory, one file per key: the bearer token, the
//! user type, and the role-specific user info blob. This is the single
//! durable copy of the session; [`crate::session::Session`] owns the
//! in-memory copy and is the only writer.
//!
//! Reads never fail: a missing file is `None`, and a corrupted user info
//! blob logs a warning and reads as `None` rather than propagating a parse
//! error.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::{UserInfo, UserType};

const TOKEN_FILE: &str = "token";
const USER_TYPE_FILE: &str = "user_type";
const USER_INFO_FILE: &str = "user_info.json";

/// File-backed key-value store for the persisted session.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    root: PathBuf,
}

impl SessionStorage {
    /// Store rooted at an explicit directory. The directory is created on
    /// first write, not here.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at `$HOME/.campus`, or the current directory when no
    /// home can be resolved.
    pub fn default_location() -> Self {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(home.join(".campus"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn set_token(&self, token: &str) -> Result<()> {
        self.write(TOKEN_FILE, token)
    }

    pub fn token(&self) -> Option<String> {
        self.read(TOKEN_FILE)
    }

    pub fn remove_token(&self) {
        self.remove(TOKEN_FILE);
    }

    pub fn set_user_type(&self, user_type: UserType) -> Result<()> {
        self.write(USER_TYPE_FILE, user_type.as_str())
    }

    pub fn user_type(&self) -> Option<UserType> {
        let raw = self.read(USER_TYPE_FILE)?;
        match raw.parse() {
            Ok(user_type) => Some(user_type),
            Err(_) => {
                tracing::warn!(value = %raw, "Ignoring unrecognized persisted user type");
                None
            }
        }
    }

    pub fn remove_user_type(&self) {
        self.remove(USER_TYPE_FILE);
    }

    pub fn set_user_info(&self, user_info: &UserInfo) -> Result<()> {
        let json = serde_json::to_string(user_info)?;
        self.write(USER_INFO_FILE, &json)
    }

    /// Read the persisted user info blob. Malformed JSON degrades to
    /// `None` instead of failing the caller.
    pub fn user_info(&self) -> Option<UserInfo> {
        let raw = self.read(USER_INFO_FILE)?;
        match serde_json::from_str(&raw) {
            Ok(info) => Some(info),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring corrupted persisted user info");
                None
            }
        }
    }

    pub fn remove_user_info(&self) {
        self.remove(USER_INFO_FILE);
    }

    /// Remove all three session keys.
    pub fn clear_auth(&self) {
        self.remove_token();
        self.remove_user_info();
        self.remove_user_type();
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.root.join(key), value)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        match fs::read_to_string(self.root.join(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to read session key");
                None
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Err(e) = fs::remove_file(self.root.join(key)) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(key, error = %e, "Failed to remove session key");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeacherInfo;

    fn temp_storage() -> (tempfile::TempDir, SessionStorage) {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = SessionStorage::new(dir.path().join("session"));
        (dir, storage)
    }

    fn teacher_info() -> UserInfo {
        UserInfo::Teacher(TeacherInfo {
            teacher_uuid: "t-uuid".to_string(),
            teacher_num: "T001".to_string(),
            teacher_name: "Ada".to_string(),
            title: "Lecturer".to_string(),
            max_hours_per_week: 12,
            is_active: true,
            like_time: "morning".to_string(),
        })
    }

    #[test]
    fn token_round_trip() {
        let (_dir, storage) = temp_storage();
        assert_eq!(storage.token(), None);
        storage.set_token("abc").unwrap();
        assert_eq!(storage.token().as_deref(), Some("abc"));
        storage.remove_token();
        assert_eq!(storage.token(), None);
    }

    #[test]
    fn user_info_round_trip() {
        let (_dir, storage) = temp_storage();
        let info = teacher_info();
        storage.set_user_info(&info).unwrap();
        assert_eq!(storage.user_info(), Some(info));
    }

    #[test]
    fn corrupted_user_info_reads_as_none() {
        let (_dir, storage) = temp_storage();
        storage.set_token("x").unwrap();
        fs::write(storage.root().join(USER_INFO_FILE), "{not json").unwrap();
        assert_eq!(storage.user_info(), None);
    }

    #[test]
    fn unrecognized_user_type_reads_as_none() {
        let (_dir, storage) = temp_storage();
        storage.set_user_type(UserType::Teacher).unwrap();
        assert_eq!(storage.user_type(), Some(UserType::Teacher));
        fs::write(storage.root().join(USER_TYPE_FILE), "JANITOR").unwrap();
        assert_eq!(storage.user_type(), None);
    }

    #[test]
    fn clear_auth_removes_everything() {
        let (_dir, storage) = temp_storage();
        storage.set_token("abc").unwrap();
        storage.set_user_type(UserType::Student).unwrap();
        storage.set_user_info(&teacher_info()).unwrap();
        storage.clear_auth();
        assert_eq!(storage.token(), None);
        assert_eq!(storage.user_type(), None);
        assert_eq!(storage.user_info(), None);
    }

    #[test]
    fn remove_of_absent_key_is_silent() {
        let (_dir, storage) = temp_storage();
        storage.remove_token();
        storage.clear_auth();
    }
}
