use std::fmt::{Display, Formatter};

use crate::model::ProfileId;

pub(crate) const SAVED: &str = "Data berhasil disimpan";
pub(crate) const REQUIRED_FIELDS: &str = "Semua field harus diisi";
pub(crate) const LOAD_FAILED: &str = "Gagal memuat data";
pub(crate) const LOAD_CRASHED: &str = "Terjadi kesalahan saat memuat data";
pub(crate) const SAVE_FAILED: &str = "Gagal menyimpan data";
pub(crate) const SAVE_CRASHED: &str = "Terjadi kesalahan saat menyimpan data";
pub(crate) const USER_NOT_FOUND: &str = "User tidak ditemukan";
pub(crate) const USER_LOAD_FAILED: &str = "Gagal memuat data user";

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short message for the user, shown once and then dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Dashboard pages a workflow can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Users,
    EditUser(ProfileId),
    Links,
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Route::Dashboard => f.write_str("/dashboard"),
            Route::Users => f.write_str("/dashboard/users"),
            Route::EditUser(id) => write!(f, "/dashboard/users/{id}/edit"),
            Route::Links => f.write_str("/dashboard/link"),
        }
    }
}

/// What the page should do after a workflow step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Stay,
    /// Reload the current page's server state, keeping local edits.
    Refresh,
    Redirect(Route),
}
