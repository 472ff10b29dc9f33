use tracing::{debug, error, instrument};

use crate::client::AdminClient;
use crate::error::Result;
use crate::form::FormError;
use crate::model::{LinkKind, LinkSet};
use crate::notice::{self, Notice};

/// What a link form shows right now.
#[derive(Debug, PartialEq)]
pub enum LinkFormView<'a, L> {
    /// The record is still being fetched; nothing is editable.
    Loading,
    Ready { record: &'a L, disabled: bool },
}

/// Result of starting a submit.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<L> {
    /// Validation failed; nothing is sent.
    Invalid(Notice),
    /// The record to send. The form stays locked until
    /// [`LinkForm::finish_submit`] is called.
    Ready(L),
}

/// Edit form for one link set, loaded from and saved to the backend.
///
/// A new form starts out loading. While a save is in flight, edits and
/// further submits are refused with [`FormError::Busy`].
#[derive(Debug, Clone)]
pub struct LinkForm<L: LinkSet> {
    record: L,
    loading: bool,
    saving: bool,
}

impl<L: LinkSet> Default for LinkForm<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LinkSet> LinkForm<L> {
    pub fn new() -> Self {
        Self {
            record: L::default(),
            loading: true,
            saving: false,
        }
    }

    pub fn kind(&self) -> LinkKind {
        L::KIND
    }

    pub fn record(&self) -> &L {
        &self.record
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn view(&self) -> LinkFormView<'_, L> {
        if self.loading {
            LinkFormView::Loading
        } else {
            LinkFormView::Ready {
                record: &self.record,
                disabled: self.saving,
            }
        }
    }

    /// Fetch the stored record. Returns a notice only when loading failed.
    #[instrument(skip_all, fields(kind = %L::KIND))]
    pub async fn load(&mut self, client: &AdminClient) -> Option<Notice> {
        self.loading = true;
        let result = client.get_link_set::<L>().await;
        self.loading = false;

        match result {
            Ok(Some(record)) => {
                self.record = record;
                None
            }
            Ok(None) => {
                debug!("no link set stored yet");
                None
            }
            Err(e) => {
                error!(error = %e, "failed to load link set");
                let message = if e.is_server_error() {
                    e.server_error().unwrap_or(notice::LOAD_FAILED)
                } else {
                    notice::LOAD_CRASHED
                };
                Some(Notice::error(message))
            }
        }
    }

    pub fn set_field(&mut self, field: L::Field, value: impl Into<String>) -> Result<(), FormError> {
        self.ensure_editable()?;
        self.record.set_field(field, value.into());
        Ok(())
    }

    /// Validate and lock the form for saving.
    pub fn begin_submit(&mut self) -> Result<Submission<L>, FormError> {
        self.ensure_editable()?;
        if !self.record.is_complete() {
            debug!(missing = ?self.record.missing_fields(), "link set incomplete");
            return Ok(Submission::Invalid(Notice::error(notice::REQUIRED_FIELDS)));
        }
        self.saving = true;
        Ok(Submission::Ready(self.record.clone()))
    }

    /// Unlock the form and apply the server's answer.
    ///
    /// On success the first returned row replaces local state, so any
    /// server-side normalization shows up in the form. On failure local
    /// state is left as it was.
    pub fn finish_submit(&mut self, result: Result<Vec<L>>) -> Notice {
        self.saving = false;
        match result {
            Ok(rows) => {
                if let Some(row) = rows.into_iter().next() {
                    self.record = row;
                }
                Notice::success(notice::SAVED)
            }
            Err(e) => {
                error!(kind = %L::KIND, error = %e, "failed to save link set");
                if e.is_server_error() {
                    Notice::error(e.user_message(notice::SAVE_FAILED))
                } else {
                    Notice::error(notice::SAVE_CRASHED)
                }
            }
        }
    }

    /// Validate, send and apply the result in one go.
    #[instrument(skip_all, fields(kind = %L::KIND))]
    pub async fn submit(&mut self, client: &AdminClient) -> Result<Notice, FormError> {
        let record = match self.begin_submit()? {
            Submission::Invalid(notice) => return Ok(notice),
            Submission::Ready(record) => record,
        };
        let result = client.save_link_set(&record).await;
        Ok(self.finish_submit(result))
    }

    fn ensure_editable(&self) -> Result<(), FormError> {
        if self.loading {
            Err(FormError::Loading)
        } else if self.saving {
            Err(FormError::Busy)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::{RetakeExamLinkField, RetakeExamLinks, ToeflLinkField, ToeflLinks};
    use crate::notice::NoticeLevel;
    use crate::test_support::StubServer;

    fn retake_row(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "postingan_instagram": "https://instagram.com/p/abc",
            "akun_instagram": "https://instagram.com/toefl.center",
            "grup": "https://chat.whatsapp.com/xyz"
        })
    }

    async fn loaded_toefl_form(server: &StubServer) -> LinkForm<ToeflLinks> {
        let mut form = LinkForm::<ToeflLinks>::new();
        assert_eq!(form.load(&server.admin_client()).await, None);
        form
    }

    #[test]
    fn test_new_form_is_loading() {
        let mut form = LinkForm::<ToeflLinks>::new();
        assert_eq!(form.view(), LinkFormView::Loading);
        assert_eq!(
            form.set_field(ToeflLinkField::Group, "x"),
            Err(FormError::Loading)
        );
    }

    #[tokio::test]
    async fn test_load_replaces_record() {
        let server =
            StubServer::start(vec![(200, json!({ "data": retake_row(3) }).to_string())]).await;
        let mut form = LinkForm::<RetakeExamLinks>::new();

        assert_eq!(form.load(&server.admin_client()).await, None);
        assert_eq!(form.record().id, Some(3));
        assert_eq!(
            form.view(),
            LinkFormView::Ready {
                record: form.record(),
                disabled: false
            }
        );
        assert_eq!(server.requests()[0].target, "/api/link/ujian-ulang");
    }

    #[tokio::test]
    async fn test_load_failure_uses_server_message() {
        let server = StubServer::start(vec![
            (500, json!({ "error": "relation does not exist" }).to_string()),
            (500, json!({}).to_string()),
        ])
        .await;
        let client = server.admin_client();
        let mut form = LinkForm::<ToeflLinks>::new();

        let notice = form.load(&client).await.unwrap();
        assert_eq!(notice, Notice::error("relation does not exist"));
        assert!(!form.is_loading());

        let notice = form.load(&client).await.unwrap();
        assert_eq!(notice.message, "Gagal memuat data");
    }

    #[tokio::test]
    async fn test_load_failure_leaves_out_details() {
        let server = StubServer::start(vec![(
            500,
            json!({ "error": "Gagal mengambil link", "details": "permission denied" }).to_string(),
        )])
        .await;
        let mut form = LinkForm::<RetakeExamLinks>::new();

        let notice = form.load(&server.admin_client()).await.unwrap();
        assert_eq!(notice, Notice::error("Gagal mengambil link"));
    }

    #[tokio::test]
    async fn test_load_accepts_null_link_columns() {
        let server = StubServer::start(vec![(
            200,
            json!({ "data": {
                "id": 6,
                "postingan_instagram": null,
                "akun_instagram": "https://instagram.com/toefl.center",
                "grup": null
            }})
            .to_string(),
        )])
        .await;
        let mut form = LinkForm::<RetakeExamLinks>::new();

        assert_eq!(form.load(&server.admin_client()).await, None);
        assert_eq!(form.record().id, Some(6));
        assert_eq!(form.record().instagram_post, "");
        assert_eq!(form.record().group, "");
    }

    #[tokio::test]
    async fn test_empty_field_blocks_submit_without_request() {
        let server = StubServer::start(vec![(200, json!({ "data": null }).to_string())]).await;
        let client = server.admin_client();
        let mut form = loaded_toefl_form(&server).await;

        form.set_field(ToeflLinkField::WhatsappChannel, "https://whatsapp.com/channel/1")
            .unwrap();
        form.set_field(ToeflLinkField::TelegramChannel, "https://t.me/toefl")
            .unwrap();

        let notice = form.submit(&client).await.unwrap();
        assert_eq!(notice, Notice::error("Semua field harus diisi"));
        assert!(!form.is_saving());
        // Only the initial load reached the server.
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_without_id_posts_and_adopts_server_row() {
        let server = StubServer::start(vec![
            (200, json!({ "data": null }).to_string()),
            (
                201,
                json!({ "data": [{
                    "id": 11,
                    "saluran_whatsapp": "https://whatsapp.com/channel/1",
                    "saluran_telegram": "https://t.me/toefl",
                    "grup": "https://chat.whatsapp.com/normalized"
                }]})
                .to_string(),
            ),
        ])
        .await;
        let client = server.admin_client();
        let mut form = loaded_toefl_form(&server).await;

        form.set_field(ToeflLinkField::WhatsappChannel, "https://whatsapp.com/channel/1")
            .unwrap();
        form.set_field(ToeflLinkField::TelegramChannel, "https://t.me/toefl")
            .unwrap();
        form.set_field(ToeflLinkField::Group, "chat.whatsapp.com/normalized")
            .unwrap();

        let notice = form.submit(&client).await.unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Data berhasil disimpan");
        assert_eq!(form.record().id, Some(11));
        assert_eq!(form.record().group, "https://chat.whatsapp.com/normalized");

        let requests = server.requests();
        assert_eq!(requests[1].method, "POST");
        assert_eq!(requests[1].target, "/api/link/toefl");
        assert_eq!(requests[1].json()["grup"], json!("chat.whatsapp.com/normalized"));
    }

    #[tokio::test]
    async fn test_submit_with_id_puts() {
        let server = StubServer::start(vec![
            (200, json!({ "data": retake_row(4) }).to_string()),
            (200, json!({ "data": [] }).to_string()),
        ])
        .await;
        let client = server.admin_client();
        let mut form = LinkForm::<RetakeExamLinks>::new();
        form.load(&client).await;

        form.set_field(RetakeExamLinkField::Group, "https://chat.whatsapp.com/new")
            .unwrap();
        let notice = form.submit(&client).await.unwrap();
        assert!(!notice.is_error());
        // No rows back: keep what was entered.
        assert_eq!(form.record().group, "https://chat.whatsapp.com/new");

        let requests = server.requests();
        assert_eq!(requests[1].method, "PUT");
        assert_eq!(requests[1].json()["id"], json!(4));
    }

    #[tokio::test]
    async fn test_server_error_with_details() {
        let server = StubServer::start(vec![
            (200, json!({ "data": retake_row(4) }).to_string()),
            (
                400,
                json!({ "error": "Gagal update", "details": "grup is not a URL" }).to_string(),
            ),
        ])
        .await;
        let client = server.admin_client();
        let mut form = LinkForm::<RetakeExamLinks>::new();
        form.load(&client).await;
        form.set_field(RetakeExamLinkField::Group, "nope").unwrap();

        let notice = form.submit(&client).await.unwrap();
        assert_eq!(notice, Notice::error("Gagal update: grup is not a URL"));
        assert_eq!(form.record().group, "nope");
        assert!(!form.is_saving());
    }

    #[tokio::test]
    async fn test_edits_are_refused_while_saving() {
        let server =
            StubServer::start(vec![(200, json!({ "data": retake_row(1) }).to_string())]).await;
        let mut form = LinkForm::<RetakeExamLinks>::new();
        form.load(&server.admin_client()).await;

        let Submission::Ready(record) = form.begin_submit().unwrap() else {
            panic!("complete record should be ready to send");
        };
        assert_eq!(record.id, Some(1));
        assert!(matches!(
            form.view(),
            LinkFormView::Ready { disabled: true, .. }
        ));
        assert_eq!(
            form.set_field(RetakeExamLinkField::Group, "x"),
            Err(FormError::Busy)
        );
        assert_eq!(form.begin_submit(), Err(FormError::Busy));

        let notice = form.finish_submit(Ok(vec![]));
        assert!(!notice.is_error());
        assert!(form.set_field(RetakeExamLinkField::Group, "x").is_ok());
    }

    #[tokio::test]
    async fn test_transport_failure_uses_generic_message() {
        let server = StubServer::start(vec![(200, json!({ "data": retake_row(1) }).to_string())])
            .await;
        let mut form = LinkForm::<RetakeExamLinks>::new();
        form.load(&server.admin_client()).await;

        // Nothing listens on port 9 of the loopback interface.
        let offline = AdminClient::with_client(
            server.client(),
            crate::config::AdminConfig::new("http://127.0.0.1:9/").unwrap(),
        );
        let notice = form.submit(&offline).await.unwrap();
        assert_eq!(
            notice,
            Notice::error("Terjadi kesalahan saat menyimpan data")
        );
    }
}
