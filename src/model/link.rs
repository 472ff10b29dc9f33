use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};

use super::lenient;

/// Which group of participants a link set is shown to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, strum_macros::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum LinkKind {
    /// Participants registering for a regular TOEFL test.
    Toefl,
    /// Participants retaking the exam.
    #[strum(to_string = "ujian-ulang")]
    RetakeExam,
}

impl LinkKind {
    /// Tab label on the link management page.
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Toefl => "Test TOEFL",
            LinkKind::RetakeExam => "Ujian Ulang",
        }
    }

    pub(crate) fn endpoint(self) -> String {
        format!("api/link/{self}")
    }
}

/// A named set of outbound URLs stored as a single backend row.
///
/// Every field is required before the set can be saved. A set without an
/// id has never been saved and is created on submit; otherwise it is
/// updated in place.
pub trait LinkSet: Serialize + DeserializeOwned + Default + Clone {
    /// Field selector for [`LinkSet::field`] and [`LinkSet::set_field`].
    type Field: Copy + std::fmt::Debug + PartialEq + 'static;

    const KIND: LinkKind;
    const FIELDS: &'static [Self::Field];

    fn id(&self) -> Option<i64>;
    fn field(&self, field: Self::Field) -> &str;
    fn set_field(&mut self, field: Self::Field, value: String);

    /// True once every field is filled in.
    fn is_complete(&self) -> bool {
        Self::FIELDS.iter().all(|f| !self.field(*f).is_empty())
    }

    /// Fields that are still empty, in declaration order.
    fn missing_fields(&self) -> Vec<Self::Field> {
        Self::FIELDS
            .iter()
            .copied()
            .filter(|f| self.field(*f).is_empty())
            .collect()
    }
}

/// Links shown to regular TOEFL test participants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToeflLinks {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(
        rename = "saluran_whatsapp",
        default,
        deserialize_with = "lenient::string_or_empty"
    )]
    pub whatsapp_channel: String,
    #[serde(
        rename = "saluran_telegram",
        default,
        deserialize_with = "lenient::string_or_empty"
    )]
    pub telegram_channel: String,
    #[serde(
        rename = "grup",
        default,
        deserialize_with = "lenient::string_or_empty"
    )]
    pub group: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum_macros::Display)]
pub enum ToeflLinkField {
    #[strum(to_string = "saluran_whatsapp")]
    WhatsappChannel,
    #[strum(to_string = "saluran_telegram")]
    TelegramChannel,
    #[strum(to_string = "grup")]
    Group,
}

impl LinkSet for ToeflLinks {
    type Field = ToeflLinkField;

    const KIND: LinkKind = LinkKind::Toefl;
    const FIELDS: &'static [ToeflLinkField] = &[
        ToeflLinkField::WhatsappChannel,
        ToeflLinkField::TelegramChannel,
        ToeflLinkField::Group,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn field(&self, field: ToeflLinkField) -> &str {
        match field {
            ToeflLinkField::WhatsappChannel => &self.whatsapp_channel,
            ToeflLinkField::TelegramChannel => &self.telegram_channel,
            ToeflLinkField::Group => &self.group,
        }
    }

    fn set_field(&mut self, field: ToeflLinkField, value: String) {
        match field {
            ToeflLinkField::WhatsappChannel => self.whatsapp_channel = value,
            ToeflLinkField::TelegramChannel => self.telegram_channel = value,
            ToeflLinkField::Group => self.group = value,
        }
    }
}

/// Links shown to participants retaking the exam.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetakeExamLinks {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(
        rename = "postingan_instagram",
        default,
        deserialize_with = "lenient::string_or_empty"
    )]
    pub instagram_post: String,
    #[serde(
        rename = "akun_instagram",
        default,
        deserialize_with = "lenient::string_or_empty"
    )]
    pub instagram_account: String,
    #[serde(
        rename = "grup",
        default,
        deserialize_with = "lenient::string_or_empty"
    )]
    pub group: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, strum_macros::Display)]
pub enum RetakeExamLinkField {
    #[strum(to_string = "postingan_instagram")]
    InstagramPost,
    #[strum(to_string = "akun_instagram")]
    InstagramAccount,
    #[strum(to_string = "grup")]
    Group,
}

impl LinkSet for RetakeExamLinks {
    type Field = RetakeExamLinkField;

    const KIND: LinkKind = LinkKind::RetakeExam;
    const FIELDS: &'static [RetakeExamLinkField] = &[
        RetakeExamLinkField::InstagramPost,
        RetakeExamLinkField::InstagramAccount,
        RetakeExamLinkField::Group,
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn field(&self, field: RetakeExamLinkField) -> &str {
        match field {
            RetakeExamLinkField::InstagramPost => &self.instagram_post,
            RetakeExamLinkField::InstagramAccount => &self.instagram_account,
            RetakeExamLinkField::Group => &self.group,
        }
    }

    fn set_field(&mut self, field: RetakeExamLinkField, value: String) {
        match field {
            RetakeExamLinkField::InstagramPost => self.instagram_post = value,
            RetakeExamLinkField::InstagramAccount => self.instagram_account = value,
            RetakeExamLinkField::Group => self.group = value,
        }
    }
}
