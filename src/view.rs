//! Read-only view models for the participant list, the detail panel and
//! the link management page.

use strum::IntoEnumIterator;

use crate::model::{Attempt, LinkKind, Profile, Section};
use crate::notice::Route;

const DEFAULT_FOOTER_EMAIL: &str = "student@skill.edu";
const WHATSAPP_COUNTRY_CODE: &str = "62";

/// One row in the participant list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileListItem<'a> {
    pub name: &'a str,
    pub phone_number: Option<&'a str>,
    pub email: &'a str,
}

impl<'a> From<&'a Profile> for ProfileListItem<'a> {
    fn from(profile: &'a Profile) -> Self {
        Self {
            name: profile.display_name(),
            phone_number: profile.phone_number.as_deref().filter(|p| !p.is_empty()),
            email: profile.display_email(),
        }
    }
}

/// A section result inside an exam tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamRow {
    pub section: Section,
    pub completed: bool,
    pub score: Option<u32>,
}

/// One attempt's tab in the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamTab {
    pub attempt: Attempt,
    pub rows: Vec<ExamRow>,
}

/// How staff can reach the participant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactAction {
    WhatsApp { url: String },
    Email { url: String },
}

/// Everything the detail panel shows for one participant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDetail<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone_number: Option<&'a str>,
    pub edit_route: Route,
    /// Stored totals, only for attempts that have one.
    pub totals: Vec<(Attempt, f64)>,
    /// Attempts with at least one section flagged as taken.
    pub exams: Vec<ExamTab>,
    pub contact: ContactAction,
}

impl<'a> From<&'a Profile> for ProfileDetail<'a> {
    fn from(profile: &'a Profile) -> Self {
        let phone_number = profile.phone_number.as_deref().filter(|p| !p.is_empty());

        let totals = Attempt::iter()
            .filter_map(|a| profile.scores(a).total.map(|t| (a, t)))
            .collect();

        let exams = Attempt::iter()
            .filter_map(|attempt| {
                let scores = profile.scores(attempt);
                if !scores.any_completed() {
                    return None;
                }
                let rows = [Section::Reading, Section::Listening, Section::Structure]
                    .into_iter()
                    .map(|section| ExamRow {
                        section,
                        completed: scores.completed(section),
                        score: scores.score(section),
                    })
                    .collect();
                Some(ExamTab { attempt, rows })
            })
            .collect();

        let contact = match phone_number {
            Some(phone) => ContactAction::WhatsApp {
                url: whatsapp_url(phone),
            },
            None => ContactAction::Email {
                url: format!("mailto:{}", profile.display_email()),
            },
        };

        Self {
            name: profile.display_name(),
            email: profile.display_email(),
            phone_number,
            edit_route: Route::EditUser(profile.id.clone()),
            totals,
            exams,
            contact,
        }
    }
}

/// `wa.me` link for a local number; a leading `0` becomes the country code.
pub fn whatsapp_url(phone_number: &str) -> String {
    let number = match phone_number.strip_prefix('0') {
        Some(rest) => format!("{WHATSAPP_COUNTRY_CODE}{rest}"),
        None => phone_number.to_string(),
    };
    format!("https://wa.me/{number}")
}

/// Footer text naming the signed-in account, from stored session state.
pub fn footer_label(stored_email: Option<&str>) -> String {
    let email = stored_email
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_FOOTER_EMAIL);
    format!("Logged in as {email}")
}

/// Tabs on the link management page, default first.
pub fn link_tabs() -> [LinkKind; 2] {
    [LinkKind::Toefl, LinkKind::RetakeExam]
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::model::ProfileId;

    fn profile(value: serde_json::Value) -> Profile {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_whatsapp_url_replaces_leading_zero_once() {
        assert_eq!(whatsapp_url("081234567890"), "https://wa.me/6281234567890");
        assert_eq!(whatsapp_url("6281234567890"), "https://wa.me/6281234567890");
        assert_eq!(whatsapp_url("0081"), "https://wa.me/62081");
    }

    #[test]
    fn test_detail_without_phone_uses_email() {
        let p = profile(json!({ "id": 5, "nama": "Rina", "email": "rina@example.com" }));
        let detail = ProfileDetail::from(&p);
        assert_eq!(
            detail.contact,
            ContactAction::Email {
                url: "mailto:rina@example.com".to_string()
            }
        );
        assert_eq!(detail.edit_route, Route::EditUser(ProfileId::Number(5)));
        assert!(detail.exams.is_empty());
        assert!(detail.totals.is_empty());
    }

    #[test]
    fn test_detail_shows_only_attempts_with_completed_sections() {
        let p = profile(json!({
            "id": 5,
            "nomor_whatsapp": "0812",
            "score_reading": 40,
            "total_score": 433.3,
            "reading": true,
            "listening": false,
            "score_listening2": 55,
            "listening2": null
        }));
        let detail = ProfileDetail::from(&p);

        assert_eq!(
            detail.contact,
            ContactAction::WhatsApp {
                url: "https://wa.me/62812".to_string()
            }
        );
        assert_eq!(detail.totals, vec![(Attempt::First, 433.3)]);
        assert_eq!(detail.exams.len(), 1);

        let tab = &detail.exams[0];
        assert_eq!(tab.attempt, Attempt::First);
        assert_eq!(tab.attempt.to_string(), "Ujian 1");
        assert_eq!(
            tab.rows[0],
            ExamRow {
                section: Section::Reading,
                completed: true,
                score: Some(40)
            }
        );
        assert!(!tab.rows[1].completed);
    }

    #[test]
    fn test_list_item_hides_empty_phone() {
        let p = profile(json!({ "id": 1, "nama": "A", "email": "a@b.c", "nomor_whatsapp": "" }));
        let item = ProfileListItem::from(&p);
        assert_eq!(item.phone_number, None);
        assert_eq!(item.name, "A");
    }

    #[test]
    fn test_footer_label() {
        assert_eq!(footer_label(None), "Logged in as student@skill.edu");
        assert_eq!(footer_label(Some("")), "Logged in as student@skill.edu");
        assert_eq!(footer_label(Some("admin@toefl.id")), "Logged in as admin@toefl.id");
    }

    #[test]
    fn test_link_tabs_default_to_toefl() {
        let tabs = link_tabs();
        assert_eq!(tabs[0], LinkKind::Toefl);
        assert_eq!(tabs.map(LinkKind::label), ["Test TOEFL", "Ujian Ulang"]);
    }
}
