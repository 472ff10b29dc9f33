use chrono::NaiveDate;
use tracing::{error, info, instrument, warn};

use crate::client::AdminClient;
use crate::error::Result;
use crate::form::{FormError, ScoreEditor};
use crate::model::{Attempt, Profile, ProfileFields, ProfileId, Section, UpdateProfilePayload};
use crate::notice::{self, Navigation, Notice, Route};

/// Outcome of opening the edit page for a profile.
#[derive(Debug, Clone)]
pub enum EditPage {
    Editing(Box<ProfileEditor>),
    /// The profile could not be shown; go elsewhere and tell the user why.
    Redirect { notice: Notice, to: Route },
}

/// Outcome of a save attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub notice: Notice,
    pub navigation: Navigation,
}

/// Edit state for one participant: contact details plus both attempts'
/// scores.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    profile: Profile,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub birth_place: String,
    pub birth_date: Option<NaiveDate>,
    first: ScoreEditor,
    second: ScoreEditor,
    saving: bool,
}

impl ProfileEditor {
    pub fn from_profile(profile: Profile) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: text(&profile.name),
            email: text(&profile.email),
            phone_number: text(&profile.phone_number),
            birth_place: text(&profile.birth_place),
            birth_date: profile.birth_date,
            first: ScoreEditor::from_scores(&profile.scores(Attempt::First)),
            second: ScoreEditor::from_scores(&profile.scores(Attempt::Second)),
            profile,
            saving: false,
        }
    }

    /// Fetch profile `id` and open it for editing.
    ///
    /// A missing profile or a failed fetch sends the user back to the
    /// users list; no editor is produced.
    #[instrument(skip(client))]
    pub async fn load(client: &AdminClient, id: &ProfileId) -> EditPage {
        match client.get_profile_by_id(id).await {
            Ok(Some(profile)) => EditPage::Editing(Box::new(Self::from_profile(profile))),
            Ok(None) => {
                warn!("profile not found");
                EditPage::Redirect {
                    notice: Notice::error(notice::USER_NOT_FOUND),
                    to: Route::Users,
                }
            }
            Err(e) => {
                error!(error = %e, "failed to load profile");
                EditPage::Redirect {
                    notice: Notice::error(notice::USER_LOAD_FAILED),
                    to: Route::Users,
                }
            }
        }
    }

    /// The profile as last loaded or saved.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn id(&self) -> &ProfileId {
        &self.profile.id
    }

    pub fn title(&self) -> String {
        format!("Edit User: {}", self.profile.display_name())
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn scores(&self, attempt: Attempt) -> &ScoreEditor {
        match attempt {
            Attempt::First => &self.first,
            Attempt::Second => &self.second,
        }
    }

    /// Edit one section score. Returns `false` if the input was rejected.
    pub fn set_score(&mut self, attempt: Attempt, section: Section, value: &str) -> bool {
        let editor = match attempt {
            Attempt::First => &mut self.first,
            Attempt::Second => &mut self.second,
        };
        editor.set(section, value)
    }

    pub fn clear_score(&mut self, attempt: Attempt, section: Section) {
        self.set_score(attempt, section, "");
    }

    /// Everything currently in the editor as an update for this profile.
    pub fn payload(&self) -> UpdateProfilePayload {
        let first = self.first.values();
        let second = self.second.values();
        UpdateProfilePayload {
            id: self.profile.id.clone(),
            fields: ProfileFields {
                name: self.name.clone(),
                email: self.email.clone(),
                phone_number: self.phone_number.clone(),
                birth_place: self.birth_place.clone(),
                birth_date: self.birth_date,
                score_listening: first.listening,
                score_structure: first.structure,
                score_reading: first.reading,
                total_score: first.total,
                score_listening2: second.listening,
                score_structure2: second.structure,
                score_reading2: second.reading,
                total_score2: second.total,
            },
        }
    }

    /// Mark a save as in flight and hand out the payload to send.
    pub fn begin_save(&mut self) -> Result<UpdateProfilePayload, FormError> {
        if self.saving {
            return Err(FormError::Busy);
        }
        self.saving = true;
        Ok(self.payload())
    }

    /// Apply the update result. Local edits are kept either way so a
    /// failed save can be retried as is.
    pub fn finish_save(&mut self, result: Result<Profile>) -> SaveOutcome {
        self.saving = false;
        match result {
            Ok(saved) => {
                info!(id = %saved.id, "profile saved");
                self.profile = saved;
                SaveOutcome {
                    notice: Notice::success(notice::SAVED),
                    navigation: Navigation::Refresh,
                }
            }
            Err(e) => {
                error!(id = %self.profile.id, error = %e, "failed to save profile");
                SaveOutcome {
                    notice: Notice::error(notice::SAVE_FAILED),
                    navigation: Navigation::Stay,
                }
            }
        }
    }

    /// Send the whole editor as one update call.
    #[instrument(skip_all, fields(id = %self.profile.id))]
    pub async fn save(&mut self, client: &AdminClient) -> Result<SaveOutcome, FormError> {
        let payload = self.begin_save()?;
        let result = client.update_profile(&payload).await;
        Ok(self.finish_save(result))
    }
}
