//! Session and questionnaire controller.
//!
//! Walks the catalog cascade (field -> subfield/stream -> careers/exams) for a
//! filled-in form and hands the composed record to the guidance store on behalf
//! of the logged-in user.

use crate::core::error::{self, FailureKind, Outcome};
use crate::core::store::Store;
use crate::plugins::auth::{self, LoginOutcome};
use crate::plugins::catalog::Catalog;
use crate::plugins::guidance::{self, GuidanceRecord, UserType};

pub const MSG_NOT_AUTHENTICATED: &str = "Please login first.";

/// Explicit per-interaction state. Starts anonymous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<i64>,
}

/// Raw answers to the questionnaire, before catalog derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub user_type: UserType,
    pub standard: String,
    pub marks: String,
    pub desired_course: String,
    pub chosen_subfield: String,
    pub chosen_stream: String,
    pub extra_info: String,
}

/// Validate the cascade and derive the denormalized career and exam lists.
pub fn compose(catalog: &Catalog, input: &FormInput) -> Result<GuidanceRecord, error::PathgenError> {
    let field = input.desired_course.as_str();

    if !catalog.subfields(field)?.contains(&input.chosen_subfield.as_str()) {
        return Err(error::PathgenError::ValidationError(format!(
            "'{}' is not a specialization of {}",
            input.chosen_subfield, field
        )));
    }
    if !catalog.streams(field)?.contains(&input.chosen_stream.as_str()) {
        return Err(error::PathgenError::ValidationError(format!(
            "'{}' is not a recommended stream for {}",
            input.chosen_stream, field
        )));
    }

    let careers = catalog.careers(&input.chosen_subfield)?;
    let exams = catalog.exams_for_field(field);

    Ok(GuidanceRecord {
        user_type: input.user_type,
        standard: input.standard.clone(),
        marks: input.marks.clone(),
        desired_course: field.to_string(),
        chosen_subfield: input.chosen_subfield.clone(),
        chosen_stream: input.chosen_stream.clone(),
        career_options: careers.join(", "),
        entrance_exams: exams.join(", "),
        extra_info: input.extra_info.clone(),
    })
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Run a login and remember the user on success. A failed login leaves any
    /// previous identity untouched.
    pub fn login(
        &mut self,
        store: &Store,
        username: &str,
        password: &str,
    ) -> Result<LoginOutcome, error::PathgenError> {
        let outcome = auth::login(store, username, password)?;
        if let Some(id) = outcome.user_id {
            self.user_id = Some(id);
        }
        Ok(outcome)
    }

    pub fn logout(&mut self) {
        self.user_id = None;
    }

    /// Compose and save a guidance record for the logged-in user.
    ///
    /// Catalog violations are input errors and are returned as `Err`; storage
    /// failures come back as a `PersistenceFailure` outcome.
    pub fn submit(
        &self,
        store: &Store,
        catalog: &Catalog,
        input: &FormInput,
    ) -> Result<Outcome, error::PathgenError> {
        let Some(user_id) = self.user_id else {
            tracing::info!("guidance submit without login");
            return Ok(Outcome::failed(FailureKind::NotAuthenticated, MSG_NOT_AUTHENTICATED));
        };
        let record = compose(catalog, input)?;
        Ok(guidance::save(store, user_id, &record))
    }
}
