//! Application draft: the in-memory field values of one intake session.
//!
//! DESIGN
//! ======
//! Fields are addressed through [`IntakeField`] so the wizard, the UI, and
//! the relay payload all agree on wire names without stringly-typed keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// FIELD
// =============================================================================

/// One input of the intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IntakeField {
    FullName,
    Email,
    Phone,
    Address,
    University,
    Faculty,
    Course,
    GradYear,
    Objective,
    Experience,
    Skills,
    Languages,
    Additional,
}

impl IntakeField {
    /// Every field in form order.
    pub const ALL: [Self; 13] = [
        Self::FullName,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::University,
        Self::Faculty,
        Self::Course,
        Self::GradYear,
        Self::Objective,
        Self::Experience,
        Self::Skills,
        Self::Languages,
        Self::Additional,
    ];

    /// Wire name used in JSON bodies and relay template params.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Address => "address",
            Self::University => "university",
            Self::Faculty => "faculty",
            Self::Course => "course",
            Self::GradYear => "gradYear",
            Self::Objective => "objective",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Languages => "languages",
            Self::Additional => "additional",
        }
    }

    #[must_use]
    pub fn required(self) -> bool {
        !matches!(self, Self::Additional)
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Values entered so far. All fields start empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub university: String,
    pub faculty: String,
    pub course: String,
    pub grad_year: String,
    pub objective: String,
    pub experience: String,
    pub skills: String,
    pub languages: String,
    pub additional: String,
}

impl ApplicationDraft {
    #[must_use]
    pub fn get(&self, field: IntakeField) -> &str {
        match field {
            IntakeField::FullName => &self.full_name,
            IntakeField::Email => &self.email,
            IntakeField::Phone => &self.phone,
            IntakeField::Address => &self.address,
            IntakeField::University => &self.university,
            IntakeField::Faculty => &self.faculty,
            IntakeField::Course => &self.course,
            IntakeField::GradYear => &self.grad_year,
            IntakeField::Objective => &self.objective,
            IntakeField::Experience => &self.experience,
            IntakeField::Skills => &self.skills,
            IntakeField::Languages => &self.languages,
            IntakeField::Additional => &self.additional,
        }
    }

    fn slot(&mut self, field: IntakeField) -> &mut String {
        match field {
            IntakeField::FullName => &mut self.full_name,
            IntakeField::Email => &mut self.email,
            IntakeField::Phone => &mut self.phone,
            IntakeField::Address => &mut self.address,
            IntakeField::University => &mut self.university,
            IntakeField::Faculty => &mut self.faculty,
            IntakeField::Course => &mut self.course,
            IntakeField::GradYear => &mut self.grad_year,
            IntakeField::Objective => &mut self.objective,
            IntakeField::Experience => &mut self.experience,
            IntakeField::Skills => &mut self.skills,
            IntakeField::Languages => &mut self.languages,
            IntakeField::Additional => &mut self.additional,
        }
    }

    pub fn set(&mut self, field: IntakeField, value: impl Into<String>) {
        *self.slot(field) = value.into();
    }

    /// Required fields among `fields` that are empty or whitespace-only.
    #[must_use]
    pub fn missing(&self, fields: &[IntakeField]) -> Vec<IntakeField> {
        fields
            .iter()
            .copied()
            .filter(|f| f.required() && self.get(*f).trim().is_empty())
            .collect()
    }

    /// Template params for the relay: every field by wire name, plus `role`.
    #[must_use]
    pub fn to_params(&self, role: &str) -> BTreeMap<String, String> {
        let mut params = IntakeField::ALL
            .into_iter()
            .map(|f| (f.key().to_owned(), self.get(f).to_owned()))
            .collect::<BTreeMap<_, _>>();
        params.insert("role".to_owned(), role.to_owned());
        params
    }
}

#[cfg(test)]
#[path = "draft_test.rs"]
mod tests;
