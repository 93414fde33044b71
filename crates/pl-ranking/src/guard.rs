//! Selection precondition checks.

use std::collections::BTreeMap;

use pl_core::{Bib, Classification};

use crate::error::{GuardError, GuardResult};

/// UI selection state as written by action handlers.
///
/// The classification is kept in its raw textual form (tab id, URL segment)
/// and only becomes a [`Classification`] once it passes [`check_selected`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub stage: Option<u32>,
    pub classification: Option<String>,
    /// Highlighted rider, if any.
    pub rider: Option<Bib>,
    /// Free-form selection keys owned by individual views.
    pub extra: BTreeMap<String, Option<String>>,
}

impl Selection {
    pub fn new(stage: u32, classification: impl Into<String>) -> Self {
        Self {
            stage: Some(stage),
            classification: Some(classification.into()),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionKey {
    Stage,
    Classification,
    Rider,
    Extra(String),
}

impl SelectionKey {
    pub fn name(&self) -> &str {
        match self {
            SelectionKey::Stage => "stage",
            SelectionKey::Classification => "classification",
            SelectionKey::Rider => "rider",
            SelectionKey::Extra(name) => name,
        }
    }
}

/// One key to check and whether an unset value is a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub key: SelectionKey,
    pub required: bool,
}

impl Requirement {
    pub fn required(key: SelectionKey) -> Self {
        Self { key, required: true }
    }

    pub fn optional(key: SelectionKey) -> Self {
        Self {
            key,
            required: false,
        }
    }
}

/// Values that passed the guard. Keys that were not requested, or optional
/// keys left unset, stay `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckedSelection {
    pub stage: Option<u32>,
    pub classification: Option<Classification>,
    pub rider: Option<Bib>,
}

fn not_set(key: &SelectionKey) -> GuardError {
    GuardError::StatePropertyNotSet {
        key: key.name().to_string(),
    }
}

/// Check the requested selection keys in order, failing on the first
/// violation.
pub fn check_selected(
    selected: Option<&Selection>,
    requirements: &[Requirement],
) -> GuardResult<CheckedSelection> {
    let mut checked = CheckedSelection::default();

    for req in requirements {
        let selection = selected.ok_or(GuardError::StateNotInitialized)?;

        match &req.key {
            SelectionKey::Stage => match selection.stage {
                Some(stage) => checked.stage = Some(stage),
                None if req.required => return Err(not_set(&req.key)),
                None => {}
            },
            SelectionKey::Classification => match selection.classification.as_deref() {
                Some(raw) => {
                    let classification = raw.parse::<Classification>().map_err(|_| {
                        GuardError::StatePropertyValueNotValid {
                            key: req.key.name().to_string(),
                            value: raw.to_string(),
                        }
                    })?;
                    checked.classification = Some(classification);
                }
                None if req.required => return Err(not_set(&req.key)),
                None => {}
            },
            SelectionKey::Rider => match selection.rider {
                Some(bib) => checked.rider = Some(bib),
                None if req.required => return Err(not_set(&req.key)),
                None => {}
            },
            SelectionKey::Extra(name) => {
                let value = selection.extra.get(name).ok_or_else(|| {
                    GuardError::StatePropertyNotDefined { key: name.clone() }
                })?;
                if value.is_none() && req.required {
                    return Err(not_set(&req.key));
                }
            }
        }
    }

    Ok(checked)
}

/// The check every ranking view starts with.
pub fn require_stage_and_classification(
    selected: Option<&Selection>,
) -> GuardResult<(u32, Classification)> {
    let checked = check_selected(
        selected,
        &[
            Requirement::required(SelectionKey::Stage),
            Requirement::required(SelectionKey::Classification),
        ],
    )?;
    match (checked.stage, checked.classification) {
        (Some(stage), Some(classification)) => Ok((stage, classification)),
        // Both keys were required above.
        _ => Err(GuardError::StateNotInitialized),
    }
}
