use std::fmt;

use serde::{Deserialize, Serialize};

/// One selectable value of a choice field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChoiceOption {
    /// Token stored in the form and used by the encoder.
    pub value: &'static str,
    /// Text shown to the user.
    pub label: &'static str,
}

const fn opt(value: &'static str, label: &'static str) -> ChoiceOption {
    ChoiceOption { value, label }
}

static BREAST_OPTIONS: &[ChoiceOption] = &[opt("left", "Left"), opt("right", "Right")];

static QUADRANT_OPTIONS: &[ChoiceOption] = &[
    opt("upper_inner", "Upper Inner"),
    opt("upper_outer", "Upper Outer"),
    opt("lower_inner", "Lower Inner"),
    opt("lower_outer", "Lower Outer"),
];

static TUMOR_SIZE_OPTIONS: &[ChoiceOption] = &[
    opt("small", "Small(<=2cm)"),
    opt("medium", "Medium(>2cm <=5cm)"),
    opt("large", "Large(>5cm)"),
];

static INVASIVE_NODES_OPTIONS: &[ChoiceOption] = &[
    opt("none", "None(0)"),
    opt("low", "Low(1-3)"),
    opt("moderate", "Moderate(4-9)"),
    opt("high", "High(>=10)"),
];

static YES_NO_OPTIONS: &[ChoiceOption] = &[opt("yes", "Yes"), opt("no", "No")];

/// A key of the intake form.
///
/// The discriminant order is the on-screen order and doubles as the storage
/// index inside [`FormInput`](super::FormInput).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldName {
    PatientId,
    Name,
    Address,
    Country,
    State,
    Zone,
    Age,
    Breast,
    Quadrant,
    TumorSize,
    InvasiveNodes,
    History,
    Menopause,
}

/// Number of form fields.
pub const FIELD_COUNT: usize = 13;

static ALL_FIELDS: [FieldName; FIELD_COUNT] = [
    FieldName::PatientId,
    FieldName::Name,
    FieldName::Address,
    FieldName::Country,
    FieldName::State,
    FieldName::Zone,
    FieldName::Age,
    FieldName::Breast,
    FieldName::Quadrant,
    FieldName::TumorSize,
    FieldName::InvasiveNodes,
    FieldName::History,
    FieldName::Menopause,
];

impl FieldName {
    /// Returns all fields in form order.
    pub fn all() -> &'static [FieldName] {
        &ALL_FIELDS
    }

    /// Position of this field in [`FieldName::all`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// The camelCase key used by the web form and the prediction backend.
    pub fn key(self) -> &'static str {
        match self {
            Self::PatientId => "patientId",
            Self::Name => "name",
            Self::Address => "address",
            Self::Country => "country",
            Self::State => "state",
            Self::Zone => "zone",
            Self::Age => "age",
            Self::Breast => "breast",
            Self::Quadrant => "quadrant",
            Self::TumorSize => "tumorSize",
            Self::InvasiveNodes => "invasiveNodes",
            Self::History => "history",
            Self::Menopause => "menopause",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::PatientId => "Patient ID",
            Self::Name => "Name",
            Self::Address => "Address",
            Self::Country => "Country",
            Self::State => "State",
            Self::Zone => "Zone",
            Self::Age => "Age",
            Self::Breast => "Breast",
            Self::Quadrant => "Quadrant",
            Self::TumorSize => "Tumor Size",
            Self::InvasiveNodes => "Invasive Nodes",
            Self::History => "History",
            Self::Menopause => "Menopause",
        }
    }

    /// Returns `true` for patient identity fields.
    ///
    /// These are collected for record keeping only and are never sent to the
    /// prediction backend.
    pub fn is_identifying(self) -> bool {
        matches!(
            self,
            Self::PatientId | Self::Name | Self::Address | Self::Country | Self::State | Self::Zone
        )
    }

    /// The selectable options of a choice field, or `None` for free text.
    pub fn options(self) -> Option<&'static [ChoiceOption]> {
        match self {
            Self::Breast => Some(BREAST_OPTIONS),
            Self::Quadrant => Some(QUADRANT_OPTIONS),
            Self::TumorSize => Some(TUMOR_SIZE_OPTIONS),
            Self::InvasiveNodes => Some(INVASIVE_NODES_OPTIONS),
            Self::History | Self::Menopause => Some(YES_NO_OPTIONS),
            _ => None,
        }
    }

    /// Returns `true` if this field only accepts numeric input.
    pub fn is_numeric(self) -> bool {
        self == Self::Age
    }
}

#[mutants::skip]
impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for FieldName {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(FieldName::all()).unwrap_or(&FieldName::Age)
    }
}
