use super::field::{FIELD_COUNT, FieldName};

/// Raw string values of every intake field.
///
/// All thirteen keys are always present; an empty string means unset.
/// Values are stored exactly as entered, without validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    values: [String; FIELD_COUNT],
}

impl FormInput {
    /// Creates a form with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value of `field`.
    pub fn get(&self, field: FieldName) -> &str {
        &self.values[field.index()]
    }

    /// Replaces the value of exactly one field.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Returns a copy of this form with `field` replaced.
    pub fn with_field(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set_field(field, value);
        self
    }

    /// Mutable access to a field's value, for character-level editing.
    pub fn value_mut(&mut self, field: FieldName) -> &mut String {
        &mut self.values[field.index()]
    }

    /// Iterates `(field, value)` pairs in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        FieldName::all()
            .iter()
            .map(move |&field| (field, self.get(field)))
    }

    /// Returns `true` if every field is unset.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}
