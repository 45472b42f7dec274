//! Form-field serialization into submittable `{name, value}` pairs.

use serde::{Deserialize, Serialize};

/// Kind of a form control, as far as serialization cares.
///
/// [`FieldKind::Text`] stands for every submittable control kind that needs
/// no special handling (text, hidden, email, textarea, single select, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Checkbox,
    Radio,
    SelectMultiple,
    File,
    Reset,
    Submit,
    Button,
}

/// One option of a multi-select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            selected,
        }
    }
}

/// Read-only descriptor of a form control.
///
/// `checked` is only meaningful for [`FieldKind::Checkbox`] and
/// [`FieldKind::Radio`]; `options` only for [`FieldKind::SelectMultiple`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub kind: FieldKind,
    pub value: String,
    pub checked: bool,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
}

impl FormField {
    /// A field of an arbitrary kind with a current value.
    pub fn of_kind(kind: FieldKind, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            checked: false,
            disabled: false,
            options: Vec::new(),
        }
    }

    /// A plain text-like field.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::of_kind(FieldKind::Text, name, value)
    }

    pub fn checkbox(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        let mut field = Self::of_kind(FieldKind::Checkbox, name, value);
        field.checked = checked;
        field
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>, checked: bool) -> Self {
        let mut field = Self::of_kind(FieldKind::Radio, name, value);
        field.checked = checked;
        field
    }

    pub fn select_multiple(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        let mut field = Self::of_kind(FieldKind::SelectMultiple, name, "");
        field.options = options;
        field
    }

    /// Marks the field disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// One serialized name/value pair of submittable form state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEntry {
    pub name: String,
    pub value: String,
}

impl FormEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Serializes the submittable state of a sequence of form fields.
///
/// Skipped entirely: fields with an empty name, disabled fields, and fields
/// of kind File, Reset, Submit, or Button. A multi-select contributes one
/// entry per *selected* option, in option order; a checkbox or radio
/// contributes its entry only when checked; any other field always
/// contributes one entry with its current value. Output order follows
/// input order.
pub fn serialize_form(fields: &[FormField]) -> Vec<FormEntry> {
    let mut serialized = Vec::new();

    for field in fields {
        if field.name.is_empty() || field.disabled {
            continue;
        }
        match field.kind {
            FieldKind::File | FieldKind::Reset | FieldKind::Submit | FieldKind::Button => continue,
            FieldKind::SelectMultiple => {
                for option in &field.options {
                    if !option.selected {
                        continue;
                    }
                    serialized.push(FormEntry::new(&field.name, &option.value));
                }
            }
            FieldKind::Checkbox | FieldKind::Radio => {
                if field.checked {
                    serialized.push(FormEntry::new(&field.name, &field.value));
                }
            }
            FieldKind::Text => {
                serialized.push(FormEntry::new(&field.name, &field.value));
            }
        }
    }

    serialized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_field_always_serializes() {
        let fields = vec![FormField::text("q", "rust")];
        assert_eq!(serialize_form(&fields), vec![FormEntry::new("q", "rust")]);
    }

    #[test]
    fn unnamed_field_is_skipped() {
        let fields = vec![FormField::text("", "orphan")];
        assert!(serialize_form(&fields).is_empty());
    }

    #[test]
    fn disabled_field_is_skipped() {
        let fields = vec![FormField::text("q", "rust").disabled()];
        assert!(serialize_form(&fields).is_empty());
    }

    #[test]
    fn unchecked_checkbox_is_skipped() {
        let fields = vec![
            FormField::checkbox("opt-in", "yes", false),
            FormField::radio("color", "red", false),
        ];
        assert!(serialize_form(&fields).is_empty());
    }

    #[test]
    fn checked_checkbox_and_radio_serialize() {
        let fields = vec![
            FormField::checkbox("opt-in", "yes", true),
            FormField::radio("color", "red", true),
        ];
        assert_eq!(
            serialize_form(&fields),
            vec![FormEntry::new("opt-in", "yes"), FormEntry::new("color", "red")]
        );
    }

    #[test]
    fn multi_select_expands_selected_options_in_order() {
        let fields = vec![FormField::select_multiple(
            "tags",
            vec![
                SelectOption::new("a", true),
                SelectOption::new("b", false),
                SelectOption::new("c", true),
            ],
        )];
        assert_eq!(
            serialize_form(&fields),
            vec![FormEntry::new("tags", "a"), FormEntry::new("tags", "c")]
        );
    }

    #[test]
    fn multi_select_with_nothing_selected_emits_nothing() {
        let fields = vec![FormField::select_multiple(
            "tags",
            vec![SelectOption::new("a", false)],
        )];
        assert!(serialize_form(&fields).is_empty());
    }

    #[test]
    fn non_submittable_kinds_are_skipped() {
        let fields = vec![
            FormField::of_kind(FieldKind::File, "upload", "x.png"),
            FormField::of_kind(FieldKind::Reset, "reset", "Reset"),
            FormField::of_kind(FieldKind::Submit, "go", "Go"),
            FormField::of_kind(FieldKind::Button, "btn", "Click"),
        ];
        assert!(serialize_form(&fields).is_empty());
    }

    #[test]
    fn output_order_follows_input_order() {
        let fields = vec![
            FormField::text("first", "1"),
            FormField::checkbox("second", "2", true),
            FormField::text("third", "3"),
        ];
        let entries = serialize_form(&fields);
        let names: Vec<&str> = entries
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
