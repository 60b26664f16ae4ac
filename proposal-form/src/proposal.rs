//! Proposal form fields and validation.

use hostdom::FormData;
use serde::Serialize;

/// Choices for the `type` field. The empty entry means "not chosen".
pub const PROPOSAL_TYPES: [&str; 3] = ["", "Talk", "Workshop"];

/// Choices for the `length` field.
pub const PROPOSAL_LENGTHS: [&str; 6] = ["", "15 mins", "30 mins", "45 mins", "1 hour", "1.5 hours"];

/// A submitted proposal, as read back from the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProposalFields {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub length: String,
    pub description: String,
}

impl ProposalFields {
    pub fn from_form(data: &FormData) -> Self {
        let field = |name: &str| data.get(name).unwrap_or_default().to_string();
        Self {
            title: field("title"),
            kind: field("type"),
            length: field("length"),
            description: field("description"),
        }
    }

    /// Field errors keyed by field name. Empty when the proposal is valid.
    pub fn validate(&self) -> Vec<(&'static str, String)> {
        let mut errors = Vec::new();
        if self.title.is_empty() {
            errors.push(("title", "The proposal must include a title.".to_string()));
        }
        if !is_choice(&PROPOSAL_TYPES, &self.kind) {
            errors.push(("type", format!("Proposal type must be {}.", one_of(&PROPOSAL_TYPES))));
        }
        if !is_choice(&PROPOSAL_LENGTHS, &self.length) {
            errors.push((
                "length",
                format!("Proposal length must be {}.", one_of(&PROPOSAL_LENGTHS)),
            ));
        }
        errors
    }
}

/// The empty entry is a valid submission: the field is optional.
fn is_choice(choices: &[&str], value: &str) -> bool {
    choices.contains(&value)
}

/// `"a", "b", or "c"`
fn one_of(choices: &[&str]) -> String {
    let quoted: Vec<String> = choices
        .iter()
        .filter(|c| !c.is_empty())
        .map(|c| format!("\"{c}\""))
        .collect();
    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.clone(),
        Some((last, [first])) => format!("{first} or {last}"),
        Some((last, rest)) => format!("{}, or {last}", rest.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of_formats_disjunction() {
        assert_eq!(one_of(&PROPOSAL_TYPES), "\"Talk\" or \"Workshop\"");
        assert_eq!(
            one_of(&["", "a", "b", "c"]),
            "\"a\", \"b\", or \"c\""
        );
    }

    #[test]
    fn test_validate_rejects_unknown_length() {
        let fields = ProposalFields {
            title: "Rust".to_string(),
            kind: "Talk".to_string(),
            length: "2 days".to_string(),
            description: String::new(),
        };
        let errors = fields.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].0, "length");
    }

    #[test]
    fn test_validate_accepts_empty_choices() {
        let fields = ProposalFields {
            title: "Rust".to_string(),
            ..Default::default()
        };
        assert!(fields.validate().is_empty());
    }
}
