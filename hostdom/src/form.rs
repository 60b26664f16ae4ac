//! Form field collection and submission encoding.

use serde::Serialize;

use crate::element::{self, Element};

/// The `name=value` pairs a form would submit, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormData {
    fields: Vec<(String, String)>,
}

impl FormData {
    /// Walk a form subtree and collect every named, enabled `input`,
    /// `select` or `textarea`.
    pub fn collect(form: &Element) -> Self {
        let mut fields = Vec::new();
        element::walk(form, &mut |el: &Element| {
            if el.disabled || !matches!(el.tag.as_str(), "input" | "select" | "textarea") {
                return;
            }
            let Some(name) = el.get_attr("name") else {
                return;
            };
            if name.is_empty() {
                return;
            }
            let value = match el.tag.as_str() {
                "textarea" => el.text_content(),
                _ => el.get_attr("value").unwrap_or_default().to_string(),
            };
            fields.push((name.to_string(), value));
        });
        Self { fields }
    }

    /// First value submitted under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn to_urlencoded(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}
