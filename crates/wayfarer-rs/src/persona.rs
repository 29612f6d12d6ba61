//! Persona templates and their rendering.
//!
//! A [`PersonaSpec`] is the fixed instructional text a session speaks
//! with: a template plus the parameters substituted into it. Rendering is
//! a single linear scan, so a malformed placeholder can never make it
//! quadratic and parameter values are never re-scanned for placeholders.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Template and parameters for the assistant's fixed role.
///
/// Placeholders use `{name}` syntax where `name` is one or more ASCII
/// alphanumeric or underscore characters. Anything else involving braces
/// is literal text. A placeholder with no matching parameter is a
/// [`Error::Configuration`].
///
/// # Example
///
/// ```
/// use wayfarer_rs::persona::PersonaSpec;
///
/// let persona = PersonaSpec::new("Plan {num_days} days in {destination}.")
///     .with_param("num_days", "3")
///     .with_param("destination", "Lisbon");
///
/// assert_eq!(persona.render().unwrap(), "Plan 3 days in Lisbon.");
/// ```
#[derive(Clone, Debug)]
pub struct PersonaSpec {
    template: String,
    parameters: BTreeMap<String, String>,
}

impl PersonaSpec {
    /// Create a persona from a template with no parameters yet.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Add or replace a named parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    /// Substitute every placeholder in the template.
    ///
    /// Errors with [`Error::Configuration`] on the first placeholder that
    /// has no matching parameter. Supplied parameters the template never
    /// references are ignored.
    pub fn render(&self) -> Result<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut rest = self.template.as_str();

        while let Some(start) = rest.find('{') {
            out.push_str(rest.get(..start).unwrap_or_default());
            let after = rest.get(start + 1..).unwrap_or_default();
            match placeholder_name(after) {
                Some(name) => {
                    let value = self.parameters.get(name).ok_or_else(|| {
                        Error::Configuration(format!(
                            "unresolved placeholder `{{{name}}}` in persona template"
                        ))
                    })?;
                    out.push_str(value);
                    rest = after.get(name.len() + 1..).unwrap_or_default();
                }
                None => {
                    // Literal brace, keep scanning after it.
                    out.push('{');
                    rest = after;
                }
            }
        }

        out.push_str(rest);
        Ok(out)
    }
}

/// The well-formed placeholder name at the very start of `text`, if any:
/// one or more `[A-Za-z0-9_]` characters immediately followed by `}`.
fn placeholder_name(text: &str) -> Option<&str> {
    let end = text.find('}')?;
    let name = text.get(..end)?;
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        Some(name)
    } else {
        None
    }
}
