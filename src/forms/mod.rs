// ============================================================================
// FORMS - Validación declarativa de formularios antes de tocar los stores
// ============================================================================

pub mod schemas;

use std::collections::HashMap;

use regex::Regex;

use crate::error::{AppError, AppResult, FieldError};

pub use schemas::*;

/// Valores crudos de un formulario, por nombre de campo
pub type FormValues = HashMap<String, String>;

/// Valor recortado de un campo; `""` si no existe
pub fn value<'a>(values: &'a FormValues, field: &str) -> &'a str {
    values.get(field).map(|v| v.trim()).unwrap_or("")
}

/// Valor opcional: vacío → `None`
pub fn optional_value(values: &FormValues, field: &str) -> Option<String> {
    Some(value(values, field))
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub enum Constraint {
    Pattern(&'static Regex),
    MinLength(usize),
    Numeric,
    MinValue(f64),
}

impl Constraint {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Pattern(re) => re.is_match(value),
            Self::MinLength(n) => value.chars().count() >= *n,
            Self::Numeric => value.parse::<f64>().map(f64::is_finite).unwrap_or(false),
            Self::MinValue(min) => value.parse::<f64>().map(|v| v >= *min).unwrap_or(false),
        }
    }
}

/// Reglas de un campo. Un campo vacío y no requerido no se valida.
pub struct FieldRule {
    field: &'static str,
    required: Option<&'static str>,
    checks: Vec<(Constraint, &'static str)>,
}

impl FieldRule {
    pub fn new(field: &'static str) -> Self {
        Self {
            field,
            required: None,
            checks: Vec::new(),
        }
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn check(mut self, constraint: Constraint, message: &'static str) -> Self {
        self.checks.push((constraint, message));
        self
    }

    /// Primer error del campo, en el orden en que se declararon las reglas
    fn validate(&self, values: &FormValues) -> Option<FieldError> {
        let raw = value(values, self.field);

        if raw.is_empty() {
            return self.required.map(|message| FieldError {
                field: self.field,
                message,
            });
        }

        self.checks
            .iter()
            .find(|(constraint, _)| !constraint.accepts(raw))
            .map(|(_, message)| FieldError {
                field: self.field,
                message,
            })
    }
}

pub struct FormSchema {
    rules: Vec<FieldRule>,
}

impl FormSchema {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// `Err(Validation)` con un error por campo inválido
    pub fn validate(&self, values: &FormValues) -> AppResult<()> {
        let errors: Vec<FieldError> = self
            .rules
            .iter()
            .filter_map(|rule| rule.validate(values))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            log::debug!("📝 [FORM] {} campo(s) inválido(s)", errors.len());
            Err(AppError::Validation(errors))
        }
    }
}

/// Construye `FormValues` a partir de pares literales
pub fn form_values<const N: usize>(pairs: [(&str, &str); N]) -> FormValues {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
