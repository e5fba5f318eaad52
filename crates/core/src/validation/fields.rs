//! Column-level checks driven by the `validator` derives on each record.

use validator::{Validate, ValidationError};

use super::rules::{Violation, ViolationKind};

/// Convert a record's column constraint failures into violations.
///
/// Output is ordered by field name so repeated runs report identically.
pub fn field_violations<T: Validate>(record: &T) -> Vec<Violation> {
    let errors = match record.validate() {
        Ok(()) => return Vec::new(),
        Err(errors) => errors,
    };

    let mut violations: Vec<Violation> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            let field = field.to_string();
            errs.iter().map(move |err| Violation {
                kind: ViolationKind::InvalidField {
                    code: err.code.to_string(),
                },
                fields: vec![field.clone()],
                message: describe(&field, err),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.fields.cmp(&b.fields));
    violations
}

fn describe(field: &str, err: &ValidationError) -> String {
    if let Some(message) = &err.message {
        return message.to_string();
    }
    let param = |name: &str| err.params.get(name).map(|v| v.to_string());
    match &*err.code {
        "length" => match (param("min"), param("max")) {
            (Some(min), Some(max)) => {
                format!("\"{field}\" must be between {min} and {max} characters.")
            }
            (None, Some(max)) => format!("\"{field}\" must be at most {max} characters."),
            (Some(min), None) => format!("\"{field}\" must be at least {min} characters."),
            (None, None) => format!("\"{field}\" has an invalid length."),
        },
        "range" => match param("min") {
            Some(min) => format!("\"{field}\" must be at least {min}."),
            None => format!("\"{field}\" is out of range."),
        },
        "email" => format!("\"{field}\" must be an e-mail address."),
        code => format!("\"{field}\" is invalid ({code})."),
    }
}
