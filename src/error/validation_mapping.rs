use validator::{ValidationErrors, ValidationErrorsKind};

use super::app_error::FieldViolation;

/// Flattens `validator` output into one violation per failed field check.
/// Field names are reported with their JSON wire spelling (camelCase), not the
/// Rust struct spelling. The request DTOs are flat structs, so nested and list
/// errors only need the dotted-path fallback.
pub(super) fn collect_field_violations(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut out = Vec::new();
    collect(None, errors, &mut out);
    out
}

fn collect(prefix: Option<String>, errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let field = wire_name(field);
        let path = match &prefix {
            Some(prefix) => format!("{prefix}.{field}"),
            None => field.clone(),
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(std::borrow::Cow::to_string)
                        .unwrap_or_else(|| format!("{path} is invalid"));
                    out.push(FieldViolation {
                        field: path.clone(),
                        message,
                    });
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                collect(Some(path), nested, out);
            }
            ValidationErrorsKind::List(nested_items) => {
                for (index, nested) in nested_items {
                    collect(Some(format!("{path}[{index}]")), nested, out);
                }
            }
        }
    }
}

/// snake_case to camelCase, matching the serde rename on the DTOs.
fn wire_name(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}
