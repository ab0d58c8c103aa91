use crate::errors::AppError;
use crate::models::profile::ProfileDocument;

/// Applies write-time normalization: trims `name`, `email` and skills, and
/// lowercases `email`.
pub fn normalize(doc: &mut ProfileDocument) {
    doc.name = doc.name.trim().to_string();
    doc.email = doc.email.trim().to_lowercase();
    for skill in &mut doc.skills {
        *skill = skill.trim().to_string();
    }
}

/// Collects every missing required field. Empty when the document is valid.
pub fn validation_errors(doc: &ProfileDocument) -> Vec<String> {
    let mut errors = Vec::new();

    if doc.name.trim().is_empty() {
        errors.push("name is required".to_string());
    }
    if doc.email.trim().is_empty() {
        errors.push("email is required".to_string());
    }

    for (i, project) in doc.projects.iter().enumerate() {
        if project.title.trim().is_empty() {
            errors.push(format!("projects[{i}].title is required"));
        }
        if project.description.trim().is_empty() {
            errors.push(format!("projects[{i}].description is required"));
        }
    }

    errors
}

/// Normalizes then validates a document about to be written.
pub fn prepare(doc: &mut ProfileDocument) -> Result<(), AppError> {
    normalize(doc);
    let errors = validation_errors(doc);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Profile validation failed: {}",
            errors.join("; ")
        )))
    }
}
