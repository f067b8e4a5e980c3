//! Upload form extraction.
//!
//! `POST /upload` accepts the `note_name` and `note` fields either as
//! `multipart/form-data` (what the bundled HTML form sends) or as
//! `application/x-www-form-urlencoded`.

use axum::{
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::Deserialize;

use crate::error::ApiError;

/// Form field carrying the note name.
pub const NAME_FIELD: &str = "note_name";
/// Form field carrying the note text.
pub const TEXT_FIELD: &str = "note";

/// A note submitted through the upload form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    pub name: String,
    pub text: String,
}

/// Raw form fields before validation.
#[derive(Debug, Default, Deserialize)]
struct UploadFields {
    note_name: Option<String>,
    #[serde(default)]
    note: String,
}

impl UploadFields {
    fn into_note_form(self) -> Result<NoteForm, ApiError> {
        match self.note_name {
            Some(name) if !name.is_empty() => Ok(NoteForm {
                name,
                text: self.note,
            }),
            _ => Err(ApiError::BadRequest(format!(
                "missing form field: {NAME_FIELD}"
            ))),
        }
    }
}

impl<S> FromRequest<S> for NoteForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("multipart/form-data"));

        let fields = if is_multipart {
            let multipart = Multipart::from_request(req, state).await?;
            read_multipart(multipart).await?
        } else {
            let Form(fields) = Form::<UploadFields>::from_request(req, state).await?;
            fields
        };

        fields.into_note_form()
    }
}

/// Collect the known fields from a multipart body. Unknown fields are skipped.
async fn read_multipart(mut multipart: Multipart) -> Result<UploadFields, ApiError> {
    let mut fields = UploadFields::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(NAME_FIELD) => {
                fields.note_name = Some(field.text().await?);
            }
            Some(TEXT_FIELD) => {
                fields.note = field.text().await?;
            }
            _ => {}
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_rejected() {
        let fields = UploadFields {
            note_name: None,
            note: "text".to_string(),
        };
        assert!(matches!(
            fields.into_note_form(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let fields = UploadFields {
            note_name: Some(String::new()),
            note: "text".to_string(),
        };
        assert!(fields.into_note_form().is_err());
    }

    #[test]
    fn test_missing_text_defaults_to_empty() {
        let fields: UploadFields = serde_urlencoded::from_str("note_name=a").unwrap();
        let form = fields.into_note_form().unwrap();
        assert_eq!(form.name, "a");
        assert_eq!(form.text, "");
    }
}
