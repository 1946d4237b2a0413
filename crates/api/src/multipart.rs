//! Buffered `multipart/form-data` parsing for the create and upload
//! endpoints.
//!
//! The whole form is read up front so handlers can look fields up by name
//! regardless of the order the client sent them in.

use std::collections::HashMap;
use std::str::FromStr;

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use geoline_core::upload::IncomingFile;

use crate::error::{AppError, AppResult};

/// A fully read multipart form.
#[derive(Debug, Default)]
pub struct FormData {
    fields: HashMap<String, String>,
    files: HashMap<String, Vec<IncomingFile>>,
}

/// A body cut off by `DefaultBodyLimit` surfaces here as a multipart error
/// carrying 413; everything else is a malformed form.
fn form_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}

impl FormData {
    /// Drain every part of `multipart`.
    ///
    /// Parts with a non-empty file name are files; everything else is text.
    /// Browsers send an empty file part for untouched file inputs, so those
    /// are dropped.
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = FormData::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(form_error)?
        {
            let name = field.name().unwrap_or("").to_string();
            match field.file_name().map(str::to_string) {
                Some(file_name) if file_name.is_empty() => continue,
                Some(file_name) => {
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(form_error)?;
                    form.files.entry(name).or_default().push(IncomingFile {
                        file_name: Some(file_name),
                        content_type,
                        bytes: data.to_vec(),
                    });
                }
                None => {
                    let text = field
                        .text()
                        .await
                        .map_err(form_error)?;
                    form.fields.insert(name, text);
                }
            }
        }

        Ok(form)
    }

    /// Raw text value, empty strings included.
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text value with empty input treated as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.raw(name)
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
    }

    /// A text value that must be present and non-empty.
    pub fn required_text(&self, name: &str) -> AppResult<String> {
        self.text(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing required field '{name}'")))
    }

    /// Parse a text value, `None` when absent.
    pub fn parse<T: FromStr>(&self, name: &str) -> AppResult<Option<T>> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| AppError::BadRequest(format!("Invalid value for field '{name}'"))),
        }
    }

    /// Parse an HTML-form style boolean.
    pub fn bool(&self, name: &str) -> AppResult<Option<bool>> {
        match self.text(name) {
            None => Ok(None),
            Some(raw) => parse_form_bool(&raw)
                .map(Some)
                .ok_or_else(|| AppError::BadRequest(format!("Invalid boolean for field '{name}'"))),
        }
    }

    /// Take the first file sent under `name`.
    pub fn take_file(&mut self, name: &str) -> Option<IncomingFile> {
        let files = self.files.get_mut(name)?;
        if files.is_empty() {
            None
        } else {
            Some(files.remove(0))
        }
    }

    /// Take the first file sent under `name`, failing when there is none.
    pub fn required_file(&mut self, name: &str) -> AppResult<IncomingFile> {
        self.take_file(name)
            .ok_or_else(|| AppError::BadRequest(format!("Missing required '{name}' file")))
    }

    /// Take every file sent under `name`.
    pub fn take_files(&mut self, name: &str) -> Vec<IncomingFile> {
        self.files.remove(name).unwrap_or_default()
    }
}

/// Accepts the spellings HTML forms and HTTP clients commonly send.
pub fn parse_form_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "on" | "yes" => Some(true),
        "false" | "0" | "off" | "no" => Some(false),
        _ => None,
    }
}
