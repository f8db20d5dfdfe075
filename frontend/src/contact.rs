use std::rc::Rc;

use gloo_net::http::{Method, Request};
use log::{debug, info, warn};
use serde::Serialize;
use thiserror::Error;
use yew::functional::Reducible;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent.";
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Form control name, also the JSON key sent to the endpoint.
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name:",
            ContactField::Email => "Email:",
            ContactField::Message => "Message:",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl FormStatus {
    pub fn is_submitting(self) -> bool {
        self == FormStatus::Submitting
    }

    pub fn feedback(self) -> Option<&'static str> {
        match self {
            FormStatus::Success => Some(SUCCESS_MESSAGE),
            FormStatus::Error => Some(ERROR_MESSAGE),
            FormStatus::Idle | FormStatus::Submitting => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("form endpoint answered with status {0}")]
    Rejected(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),
}

pub enum FormAction {
    Edit(ContactField, String),
    Submit,
    Resolved(Result<(), SubmitError>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub status: FormStatus,
}

impl ContactFormState {
    /// Fields to send for a new submission, `None` while one is in flight.
    pub fn submission(&self) -> Option<ContactFields> {
        if self.status.is_submitting() {
            None
        } else {
            Some(self.fields.clone())
        }
    }
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            // Editing never resets the status flag.
            FormAction::Edit(field, value) => next.fields.set(field, value),
            FormAction::Submit => {
                if self.status.is_submitting() {
                    return self;
                }
                next.status = FormStatus::Submitting;
            }
            FormAction::Resolved(outcome) => {
                if !self.status.is_submitting() {
                    return self;
                }
                match outcome {
                    Ok(()) => {
                        next.status = FormStatus::Success;
                        next.fields = ContactFields::default();
                    }
                    Err(_) => next.status = FormStatus::Error,
                }
            }
        }
        Rc::new(next)
    }
}

/// One outbound call, described independently of how it is sent.
#[derive(Clone, Debug)]
pub struct ContactRequest {
    pub method: Method,
    pub url: String,
    pub accept: &'static str,
    pub content_type: &'static str,
    pub body: String,
}

impl ContactRequest {
    pub fn new(endpoint: &str, fields: &ContactFields) -> Result<Self, SubmitError> {
        Ok(Self {
            method: Method::POST,
            url: endpoint.to_string(),
            accept: "application/json",
            content_type: "application/json",
            body: serde_json::to_string(fields)?,
        })
    }
}

#[allow(async_fn_in_trait)]
pub trait ContactTransport {
    /// Sends the request once. Any 2xx answer is success.
    async fn deliver(&self, request: &ContactRequest) -> Result<(), SubmitError>;
}

/// Sends through the browser's fetch via gloo-net.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HttpTransport;

impl ContactTransport for HttpTransport {
    async fn deliver(&self, request: &ContactRequest) -> Result<(), SubmitError> {
        let response = Request::new(&request.url)
            .method(request.method)
            .header("Accept", request.accept)
            .header("Content-Type", request.content_type)
            .body(request.body.clone())
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.ok() {
            Ok(())
        } else {
            Err(SubmitError::Rejected(response.status()))
        }
    }
}

pub async fn submit_contact<T: ContactTransport>(
    transport: &T,
    endpoint: &str,
    fields: &ContactFields,
) -> Result<(), SubmitError> {
    let request = ContactRequest::new(endpoint, fields)?;
    debug!("Posting contact form to {}", request.url);

    match transport.deliver(&request).await {
        Ok(()) => {
            info!("Contact form delivered");
            Ok(())
        }
        Err(e) => {
            warn!("Contact form submission failed: {}", e);
            Err(e)
        }
    }
}

/// Runs one click of the send button: claims the form, posts the fields and
/// reports the outcome. Does nothing while a submission is already in flight.
pub async fn submit_once<T, D>(state: &ContactFormState, transport: &T, endpoint: &str, dispatch: D)
where
    T: ContactTransport,
    D: Fn(FormAction),
{
    let Some(fields) = state.submission() else {
        debug!("Submission already in flight, ignoring");
        return;
    };
    dispatch(FormAction::Submit);

    let outcome = submit_contact(transport, endpoint, &fields).await;
    dispatch(FormAction::Resolved(outcome));
}
