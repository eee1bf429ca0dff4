use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::i18n::Language;
use crate::sky::ObjectKind;

pub type StorytellerResult<T> = std::result::Result<T, StorytellerError>;

/// Errors surfaced by a storyteller backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorytellerError {
    MissingApiKey,
    HttpStatus { status: u16, body: String },
    Transport(String),
    Parse(String),
    EmptyResponse,
}

impl Display for StorytellerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "missing GEMINI_API_KEY"),
            Self::HttpStatus { status, body } => {
                write!(f, "storyteller request failed with status {status}: {body}")
            }
            Self::Transport(msg) => write!(f, "storyteller transport error: {msg}"),
            Self::Parse(msg) => write!(f, "storyteller parse error: {msg}"),
            Self::EmptyResponse => write!(f, "storyteller returned empty story text"),
        }
    }
}

impl Error for StorytellerError {}

/// Everything a storyteller needs to know about tonight's pick.
#[derive(Debug, Clone)]
pub struct StoryRequest {
    pub object_name: String,
    pub kind: ObjectKind,
    pub location: String,
    pub scientific_facts: String,
    pub language: Language,
}

pub trait Storyteller {
    /// Produces the raw markdown of a bedtime story for the given request.
    fn tell(
        &self,
        request: &StoryRequest,
    ) -> impl std::future::Future<Output = StorytellerResult<String>> + Send;
}
