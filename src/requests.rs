//! Request bodies accepted by the app store hub
//!
//! Each shape annotates every string field with the rule it must satisfy.

use serde::{Deserialize, Serialize};

use crate::{validated_record, validated_union};

validated_record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TagInfo {
        pub user: String => "user_name",
        pub app: String => "app_name",
        pub tag: String => "version_name",
    }
}

validated_record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AppAndTag {
        pub app: String => "app_name",
        pub tag: String => "version_name",
    }
}

validated_record! {
    /// Tag upload; the archive bytes are opaque and not validated here
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TagUpload {
        pub app: String => "app_name",
        pub tag: String => "version_name",
        pub content: Vec<u8>,
    }
}

validated_record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct UserAndApp {
        pub user: String => "user_name",
        pub app: String => "app_name",
    }
}

validated_record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RegistrationForm {
        pub user: String => "user_name",
        pub password: String => "password",
        pub email: String => "email",
    }
}

validated_record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LoginCredentials {
        pub user: String => "user_name",
        pub password: String => "password",
        pub origin: String => "host",
    }
}

validated_record! {
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SearchRequest {
        pub search_term: String => "search_term",
    }
}

validated_union! {
    /// Any request body the hub accepts
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Request {
        TagInfo(TagInfo),
        AppAndTag(AppAndTag),
        TagUpload(TagUpload),
        UserAndApp(UserAndApp),
        Registration(RegistrationForm),
        Login(LoginCredentials),
        Search(SearchRequest),
    }
}

/// Names of the request shapes, as used on the command line and in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    TagInfo,
    AppAndTag,
    TagUpload,
    UserAndApp,
    Registration,
    Login,
    Search,
}

impl RequestKind {
    pub const ALL: [RequestKind; 7] = [
        RequestKind::TagInfo,
        RequestKind::AppAndTag,
        RequestKind::TagUpload,
        RequestKind::UserAndApp,
        RequestKind::Registration,
        RequestKind::Login,
        RequestKind::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::TagInfo => "tag-info",
            RequestKind::AppAndTag => "app-and-tag",
            RequestKind::TagUpload => "tag-upload",
            RequestKind::UserAndApp => "user-and-app",
            RequestKind::Registration => "registration",
            RequestKind::Login => "login",
            RequestKind::Search => "search",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        let name = s.to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Deserialize a JSON body into the matching request shape
    pub fn parse(&self, body: &[u8]) -> Result<Request, serde_json::Error> {
        let request = match self {
            RequestKind::TagInfo => Request::TagInfo(serde_json::from_slice(body)?),
            RequestKind::AppAndTag => Request::AppAndTag(serde_json::from_slice(body)?),
            RequestKind::TagUpload => Request::TagUpload(serde_json::from_slice(body)?),
            RequestKind::UserAndApp => Request::UserAndApp(serde_json::from_slice(body)?),
            RequestKind::Registration => Request::Registration(serde_json::from_slice(body)?),
            RequestKind::Login => Request::Login(serde_json::from_slice(body)?),
            RequestKind::Search => Request::Search(serde_json::from_slice(body)?),
        };
        Ok(request)
    }
}

impl Request {
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::TagInfo(_) => RequestKind::TagInfo,
            Request::AppAndTag(_) => RequestKind::AppAndTag,
            Request::TagUpload(_) => RequestKind::TagUpload,
            Request::UserAndApp(_) => RequestKind::UserAndApp,
            Request::Registration(_) => RequestKind::Registration,
            Request::Login(_) => RequestKind::Login,
            Request::Search(_) => RequestKind::Search,
        }
    }
}
