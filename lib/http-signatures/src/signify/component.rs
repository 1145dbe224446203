//!
//! Message components covered by a signature
//!

use http::{header::HOST, Request};
use miette::Diagnostic;
use std::borrow::Cow;
use thiserror::Error;

/// Component resolution error
#[derive(Debug, Diagnostic, Error)]
pub enum Error {
    /// Header had an invalid value (non visible-ASCII value)
    #[error(transparent)]
    InvalidHeaderValue(#[from] http::header::ToStrError),

    /// Derived component isn't known
    #[error("Unknown derived component {0:?}")]
    #[diagnostic(help(
        "known derived components are @method, @path, @target-uri, @authority, @scheme, @request-target and @query"
    ))]
    UnknownPseudoHeader(String),
}

/// Component of the signature
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component<'a> {
    /// Request method
    Method,

    /// Path of the request URI, without the query
    Path,

    /// Full request URI
    TargetUri,

    /// Authority of the request URI
    Authority,

    /// Scheme of the request URI
    Scheme,

    /// Path and query
    RequestTarget,

    /// Query, including the leading `?`
    Query,

    /// Header of the request
    Header(&'a str),
}

impl<'a> Component<'a> {
    /// Classify a component identifier
    ///
    /// Identifiers starting with `@` name derived components, everything else is a header name
    pub fn parse(name: &'a str) -> Result<Self, Error> {
        let component = match name {
            "@method" => Self::Method,
            "@path" => Self::Path,
            "@target-uri" => Self::TargetUri,
            "@authority" => Self::Authority,
            "@scheme" => Self::Scheme,
            "@request-target" => Self::RequestTarget,
            "@query" => Self::Query,
            name if name.starts_with('@') => {
                return Err(Error::UnknownPseudoHeader(name.to_string()));
            }
            header => Self::Header(header),
        };

        Ok(component)
    }

    /// Identifier of the component
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Method => "@method",
            Self::Path => "@path",
            Self::TargetUri => "@target-uri",
            Self::Authority => "@authority",
            Self::Scheme => "@scheme",
            Self::RequestTarget => "@request-target",
            Self::Query => "@query",
            Self::Header(header) => header,
        }
    }

    /// Read the value of the component from the request
    ///
    /// Headers are looked up case-insensitively. Absent headers resolve to an empty string.
    pub fn resolve<'r, B>(&self, request: &'r Request<B>) -> Result<Cow<'r, str>, Error> {
        let uri = request.uri();
        let query = uri.query().filter(|query| !query.is_empty());

        let value = match self {
            Self::Method => Cow::Borrowed(request.method().as_str()),
            // An absolute URI without a path resolves to "/"
            Self::Path => Cow::Borrowed(uri.path()),
            Self::TargetUri => Cow::Owned(uri.to_string()),
            Self::Authority => match uri.authority() {
                Some(authority) => Cow::Borrowed(authority.as_str()),
                None => header_value(request, HOST.as_str())?,
            },
            Self::Scheme => Cow::Borrowed(uri.scheme_str().unwrap_or_default()),
            Self::RequestTarget => match query {
                Some(query) => Cow::Owned(format!("{}?{query}", uri.path())),
                None => Cow::Borrowed(uri.path()),
            },
            Self::Query => query.map_or(Cow::Borrowed(""), |query| Cow::Owned(format!("?{query}"))),
            Self::Header(name) => header_value(request, name)?,
        };

        Ok(value)
    }
}

fn header_value<'r, B>(request: &'r Request<B>, name: &str) -> Result<Cow<'r, str>, Error> {
    let value = match request.headers().get(name) {
        Some(value) => value.to_str()?,
        None => "",
    };

    Ok(Cow::Borrowed(value))
}

/// Resolve the component identified by `name` against the request
#[inline]
pub fn resolve<'r, B>(name: &str, request: &'r Request<B>) -> Result<Cow<'r, str>, Error> {
    Component::parse(name)?.resolve(request)
}
