use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Convenient result alias for patternkit_core.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Log/handling importance. Adapters map this onto `tracing` levels.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

/// Where an error came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Domain {
    Factory,
    State,
    Config,
    Other,
}

/// Stable error "kind" for matching/branching.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidArgument,
    InvalidState,
    NotFound,
    Other,
}

/// Optional structured payload for rich context without forcing allocation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Payload {
    None,

    /// Generic key/value context.
    Context {
        key: &'static str,
        value: Cow<'static, str>,
    },

    /// Factory key that triggered the error.
    Key(i32),
}

/// The one error type that crosses module boundaries in patternkit_core.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{severity:?}: {message}")]
pub struct CoreError {
    pub domain: Domain,
    pub kind: ErrorKind,
    pub severity: Severity,
    pub message: Cow<'static, str>,
    pub payload: Payload,
}

impl CoreError {
    // ---------------- Fluent entry points ----------------

    #[inline]
    pub fn info() -> ErrB {
        ErrB::new(Severity::Info)
    }
    #[inline]
    pub fn warn() -> ErrB {
        ErrB::new(Severity::Warn)
    }
    #[inline]
    pub fn error() -> ErrB {
        ErrB::new(Severity::Error)
    }

    /// A context method was called before `initialize`.
    pub fn not_initialized(operation: &'static str) -> Self {
        CoreError::error()
            .domain(Domain::State)
            .kind(ErrorKind::InvalidState)
            .msg("state context used before initialize")
            .payload(Payload::Context {
                key: "operation",
                value: Cow::Borrowed(operation),
            })
            .build()
    }

    /// `initialize` was called on a context that already has a state.
    pub fn already_initialized() -> Self {
        CoreError::error()
            .domain(Domain::State)
            .kind(ErrorKind::InvalidState)
            .msg("state context already initialized")
            .build()
    }

    /// No builder is registered under `key`.
    pub fn unknown_key(key: i32) -> Self {
        CoreError::warn()
            .domain(Domain::Factory)
            .kind(ErrorKind::NotFound)
            .msgf(format_args!("no builder registered for key {key}"))
            .payload(Payload::Key(key))
            .build()
    }

    /// A configuration value could not be used.
    pub fn invalid_config(key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        CoreError::warn()
            .domain(Domain::Config)
            .kind(ErrorKind::InvalidArgument)
            .msg("invalid configuration value")
            .payload(Payload::Context {
                key,
                value: value.into(),
            })
            .build()
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }
}

/// Fluent builder that behaves like iterator chains (takes self, returns Self).
/// Defaults:
/// - domain = Other
/// - kind = Other
/// - message = ""
/// - payload = None
#[derive(Debug, Clone)]
pub struct ErrB {
    domain: Domain,
    kind: ErrorKind,
    severity: Severity,
    message: Cow<'static, str>,
    payload: Payload,
}

impl ErrB {
    #[inline]
    fn new(severity: Severity) -> Self {
        Self {
            domain: Domain::Other,
            kind: ErrorKind::Other,
            severity,
            message: Cow::Borrowed(""),
            payload: Payload::None,
        }
    }

    #[inline]
    pub fn domain(mut self, d: Domain) -> Self {
        self.domain = d;
        self
    }

    #[inline]
    pub fn kind(mut self, k: ErrorKind) -> Self {
        self.kind = k;
        self
    }

    #[inline]
    pub fn msg(mut self, m: impl Into<Cow<'static, str>>) -> Self {
        self.message = m.into();
        self
    }

    /// Formatting-friendly message setter (allocates once).
    #[inline]
    pub fn msgf(mut self, args: fmt::Arguments<'_>) -> Self {
        self.message = Cow::Owned(args.to_string());
        self
    }

    /// Replaces any previous payload.
    #[inline]
    pub fn payload(mut self, p: Payload) -> Self {
        self.payload = p;
        self
    }

    #[inline]
    pub fn build(self) -> CoreError {
        CoreError {
            domain: self.domain,
            kind: self.kind,
            severity: self.severity,
            message: self.message,
            payload: self.payload,
        }
    }
}
