//! Contract-violation reporting.
//!
//! Reading a checked integral before its failure status was examined, or
//! reading the payload of an invalid one, is a programming defect. Those
//! defects are routed through a process-wide [`Reporter`], installed once at
//! startup. Without an installed reporter the strict default is used: the
//! violation is logged and the thread panics.

use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::de::IntoDeserializer;
use serde::de::value::{self, StrDeserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which part of the must-check contract was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// The value came out of an operation that can fail and nobody looked.
    UncheckedUse,
    /// The payload of an invalid value was read.
    InvalidRead,
}

impl ViolationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ViolationKind::UncheckedUse => "checked integral must be checked before use",
            ViolationKind::InvalidRead => "an invalid checked integral was read",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single contract violation and the call site that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    kind: ViolationKind,
    location: &'static Location<'static>,
}

impl Violation {
    #[must_use]
    pub const fn new(kind: ViolationKind, location: &'static Location<'static>) -> Self {
        Self { kind, location }
    }

    #[must_use]
    pub const fn kind(&self) -> ViolationKind {
        self.kind
    }

    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "contract violation: {} --> {}:{}:{}",
            self.kind,
            self.location.file(),
            self.location.line(),
            self.location.column()
        )
    }
}

/// What happens after a violation has been logged and handed to the hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    /// Panic at the violating call site.
    #[default]
    Strict,
    /// Keep going. Guarded reads return the raw payload, whatever it holds.
    Permissive,
}

impl Enforcement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Enforcement::Strict => "strict",
            Enforcement::Permissive => "permissive",
        }
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Enforcement::Strict)
    }
}

/// Accepts the same names as the config file, ignoring case and surrounding
/// whitespace.
impl FromStr for Enforcement {
    type Err = UnknownEnforcement;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        let deserializer: StrDeserializer<'_, value::Error> = normalized.as_str().into_deserializer();
        Self::deserialize(deserializer).map_err(|source| UnknownEnforcement {
            raw: raw.to_string(),
            source,
        })
    }
}

#[derive(Debug, Error)]
#[error("unknown enforcement mode {raw:?}")]
pub struct UnknownEnforcement {
    raw: String,
    #[source]
    source: value::Error,
}

impl UnknownEnforcement {
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

type Hook = Box<dyn Fn(&Violation) + Send + Sync>;

/// Logs violations, forwards them to an optional hook, and enforces.
pub struct Reporter {
    enforcement: Enforcement,
    hook: Option<Hook>,
}

impl Reporter {
    #[must_use]
    pub fn new(enforcement: Enforcement) -> Self {
        Self {
            enforcement,
            hook: None,
        }
    }

    /// Attach a hook that sees every violation before enforcement runs.
    #[must_use]
    pub fn with_hook(mut self, hook: impl Fn(&Violation) + Send + Sync + 'static) -> Self {
        self.hook = Some(Box::new(hook));
        self
    }

    #[must_use]
    pub const fn enforcement(&self) -> Enforcement {
        self.enforcement
    }

    /// Report one violation. Panics when enforcement is strict.
    pub fn report(&self, violation: &Violation) {
        let location = violation.location();
        match self.enforcement {
            Enforcement::Strict => tracing::error!(
                kind = ?violation.kind(),
                file = location.file(),
                line = location.line(),
                column = location.column(),
                "{}",
                violation.kind()
            ),
            Enforcement::Permissive => tracing::warn!(
                kind = ?violation.kind(),
                file = location.file(),
                line = location.line(),
                column = location.column(),
                "{}",
                violation.kind()
            ),
        }

        if let Some(hook) = &self.hook {
            hook(violation);
        }

        if self.enforcement.is_strict() {
            panic!("{violation}");
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(Enforcement::Strict)
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("enforcement", &self.enforcement)
            .field("hook", &self.hook.is_some())
            .finish()
    }
}

#[derive(Debug, Error)]
#[error("a violation reporter is already installed")]
pub struct InstallError;

static REPORTER: OnceLock<Reporter> = OnceLock::new();

/// Install the process-wide reporter.
///
/// Write-once: fails if a reporter was installed before, or if a violation
/// check already fell back to the strict default.
pub fn install(reporter: Reporter) -> Result<(), InstallError> {
    let enforcement = reporter.enforcement();
    REPORTER.set(reporter).map_err(|_| InstallError)?;
    tracing::debug!(enforcement = enforcement.as_str(), "Violation reporter installed");
    Ok(())
}

/// The installed reporter, or the strict default.
pub fn reporter() -> &'static Reporter {
    REPORTER.get_or_init(Reporter::default)
}

#[track_caller]
pub(crate) fn report(kind: ViolationKind) {
    reporter().report(&Violation::new(kind, Location::caller()));
}
