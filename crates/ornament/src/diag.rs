//! Diagnostics.

use std::fmt::{self, Display, Formatter};

use ecow::{eco_vec, EcoVec};

/// Early-return with a [`StrResult`] or [`HintedStrResult`].
///
/// If called with just a string and format args, returns with a
/// `StrResult` (or anything a string converts into). You can also emit hints
/// with the `; hint: "..."` syntax, which returns a `HintedStrResult`.
///
/// ```ignore
/// bail!("bailing with a {}", "string result");
/// bail!(
///     "bailing with a {}", "hinted result";
///     hint: "hint 1";
///     hint: "hint 2";
/// );
/// ```
#[macro_export]
#[doc(hidden)]
macro_rules! __bail {
    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)?
    ) => {
        return Err($crate::diag::error!(
            $fmt $(, $arg)*
            $(; hint: $hint $(, $hint_arg)*)*
        ))
    };
}

/// Construct an [`EcoString`] or [`HintedString`].
#[macro_export]
#[doc(hidden)]
macro_rules! __error {
    // For error!("just a {}", "string").
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::diag::eco_format!($fmt, $($arg),*).into()
    };

    // For error!("a hinted {}", "string"; hint: "some hint"; hint: "...")
    (
        $fmt:literal $(, $arg:expr)*
        $(; hint: $hint:literal $(, $hint_arg:expr)*)*
        $(,)?
    ) => {
        $crate::diag::HintedString::new(
            $crate::diag::eco_format!($fmt, $($arg),*)
        ) $(.with_hint($crate::diag::eco_format!($hint, $($hint_arg),*)))*
    };
}

#[rustfmt::skip]
#[doc(inline)]
pub use {
    crate::__bail as bail,
    crate::__error as error,
    ecow::{eco_format, EcoString},
};

/// A result type with a string error message.
pub type StrResult<T> = Result<T, EcoString>;

/// A result type with a string error message and hints.
pub type HintedStrResult<T> = Result<T, HintedString>;

/// A string message with hints.
///
/// The first element of the vector contains the message, the remaining
/// elements are the hints. The vector is guaranteed to not be empty.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct HintedString(EcoVec<EcoString>);

impl HintedString {
    /// Creates a new hinted string with the given message.
    pub fn new(message: EcoString) -> Self {
        Self(eco_vec![message])
    }

    /// A diagnostic message describing the problem.
    pub fn message(&self) -> &EcoString {
        self.0.first().unwrap()
    }

    /// Additional hints to the user, indicating how this error could be
    /// avoided or worked around.
    pub fn hints(&self) -> &[EcoString] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Adds a single hint to the hinted string.
    pub fn hint(&mut self, hint: impl Into<EcoString>) {
        self.0.push(hint.into());
    }

    /// Adds a single hint to the hinted string.
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint(hint);
        self
    }
}

impl<S> From<S> for HintedString
where
    S: Into<EcoString>,
{
    fn from(value: S) -> Self {
        Self::new(value.into())
    }
}

/// Enrich a [`StrResult`] or [`HintedStrResult`] with a hint.
pub trait Hint<T> {
    /// Add the hint.
    fn hint(self, hint: impl Into<EcoString>) -> HintedStrResult<T>;
}

impl<T, S> Hint<T> for Result<T, S>
where
    S: Into<EcoString>,
{
    fn hint(self, hint: impl Into<EcoString>) -> HintedStrResult<T> {
        self.map_err(|message| HintedString::new(message.into()).with_hint(hint))
    }
}

impl<T> Hint<T> for HintedStrResult<T> {
    fn hint(self, hint: impl Into<EcoString>) -> HintedStrResult<T> {
        self.map_err(|mut error| {
            error.hint(hint.into());
            error
        })
    }
}

/// A style token that does not name any known kind of a family.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct UnknownKind {
    /// What was being looked up, e.g. `shape` or `pattern`.
    pub family: &'static str,
    /// The token as given by the user.
    pub given: EcoString,
    /// The canonical names of all valid kinds.
    pub valid: &'static [&'static str],
}

impl UnknownKind {
    /// The hint listing all valid kinds.
    pub fn available(&self) -> EcoString {
        eco_format!("available: {}", self.valid.join(", "))
    }
}

impl Display for UnknownKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "unknown {} kind `{}`", self.family, self.given)
    }
}

impl From<UnknownKind> for HintedString {
    fn from(err: UnknownKind) -> Self {
        HintedString::new(eco_format!("{err}")).with_hint(err.available())
    }
}

/// An error produced while generating an element.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum GenerateError {
    /// The requested shape or pattern kind does not exist. This is reported
    /// to the user but does not count as a failed run.
    UnknownKind(UnknownKind),
    /// The parameters do not describe a drawable element.
    Invalid(HintedString),
}

impl GenerateError {
    /// Whether the error should make the process exit unsuccessfully.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::UnknownKind(_))
    }
}

impl Display for GenerateError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::UnknownKind(err) => err.fmt(f),
            Self::Invalid(err) => f.write_str(err.message()),
        }
    }
}

impl From<UnknownKind> for GenerateError {
    fn from(err: UnknownKind) -> Self {
        Self::UnknownKind(err)
    }
}

impl From<HintedString> for GenerateError {
    fn from(err: HintedString) -> Self {
        Self::Invalid(err)
    }
}

impl From<EcoString> for GenerateError {
    fn from(message: EcoString) -> Self {
        Self::Invalid(HintedString::new(message))
    }
}

impl From<GenerateError> for HintedString {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::UnknownKind(err) => err.into(),
            GenerateError::Invalid(err) => err,
        }
    }
}
