use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Jasmin HTTP API user name.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Query parameter name used by Jasmin (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated user name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Jasmin HTTP API password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` output is redacted.
pub struct Password(String);

impl Password {
    /// Query parameter name used by Jasmin (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient address as sent to the gateway (`to`).
///
/// Invariant: non-empty after trimming. No normalization is applied; parse into
/// [`PhoneNumber`] and convert if you want E.164.
pub struct Destination(String);

impl Destination {
    /// Query parameter name used by Jasmin (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) destination.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the gateway.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Destination {
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender identifier (`from`), either an alphanumeric tag or a number.
///
/// Invariant: non-empty after trimming.
pub struct SenderId(String);

impl SenderId {
    /// Query parameter name used by Jasmin (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Message body (`content`).
///
/// Invariant: not blank. The original value (including whitespace) is preserved.
pub struct Content(String);

impl Content {
    /// Query parameter name used by Jasmin (`content`).
    pub const FIELD: &'static str = "content";

    /// Create validated message content.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the content as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// SMPP data coding scheme id (`coding`).
///
/// Invariant: `0..=14`. The gateway assumes `0` (SMSC default alphabet) when the
/// parameter is omitted, which is also [`Coding::default`].
pub struct Coding(u8);

impl Coding {
    /// Query parameter name used by Jasmin (`coding`).
    pub const FIELD: &'static str = "coding";

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 14;

    /// Create a validated coding id.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery priority (`priority`), `0` lowest to `3` highest.
pub struct Priority(u8);

impl Priority {
    /// Query parameter name used by Jasmin (`priority`).
    pub const FIELD: &'static str = "priority";

    pub const MIN: u8 = 0;
    pub const MAX: u8 = 3;

    /// Create a validated priority.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery receipt level (`dlr-level`).
///
/// - `1`: SMSC level receipt only,
/// - `2`: terminal (handset) level receipt only,
/// - `3`: both.
pub struct DlrLevel(u8);

impl DlrLevel {
    /// Query parameter name used by Jasmin (`dlr-level`).
    pub const FIELD: &'static str = "dlr-level";

    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    /// Create a validated receipt level.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: Self::FIELD,
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// HTTP method the gateway uses to call the receipt callback (`dlr-method`).
pub enum DlrMethod {
    Get,
    Post,
}

impl DlrMethod {
    /// Query parameter name used by Jasmin (`dlr-method`).
    pub const FIELD: &'static str = "dlr-method";

    /// Wire representation (`GET` / `POST`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl std::fmt::Display for DlrMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DlrMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "" => Err(ValidationError::Empty { field: Self::FIELD }),
            _ => Err(ValidationError::UnknownDlrMethod {
                input: s.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Delivery receipt callback endpoint (`dlr-url`).
///
/// Invariant: an absolute `http` or `https` URL. The trimmed input is sent as
/// given; the parsed form is only used for validation and [`CallbackUrl::url`].
pub struct CallbackUrl {
    raw: String,
    parsed: url::Url,
}

impl CallbackUrl {
    /// Query parameter name used by Jasmin (`dlr-url`).
    pub const FIELD: &'static str = "dlr-url";

    /// Parse and validate a callback URL.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        let invalid = || ValidationError::InvalidUrl {
            field: Self::FIELD,
            input: trimmed.to_owned(),
        };
        let parsed = url::Url::parse(trimmed).map_err(|_| invalid())?;
        if !matches!(parsed.scheme(), "http" | "https") || !parsed.has_host() {
            return Err(invalid());
        }
        Ok(Self {
            raw: trimmed.to_owned(),
            parsed,
        })
    }

    /// Trimmed input, as sent to the gateway.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed (normalized) form.
    pub fn url(&self) -> &url::Url {
        &self.parsed
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Query parameter name used by Jasmin (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}
