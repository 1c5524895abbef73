//! The workspace-wide error type

/// Error returned by the public ML-KEM operations
///
/// `context` names the operation or object that failed. With `std` a
/// free-form `message` is attached as well; it never contains secret
/// material. A ciphertext that fails re-encryption is not an error: it
/// yields the implicit-rejection secret instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An encapsulation or decapsulation key failed a structural check
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A byte string had the wrong length for its type
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The caller-supplied random source failed
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// A primitive was driven in an order it does not support
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result alias over [`Error`]
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context, keeping everything else
    pub fn with_context(mut self, context: &'static str) -> Self {
        match &mut self {
            Self::InvalidKey { context: c, .. }
            | Self::InvalidLength { context: c, .. }
            | Self::RandomGenerationError { context: c, .. }
            | Self::Other { context: c, .. } => *c = context,
        }
        self
    }

    /// The static context string of the error
    pub fn context(&self) -> &'static str {
        match self {
            Self::InvalidKey { context, .. }
            | Self::InvalidLength { context, .. }
            | Self::RandomGenerationError { context, .. }
            | Self::Other { context, .. } => context,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "invalid key",
            Self::InvalidLength { .. } => "invalid length",
            Self::RandomGenerationError { .. } => "random generation failed",
            Self::Other { .. } => "error",
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if let Self::InvalidLength {
            context,
            expected,
            actual,
        } = self
        {
            return write!(
                f,
                "{}: {} (expected {}, got {})",
                context,
                self.kind(),
                expected,
                actual
            );
        }
        write!(f, "{}: {}", self.context(), self.kind())?;
        #[cfg(feature = "std")]
        match self {
            Self::InvalidKey { message, .. }
            | Self::RandomGenerationError { message, .. }
            | Self::Other { message, .. }
                if !message.is_empty() =>
            {
                write!(f, ": {}", message)?;
            }
            _ => {}
        }
        Ok(())
    }
}
