//! Error types for the integral pipeline.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced while driving an electronic-structure engine.
///
/// The pipeline is fail-fast: the first error aborts the remaining stages
/// and no partial results are handed out.
#[derive(Debug, Error)]
pub enum Error {
    /// The engine could not be located or initialized.
    ///
    /// Reported by engine loaders at process setup; fatal for the pipeline.
    #[error("failed to initialize engine '{engine}': {detail}")]
    EngineInit {
        /// Name of the engine that failed to come up.
        engine: String,
        /// Loader-reported detail.
        detail: String,
    },

    /// A foreign handle is not an instance of the engine's molecule class.
    #[error("expected an instance of '{expected}', got '{found}'")]
    ClassMismatch {
        /// Class name the engine builds molecules as.
        expected: String,
        /// Class name the handle actually reported.
        found: String,
    },

    /// The engine reported a failure.
    ///
    /// Covers malformed geometry, unsupported basis sets, and failed SCF
    /// convergence. The message is the engine's own, passed through
    /// unmodified; there is no retry or recovery.
    #[error("engine error: {message}")]
    Engine {
        /// Engine-reported message.
        message: String,
    },

    /// An element symbol in the geometry is not in the periodic table.
    ///
    /// Raised only by the electron-counting helpers on
    /// [`MolecularSpec`](crate::spec::MolecularSpec); the pipeline itself
    /// passes symbols through to the engine untouched.
    #[error("unknown element symbol '{symbol}'")]
    UnknownElement {
        /// The symbol that failed to resolve.
        symbol: String,
    },
}
