use docsign_core::{Context, OsEnv};

/// Create a context wired to the process environment.
///
/// This is the context most applications want: credential providers resolve
/// their environment variables through [`OsEnv`].
pub fn default_context() -> Context {
    Context::new().with_env(OsEnv)
}
