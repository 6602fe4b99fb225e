use crate::registry::ResolvedRegistry;
use axum::extract::FromRef;
use sitehub_domain::config::AppConfig;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiStateError {
    #[error("state validation error: {message}")]
    Validation { message: Cow<'static, str> },
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: AppConfig,
    pub registry: ResolvedRegistry,
}

#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    /// The resolved feature registry this host serves.
    #[must_use]
    pub fn registry(&self) -> &ResolvedRegistry {
        &self.inner.registry
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for AppConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<AppConfig>,
    registry: Option<ResolvedRegistry>,
}

impl ApiStateBuilder {
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn registry(mut self, registry: ResolvedRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns [`ApiStateError::Validation`] if config or registry is missing.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config = self.config.ok_or_else(|| ApiStateError::Validation {
            message: "AppConfig not provided".into(),
        })?;
        let registry = self.registry.ok_or_else(|| ApiStateError::Validation {
            message: "ResolvedRegistry not provided".into(),
        })?;

        Ok(ApiState { inner: Arc::new(ApiStateInner { config, registry }) })
    }
}
