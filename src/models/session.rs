// ============================================================================
// SESSION CONTEXT - Usuario actual + token CSRF (inyectados por la plantilla)
// ============================================================================

/// Estado de autenticación tal como lo expone la página
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserState {
    Anonymous,
    Authenticated(String),
}

impl UserState {
    /// Compara con el sentinel literal del usuario anónimo (igualdad exacta)
    pub fn from_label(label: &str, anonymous_sentinel: &str) -> Self {
        if label == anonymous_sentinel {
            UserState::Anonymous
        } else {
            UserState::Authenticated(label.to_string())
        }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, UserState::Anonymous)
    }

    pub fn label<'a>(&'a self, anonymous_sentinel: &'a str) -> &'a str {
        match self {
            UserState::Anonymous => anonymous_sentinel,
            UserState::Authenticated(name) => name,
        }
    }
}

/// Contexto de sesión, de solo lectura durante toda la vista de página
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user: UserState,
    pub csrf_token: String,
}

impl SessionContext {
    pub fn new(user: UserState, csrf_token: impl Into<String>) -> Self {
        Self {
            user,
            csrf_token: csrf_token.into(),
        }
    }

    pub fn anonymous(csrf_token: impl Into<String>) -> Self {
        Self::new(UserState::Anonymous, csrf_token)
    }

    pub fn authenticated(name: impl Into<String>, csrf_token: impl Into<String>) -> Self {
        Self::new(UserState::Authenticated(name.into()), csrf_token)
    }

    pub fn is_anonymous(&self) -> bool {
        self.user.is_anonymous()
    }
}
