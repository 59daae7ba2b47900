//! Page rendering.
//!
//! The calendar page template is compiled into the binary and registered once
//! at startup. Rendering is strict: referencing a field the payload does not
//! carry is a render error, which the page handler turns into a 500.

use crate::errors::LcError;
use crate::grid::RenderPayload;
use minijinja::{Environment, UndefinedBehavior};

/// Identifier of the calendar page template.
pub const INDEX_TEMPLATE: &str = "index.html";

const INDEX_SOURCE: &str = include_str!("../templates/index.html");

/// Renders a payload with a named template.
///
/// Trait seam so handlers can be exercised with a failing renderer.
pub trait PageRenderer: Send + Sync {
    fn render(&self, name: &str, payload: &RenderPayload) -> Result<String, LcError>;
}

/// minijinja-backed renderer.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Engine with the embedded calendar page registered as `index.html`.
    ///
    /// # Errors
    ///
    /// Returns `LcError::Template` if the embedded template does not parse.
    pub fn new() -> Result<Self, LcError> {
        Self::with_template(INDEX_TEMPLATE, INDEX_SOURCE)
    }

    /// Engine with a single template registered under `name`.
    pub fn with_template(name: &'static str, source: &'static str) -> Result<Self, LcError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template(name, source)
            .map_err(|e| LcError::Template(e.to_string()))?;

        Ok(Self { env })
    }
}

impl PageRenderer for TemplateEngine {
    fn render(&self, name: &str, payload: &RenderPayload) -> Result<String, LcError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(payload)?)
    }
}
