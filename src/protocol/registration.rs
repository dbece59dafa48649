//! Registration directive handed to the browser.
//!
//! The directive is declarative. The page exposes two actions that the user
//! triggers by hand; the browser decides whether to honour them (it may
//! reject an insecure context or an unknown scheme) and never reports back to
//! this service. Nothing here runs on page load.

use crate::config::HandlerConfig;
use crate::protocol::scheme::{InvalidScheme, Scheme};

/// Name of the page action that registers the handler.
pub const BIND_ACTION: &str = "bindHandler";

/// Name of the page action that revokes it.
pub const UNBIND_ACTION: &str = "unbindHandler";

/// Scheme, handler URL template (`%s` is the activated URL) and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDirective {
    scheme: Scheme,
    handler_template: String,
    title: String,
}

impl RegistrationDirective {
    pub fn new(
        scheme: Scheme,
        handler_template: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            scheme,
            handler_template: handler_template.into(),
            title: title.into(),
        }
    }

    /// Register and unregister share one scheme and one template.
    pub fn from_config(config: &HandlerConfig) -> Result<Self, InvalidScheme> {
        Ok(Self::new(
            Scheme::parse(&config.protocol.scheme)?,
            config.endpoints.handler_template(),
            config.protocol.name.clone(),
        ))
    }

    pub fn register_call(&self) -> String {
        format!(
            "navigator.registerProtocolHandler({}, {}, {})",
            js_string(self.scheme.as_str()),
            js_string(&self.handler_template),
            js_string(&self.title)
        )
    }

    pub fn unregister_call(&self) -> String {
        format!(
            "navigator.unregisterProtocolHandler({}, {})",
            js_string(self.scheme.as_str()),
            js_string(&self.handler_template)
        )
    }

    /// Body of the page's `<script>` element: the two no-argument actions.
    pub fn script(&self) -> String {
        format!(
            "{}\n{}",
            action(BIND_ACTION, &self.register_call()),
            action(UNBIND_ACTION, &self.unregister_call())
        )
    }
}

fn action(name: &str, call: &str) -> String {
    format!(
        "const {name} = () => {{\n  \
         try {{\n    {call};\n  }} \
         catch (err) {{\n    console.warn(\"{name} failed\", err);\n  }}\n\
         }};"
    )
}

/// JSON string literals are valid JS; `<` is escaped so the text cannot end
/// the surrounding `<script>` element.
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string().replace('<', "\\u003c")
}
