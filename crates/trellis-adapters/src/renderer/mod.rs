//! Template rendering.
//!
//! Files ending in `.hbs` are Handlebars templates rendered against the
//! project configuration; every other file is copied byte for byte.
//!
//! ## Template variables
//!
//! The context is the configuration serialized in camelCase:
//! - `{{projectName}}`
//! - `{{frontend}}`, `{{addons}}`, `{{examples}}` (arrays)
//! - `{{backend}}`, `{{runtime}}`, `{{database}}`, `{{orm}}`, `{{dbSetup}}`,
//!   `{{auth}}`, `{{api}}`, `{{webDeploy}}`, `{{serverDeploy}}`, `{{packageManager}}`
//!
//! Besides the built-in `eq`, `ne`, `and`, `or` and `not` helpers, templates can
//! use `includes` to test array membership: `{{#if (includes frontend "next")}}`.

mod handlebars;

pub use self::handlebars::{HandlebarsRenderer, TEMPLATE_EXTENSION};
