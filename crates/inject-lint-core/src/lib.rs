//! # inject-lint-core
//!
//! Core framework for statically validating dependency-injection
//! declarations.
//!
//! Validation runs in two phases. The [`collect`] phase flattens a tree of
//! [`Declaration`]s into an [`ElementTree`], classifying every marker and
//! recording which executable owns each parameter. The check phase runs
//! every [`Rule`] over every element and hands the findings to a
//! [`Reporter`], which applies per-element suppression before forwarding
//! them to a [`DiagnosticSink`].
//!
//! - [`Rule`] trait for per-element checks
//! - [`Validator`] for orchestrating a run
//! - [`MarkerClassifier`] for mapping marker names to semantic kinds
//! - [`TypeOracle`] for the host's type queries
//! - [`Diagnostic`] for representing findings
//!
//! ## Example
//!
//! ```ignore
//! use inject_lint_core::{Diagnostic, DeclarationSet, Validator};
//!
//! let validator = Validator::builder()
//!     .rules(inject_lint_rules::all_rules())
//!     .build();
//!
//! let set = DeclarationSet::from_json(input)?;
//! let mut sink: Vec<Diagnostic> = Vec::new();
//! let report = validator.validate_set(&set, &mut sink);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classifier;
mod collector;
mod config;
mod context;
mod declaration;
mod model;
mod oracle;
mod reporter;
mod rule;
mod types;
mod validator;

pub use classifier::{AssistedTag, Classification, MarkerCatalog, MarkerClassifier};
pub use collector::collect;
pub use config::{Config, ConfigError, MarkerEntry, ModulesConfig, RuleConfig};
pub use context::RuleContext;
pub use declaration::{Declaration, DeclarationSet, InputError, MarkerDecl};
pub use model::{
    Element, ElementId, ElementKind, ElementTree, Marker, MarkerKind, MarkerValue, Modifier,
    ParameterOwnerMap, Vocabulary,
};
pub use oracle::{DeclaredTypeOracle, TypeOracle, DEFAULT_MODULE_SUPERTYPES};
pub use reporter::{DiagnosticSink, Reporter};
pub use rule::{Rule, RuleBox};
pub use types::{Diagnostic, DiagnosticReport, Location, Report, Severity};
pub use validator::{Validator, ValidatorBuilder};
