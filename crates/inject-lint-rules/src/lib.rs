//! # inject-lint-rules
//!
//! Built-in validation rules for inject-lint.
//!
//! Each rule checks one structural invariant of dependency-injection
//! declarations. A rule's code doubles as its suppression key: an element
//! whose suppression marker lists the code is exempt from that rule. A few
//! rules also accept the older vocabulary-prefixed keys (for example
//! `GuiceProvidesNotInModule`).
//!
//! ## Available Rules
//!
//! | Code | Name | Severity |
//! |------|------|----------|
//! | `MoreThanOneInjectableConstructor` | `single-injectable-constructor` | error |
//! | `AssistedInjectAndInjectOnSameConstructor` | `conflicting-constructor-markers` | error |
//! | `AssistedInjectAndInjectOnConstructors` | `mixed-constructor-styles` | warning |
//! | `InjectOnFinalField` | `final-field-injection` | error (primary) / warning (alternate) |
//! | `InjectOnAbstractMethod` | `abstract-method-injection` | error |
//! | `AmbiguousAssistedParameters` | `assisted-parameter-disambiguation` | error |
//! | `ProvidesNotInModule` | `provides-must-be-in-module` | error |
//! | `MoreThanOneQualifier` | `qualifier-cardinality` | error |
//! | `QualifierIgnored` | `qualifier-placement` | warning |
//! | `QualifierOnInvalidElement` | `qualifier-kind-restriction` | error |
//! | `MoreThanOneScopeAnnotation` | `scope-cardinality` | error |
//! | `ScopeOnNonProvidesMethod` | `scope-on-non-provides-method` | warning |
//! | `ScopeOnAbstractType` | `scope-on-abstract-type` | error |
//! | `ScopeOnInvalidElement` | `scope-kind-restriction` | error |
//!
//! ## Usage
//!
//! ```ignore
//! use inject_lint_core::Validator;
//! use inject_lint_rules::{QualifierCardinality, ScopeCardinality};
//!
//! let validator = Validator::builder()
//!     .rule(QualifierCardinality::new())
//!     .rule(ScopeCardinality::new())
//!     .build();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod abstract_method_injection;
pub mod assisted_parameter_disambiguation;
pub mod conflicting_constructor_markers;
pub mod final_field_injection;
pub mod mixed_constructor_styles;
mod presets;
pub mod provides_in_module;
pub mod qualifier_cardinality;
pub mod qualifier_kind_restriction;
pub mod qualifier_placement;
pub mod scope_cardinality;
pub mod scope_kind_restriction;
pub mod scope_on_abstract_type;
pub mod scope_on_non_provides_method;
pub mod single_injectable_constructor;

#[cfg(test)]
mod test_support;

pub use abstract_method_injection::AbstractMethodInjection;
pub use assisted_parameter_disambiguation::AssistedParameterDisambiguation;
pub use conflicting_constructor_markers::ConflictingConstructorMarkers;
pub use final_field_injection::FinalFieldInjection;
pub use mixed_constructor_styles::MixedConstructorStyles;
pub use presets::{all_rules, filter_rules, rule_by_key, Preset};
pub use provides_in_module::ProvidesMustBeInModule;
pub use qualifier_cardinality::QualifierCardinality;
pub use qualifier_kind_restriction::QualifierKindRestriction;
pub use qualifier_placement::QualifierPlacement;
pub use scope_cardinality::ScopeCardinality;
pub use scope_kind_restriction::ScopeKindRestriction;
pub use scope_on_abstract_type::ScopeOnAbstractType;
pub use scope_on_non_provides_method::ScopeOnNonProvidesMethod;
pub use single_injectable_constructor::SingleInjectableConstructor;

/// Re-export core types for convenience.
pub use inject_lint_core::{Diagnostic, Rule, Severity};
