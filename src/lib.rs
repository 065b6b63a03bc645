//! # fixedrec-rs
//!
//! Mapping-driven parsing of fixed-width text records.
//!
//! Fixed-width files carry one record per line, with a leading tag naming
//! the record type and fields at fixed byte offsets. A [`Registry`] maps
//! each tag to a [`LayoutSpec`]; [`Registry::dispatch`] reads a line's tag
//! prefix, resolves its layout, and slices out the named fields. Values
//! come back as raw untrimmed substrings, so padded fields round-trip.
//!
//! ## Example
//!
//! ```
//! use fixedrec_rs::{FieldSpec, LayoutSpec, Registry};
//!
//! // Layout: tag(4) customer-name(15) customer-id(5) call-type(4) date(8)
//! let mut registry = Registry::new();
//! registry.register(LayoutSpec::new(
//!     "SVCL",
//!     vec![
//!         FieldSpec::new(4, 18, "customer-name"),
//!         FieldSpec::new(19, 23, "customer-id"),
//!         FieldSpec::new(24, 27, "call-type-code"),
//!         FieldSpec::new(28, 35, "date-of-call-string"),
//!     ],
//! ))?;
//!
//! let record = registry
//!     .dispatch("SVCLFOWLER         10101MS0120050313.........................")?;
//! assert_eq!(record.tag(), "SVCL");
//! assert_eq!(record.get("customer-id"), Some("10101"));
//! assert_eq!(record.get("customer-name"), Some("FOWLER         "));
//! # Ok::<(), fixedrec_rs::ParseError>(())
//! ```

pub mod batch;
pub mod error;
pub mod layout;
pub mod parse;
pub mod record;
pub mod registry;

pub use batch::BlankLines;
pub use error::{LoadError, ParseError};
pub use layout::{FieldSpec, LayoutSpec};
pub use parse::parse;
pub use record::Record;
pub use registry::Registry;
