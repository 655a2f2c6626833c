//! Resource contexts and endpoint construction for classic API callers.

pub mod computer;

pub use computer::*;

// self
use crate::{_prelude::*, error::ConfigError};

/// Named collection segment identifying the type of managed entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceContext {
	/// Classroom definitions.
	Classes,
	/// Enrolled computers.
	Computers,
	/// Computer extension attributes.
	ComputerExtensionAttributes,
	/// Policies.
	Policies,
	/// Scripts.
	Scripts,
}
impl ResourceContext {
	/// Returns the path segment used by the classic API.
	pub const fn as_str(self) -> &'static str {
		match self {
			ResourceContext::Classes => "classes",
			ResourceContext::Computers => "computers",
			ResourceContext::ComputerExtensionAttributes => "computerextensionattributes",
			ResourceContext::Policies => "policies",
			ResourceContext::Scripts => "scripts",
		}
	}
}
impl Display for ResourceContext {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Looks up a single record by numeric id or by name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Identifier {
	/// `/id/{id}` lookup.
	Id(u64),
	/// `/name/{name}` lookup; the name is percent-escaped.
	Name(String),
}
impl From<u64> for Identifier {
	fn from(id: u64) -> Self {
		Self::Id(id)
	}
}
impl From<&str> for Identifier {
	fn from(name: &str) -> Self {
		Self::Name(name.to_owned())
	}
}
impl From<String> for Identifier {
	fn from(name: String) -> Self {
		Self::Name(name)
	}
}
impl Display for Identifier {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Id(id) => write!(f, "{id}"),
			Self::Name(name) => f.write_str(name),
		}
	}
}

/// Builds `{base}/{context}` or `{base}/{context}/{id|name}/{identifier}`.
pub fn endpoint(
	base: &str,
	context: ResourceContext,
	identifier: Option<&Identifier>,
) -> Result<String> {
	if matches!(identifier, Some(Identifier::Name(name)) if name.is_empty()) {
		let reason = "identifier name is empty".into();

		return Err(ConfigError::InvalidEndpoint { reason }.into());
	}

	let mut url = Url::parse(base)
		.map_err(|e| ConfigError::InvalidEndpoint { reason: format!("{base}: {e}") })?;

	{
		let mut segments = url.path_segments_mut().map_err(|_| ConfigError::InvalidEndpoint {
			reason: format!("{base} cannot carry path segments"),
		})?;

		segments.pop_if_empty().push(context.as_str());

		match identifier {
			Some(Identifier::Id(id)) => {
				segments.push("id").push(&id.to_string());
			},
			Some(Identifier::Name(name)) => {
				segments.push("name").push(name);
			},
			None => (),
		}
	}

	Ok(url.into())
}
