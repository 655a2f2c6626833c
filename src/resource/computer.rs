//! Computer inventory callers.

// self
use crate::{
	_prelude::*,
	client::Client,
	error::ResultExt,
	resource::{self, Identifier, ResourceContext},
};

/// Enrolled computers returned by `GET /JSSResource/computers`.
///
/// Accepts both the JSON shape (`{"computers":[...]}`) and the XML shape
/// (`<computers><computer>...</computer></computers>`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerList {
	/// One entry per enrolled computer.
	#[serde(default, alias = "computer")]
	pub computers: Vec<ComputerSummary>,
}

/// Identifying fields listed for each enrolled computer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerSummary {
	/// Jamf computer id.
	pub id: u64,
	/// Computer name.
	pub name: String,
}

/// Inventory record returned by `GET /JSSResource/computers/{id|name}/...`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Computer {
	/// General inventory section.
	pub general: ComputerGeneral,
	/// User and location section, when reported.
	#[serde(default)]
	pub location: Option<ComputerLocation>,
}

/// General inventory section of a [`Computer`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerGeneral {
	/// Jamf computer id.
	pub id: u64,
	/// Computer name.
	pub name: String,
	/// Hardware serial number.
	pub serial_number: Option<String>,
	/// Hardware UDID.
	pub udid: Option<String>,
	/// Platform label, e.g. `Mac`.
	pub platform: Option<String>,
	/// Primary MAC address.
	pub mac_address: Option<String>,
	/// Last reported IP address.
	pub ip_address: Option<String>,
	/// Last inventory report, as formatted by Jamf.
	pub report_date_utc: Option<String>,
}

/// User and location section of a [`Computer`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerLocation {
	/// Assigned user account.
	pub username: Option<String>,
	/// Assigned user display name.
	pub real_name: Option<String>,
	/// Assigned user email.
	pub email_address: Option<String>,
	/// Department name.
	pub department: Option<String>,
	/// Building name.
	pub building: Option<String>,
}

// JSON wraps the record in `{"computer": ...}`; XML uses `<computer>` as the root element.
#[derive(Deserialize)]
struct ComputerEnvelope {
	computer: Option<Computer>,
	general: Option<ComputerGeneral>,
	location: Option<ComputerLocation>,
}
impl ComputerEnvelope {
	fn into_computer(self) -> Result<Computer> {
		match (self.computer, self.general) {
			(Some(computer), _) => Ok(computer),
			(None, Some(general)) => Ok(Computer { general, location: self.location }),
			(None, None) => Err(Error::MissingRecord { resource: "computer" }),
		}
	}
}

impl Client {
	/// Returns all enrolled computers.
	pub async fn computers(&self) -> Result<ComputerList> {
		let url = resource::endpoint(self.endpoint(), ResourceContext::Computers, None)
			.context(|| "error building Jamf computer query request")?;

		self.get(url.as_str())
			.await
			.context(|| format!("unable to query enrolled computers from {url}"))
	}

	/// Returns the inventory record for one computer, looked up by id or name.
	pub async fn computer_details(&self, identifier: impl Into<Identifier>) -> Result<Computer> {
		let identifier = identifier.into();
		let url =
			resource::endpoint(self.endpoint(), ResourceContext::Computers, Some(&identifier))
				.context(|| {
					format!("error building Jamf query request endpoint for computer: {identifier}")
				})?;
		let envelope: ComputerEnvelope = self.get(url.as_str()).await.context(|| {
			format!("unable to query enrolled computer for computer: {identifier} ({url})")
		})?;

		envelope.into_computer().context(|| format!("unexpected computer payload from {url}"))
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::decode;

	#[test]
	fn list_decodes_from_json_and_xml() {
		let json: ComputerList = decode::decode(
			br#"{"computers":[{"id":1,"name":"Lab-01"},{"id":2,"name":"Lab-02"}]}"#,
			"application/json",
		)
		.expect("JSON list should decode.");
		let xml: ComputerList = decode::decode(
			b"<computers><size>2</size>\
			<computer><id>1</id><name>Lab-01</name></computer>\
			<computer><id>2</id><name>Lab-02</name></computer></computers>",
			"application/xml",
		)
		.expect("XML list should decode.");

		assert_eq!(json.computers.len(), 2);
		assert_eq!(json, xml);
		assert_eq!(xml.computers[1].name, "Lab-02");
	}

	#[test]
	fn details_envelope_accepts_both_shapes() {
		let json: ComputerEnvelope = decode::decode(
			br#"{"computer":{"general":{"id":7,"name":"Kiosk","serial_number":"C02XYZ"}}}"#,
			"application/json",
		)
		.expect("JSON record should decode.");
		let xml: ComputerEnvelope = decode::decode(
			b"<computer><general><id>7</id><name>Kiosk</name>\
			<serial_number>C02XYZ</serial_number></general>\
			<location><username>ana</username></location></computer>",
			"text/xml",
		)
		.expect("XML record should decode.");
		let json = json.into_computer().expect("JSON envelope holds a record.");
		let xml = xml.into_computer().expect("XML envelope holds a record.");

		assert_eq!(json.general, xml.general);
		assert_eq!(json.general.serial_number.as_deref(), Some("C02XYZ"));
		assert_eq!(
			xml.location.and_then(|location| location.username).as_deref(),
			Some("ana")
		);
	}

	#[test]
	fn empty_envelope_is_missing_record() {
		let envelope: ComputerEnvelope =
			decode::decode(b"{}", "application/json").expect("Empty object should decode.");

		assert!(matches!(
			envelope.into_computer(),
			Err(Error::MissingRecord { resource: "computer" })
		));
	}
}
