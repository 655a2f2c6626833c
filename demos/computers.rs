//! Demonstrates the authenticated pipeline against a mock Jamf server: the first call acquires a
//! bearer token, later calls reuse it, and JSON and XML endpoints decode through the same client.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use jamf_classic::Client;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/v1/auth/token");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"token":"demo-token","expires":"2099-01-01T00:00:00.000Z"}"#);
		})
		.await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/JSSResource/computers");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"computers":[{"id":1,"name":"Lab-01"},{"id":2,"name":"Lab-02"}]}"#);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/JSSResource/computers/id/1");
			then.status(200).header("content-type", "text/xml;charset=UTF-8").body(
				"<computer><general><id>1</id><name>Lab-01</name>\
				<serial_number>C02DEMO</serial_number></general></computer>",
			);
		})
		.await;

	let client = Client::new(server.base_url(), "demo-user", "demo-password", None)?;
	let list = client.computers().await?;

	for summary in &list.computers {
		println!("Enrolled: {} (id {}).", summary.name, summary.id);
	}

	let computer = client.computer_details(1_u64).await?;

	println!(
		"Details for {}: serial {}.",
		computer.general.name,
		computer.general.serial_number.as_deref().unwrap_or("unknown")
	);

	token_mock.assert_async().await;

	Ok(())
}
