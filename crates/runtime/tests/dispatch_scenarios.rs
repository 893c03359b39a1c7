//! End-to-end routing of raw events to observer callbacks.

mod common;

use common::{Callback, recording_dispatcher};
use scope_protocol::{ConsoleMessage, Header, Payload, RawEvent, RuntimeId, WindowId, service};
use scope_runtime::{Dispatch, EventKind};

#[test]
fn window_activated_delivers_window_id() {
	let (dispatcher, recorder) = recording_dispatcher();

	let event = RawEvent::with_payload(service::WINDOW_MANAGER, 6, &WindowId { window_id: 42 });
	let outcome = dispatcher.dispatch(&event).unwrap();

	assert_eq!(outcome, Dispatch::Delivered(EventKind::WindowActivated));
	assert_eq!(recorder.take(), vec![Callback::new("on_window_activated", 42_u32)]);
}

#[test]
fn console_message_is_delivered_whole() {
	let (dispatcher, recorder) = recording_dispatcher();

	let message = ConsoleMessage {
		window_id: 3,
		time: 1_700_000_000,
		description: "ReferenceError: foo is not defined".into(),
		uri: Some("http://example.com/app.js".into()),
		context: None,
		source: Some("ecmascript".into()),
		severity: Some("error".into()),
	};
	let event = RawEvent::with_payload(service::CONSOLE_LOGGER, 1, &message);
	dispatcher.dispatch(&event).unwrap();

	assert_eq!(recorder.take(), vec![Callback::new("on_console_message", message)]);
}

#[test]
fn unknown_service_is_a_no_op() {
	let (dispatcher, recorder) = recording_dispatcher();

	let event = RawEvent::new("unknown-service", 1, vec![0xff, 0xff]);
	let outcome = dispatcher.dispatch(&event).unwrap();

	assert_eq!(outcome, Dispatch::UnknownService);
	assert!(recorder.take().is_empty());
}

#[test]
fn runtime_stopped_delivers_runtime_id() {
	let (dispatcher, recorder) = recording_dispatcher();

	let event = RawEvent::with_payload(service::ECMASCRIPT_DEBUGGER, 15, &RuntimeId { runtime_id: 7 });
	dispatcher.dispatch(&event).unwrap();

	assert_eq!(recorder.take(), vec![Callback::new("on_runtime_stopped", 7_u32)]);
}

#[test]
fn corrupt_http_header_names_the_message_type() {
	let (dispatcher, recorder) = recording_dispatcher();

	let event = RawEvent::new(service::HTTP_LOGGER, 1, vec![0xff]);
	let err = dispatcher.dispatch(&event).unwrap_err();

	assert!(err.is_decode());
	assert_eq!(err.type_name(), Some(Header::TYPE_NAME));
	assert!(err.to_string().contains("scope.http_logger.Header"));
	assert!(recorder.take().is_empty());
}

#[test]
fn command_ids_are_scoped_per_service() {
	let (dispatcher, recorder) = recording_dispatcher();

	// 14 is a runtime event for the debugger and a desktop page change elsewhere.
	let debugger = RawEvent::with_payload(service::ECMASCRIPT_DEBUGGER, 14, &RuntimeId { runtime_id: 1 });
	let window_manager = RawEvent::with_payload(service::WINDOW_MANAGER, 14, &WindowId { window_id: 1 });

	assert_eq!(
		dispatcher.dispatch(&debugger).unwrap(),
		Dispatch::Delivered(EventKind::RuntimeStarted)
	);
	assert_eq!(dispatcher.dispatch(&window_manager).unwrap(), Dispatch::UnknownCommand);
	assert_eq!(recorder.names(), vec!["on_runtime_started"]);
}

#[test]
fn incomplete_payloads_are_rejected() {
	let (dispatcher, recorder) = recording_dispatcher();

	let cases = [
		(RawEvent::signal(service::HTTP_LOGGER, 1), Header::TYPE_NAME, "request_id"),
		(
			RawEvent::with_payload(service::HTTP_LOGGER, 1, &WindowId { window_id: 42 }),
			Header::TYPE_NAME,
			"window_id",
		),
		(
			RawEvent::signal(service::ECMASCRIPT_DEBUGGER, 15),
			RuntimeId::TYPE_NAME,
			"runtime_id",
		),
	];

	for (event, type_name, field) in cases {
		let err = dispatcher.dispatch(&event).unwrap_err();
		assert!(err.is_decode());
		assert_eq!(err.type_name(), Some(type_name));
		assert_eq!(
			err.to_string(),
			format!("Could not build {type_name}: missing required field {field}")
		);
	}
	assert!(recorder.take().is_empty());
}
