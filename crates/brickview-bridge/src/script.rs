//! JavaScript glue for hosting the message contract in a real browsing context.
//!
//! - **Child -> parent**: a host evaluates the output of [`js_post_message`]
//!   inside the course view to deliver an [`OutboundMessage`].
//! - **Parent -> child**: [`js_deliver_inbound`] replays a parent message into
//!   the child window as a `message` event.
//! - [`BRIDGE_INIT_SCRIPT`] forwards every `message` event the child receives
//!   to a native host over `window.ipc`, where it can be fed to an
//!   [`InboundBus`](crate::InboundBus).

use brickview_common::BridgeError;

use crate::message::{InboundMessage, OutboundMessage, Target};

/// Initialization script injected into the course view when it runs inside
/// a native webview instead of a browser iframe.
pub const BRIDGE_INIT_SCRIPT: &str = r#"
(function() {
    if (window.__brickviewBridge) { return; }
    window.__brickviewBridge = true;
    window.addEventListener('message', function(e) {
        if (!e.data || typeof e.data.type !== 'string') { return; }
        if (window.ipc && window.ipc.postMessage) {
            window.ipc.postMessage(JSON.stringify(e.data));
        }
    });
})();
"#;

fn window_expr(target: Target) -> &'static str {
    match target {
        Target::Parent => "window.parent",
        Target::SelfWindow => "window",
    }
}

/// Generate a `postMessage` call delivering `message` to `target`.
pub fn js_post_message(
    target: Target,
    message: &OutboundMessage,
    origin: &str,
) -> Result<String, BridgeError> {
    let payload = serde_json::to_string(message)?;
    let origin = serde_json::to_string(origin)?;
    Ok(format!(
        "{}.postMessage({payload}, {origin});",
        window_expr(target)
    ))
}

/// Generate a script that delivers a parent message into the child window.
pub fn js_deliver_inbound(message: &InboundMessage) -> Result<String, BridgeError> {
    let payload = serde_json::to_string(message)?;
    Ok(format!("window.postMessage({payload}, '*');"))
}
