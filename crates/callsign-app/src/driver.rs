//! Driver trait for abstracting transport I/O.
//!
//! The [`Driver`] trait decouples the application runtime from the concrete
//! media and signaling SDKs. Each platform implements the trait to provide
//! its I/O, while the generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use callsign_client::TransportEvent;
use callsign_core::Role;
use callsign_proto::Uid;

use crate::App;

/// Abstracts both transport surfaces for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in production and simulation.
///
/// The transport operations mirror the consumed SDK surfaces: join/leave
/// and role control on the media side, login/channel/send on the signaling
/// side. All of them are fire-and-forget from the runtime's perspective: a
/// returned error is logged, never retried, and never rolled back into
/// client state.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next user event.
    ///
    /// Returns an event or `None` if no events are ready.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<crate::AppEvent>, Self::Error>> + Send;

    /// Receive the next transport notification.
    ///
    /// Returns a notification or `None` if none are pending.
    fn recv_notice(&mut self) -> impl Future<Output = Option<TransportEvent>> + Send;

    /// Join the media session.
    fn join_media(
        &mut self,
        channel: &str,
        uid: Uid,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Leave the media session.
    fn leave_media(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Switch the media client role.
    fn set_role(&mut self, role: Role) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Log in to the signaling transport.
    fn login(&mut self, uid: Uid) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Subscribe to the signaling channel.
    fn join_channel(&mut self, channel: &str)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Send a channel-wide text message.
    fn send_channel_message(
        &mut self,
        channel: &str,
        text: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Send a peer-targeted text message.
    fn send_peer_message(
        &mut self,
        peer: Uid,
        text: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Log out of the signaling transport.
    fn logout(&mut self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop both transports and clean up resources.
    fn stop(&mut self);
}
