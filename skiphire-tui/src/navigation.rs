use skiphire_core::{
    model::SkipId,
    ports::{NavigationPort, NavigationSignal},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::warn;

/// Navigation host that hands signals to the event loop over a channel.
pub(crate) struct ChannelNavigator {
    tx: UnboundedSender<NavigationSignal>,
}

impl ChannelNavigator {
    pub(crate) fn new() -> (Self, UnboundedReceiver<NavigationSignal>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    fn send(&self, signal: NavigationSignal) {
        if self.tx.send(signal).is_err() {
            warn!(?signal, "navigation signal dropped, event loop is gone");
        }
    }
}

impl NavigationPort for ChannelNavigator {
    fn advance(&self, offering: SkipId) {
        self.send(NavigationSignal::Advance(offering));
    }

    fn back(&self) {
        self.send(NavigationSignal::Back);
    }
}
