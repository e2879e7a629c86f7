use crate::types::payload::{MulticastMessage, MulticastOutcome, PushMessage};

pub trait PushSender: Clone + Send + Sync + 'static {
    type Error: std::fmt::Display + Send + Sync + 'static;
    type MulticastFut<'a>: Future<Output = Result<MulticastOutcome, Self::Error>> + Send + 'a
    where
        Self: 'a;
    type SendFut<'a>: Future<Output = Result<(), Self::Error>> + Send + 'a
    where
        Self: 'a;

    fn send_multicast<'a>(&'a self, message: &'a MulticastMessage) -> Self::MulticastFut<'a>;

    fn send<'a>(&'a self, message: &'a PushMessage) -> Self::SendFut<'a>;
}
