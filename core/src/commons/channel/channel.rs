use tokio::sync::{
    mpsc::{self, Receiver, Sender},
    oneshot::{self, Sender as OneshotSender},
};

use crate::commons::errors::ChannelErrors;

/// Message travelling from a handle to the manager task that owns a resource.
#[derive(Debug)]
pub enum ChannelData<I, R>
where
    I: Send,
    R: Send,
{
    /// The sender waits for an answer.
    AskData(AskData<I, R>),
    /// Fire and forget.
    TellData(TellData<I>),
}

#[derive(Debug)]
pub struct AskData<I, R>
where
    I: Send,
    R: Send,
{
    sender: OneshotSender<R>,
    data: I,
}

impl<I: Send, R: Send> AskData<I, R> {
    /// Splits the request into the answer channel and its payload.
    pub fn get(self) -> (OneshotSender<R>, I) {
        (self.sender, self.data)
    }
}

#[derive(Debug)]
pub struct TellData<I>
where
    I: Send,
{
    data: I,
}

impl<I: Send> TellData<I> {
    pub fn get(self) -> I {
        self.data
    }
}

/// Cloneable producer side of an [`MpscChannel`].
#[derive(Clone, Debug)]
pub struct SenderEnd<I, R>
where
    I: Send,
    R: Send,
{
    sender: Sender<ChannelData<I, R>>,
}

impl<I: Send, R: Send> SenderEnd<I, R> {
    fn new(end: Sender<ChannelData<I, R>>) -> SenderEnd<I, R> {
        SenderEnd { sender: end }
    }

    /// Sends `data` and waits until the consumer answers.
    ///
    /// Fails with [`ChannelErrors::ChannelClosed`] when the consumer is gone or
    /// drops the answer channel without replying.
    pub async fn ask(&self, data: I) -> Result<R, ChannelErrors> {
        let (sx, rx) = oneshot::channel::<R>();
        self.sender
            .send(ChannelData::AskData(AskData { sender: sx, data }))
            .await
            .map_err(|_| ChannelErrors::ChannelClosed)?;
        rx.await.map_err(|_| ChannelErrors::ChannelClosed)
    }

    /// Non blocking tell. Fails with [`ChannelErrors::FullQueue`] when the buffer is full.
    pub fn try_tell(&self, data: I) -> Result<(), ChannelErrors> {
        match self.sender.try_reserve() {
            Ok(permit) => {
                permit.send(ChannelData::TellData(TellData { data }));
                Ok(())
            }
            Err(mpsc::error::TrySendError::Full(_)) => Err(ChannelErrors::FullQueue),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(ChannelErrors::ChannelClosed),
        }
    }

    pub async fn tell(&self, data: I) -> Result<(), ChannelErrors> {
        self.sender
            .send(ChannelData::TellData(TellData { data }))
            .await
            .map_err(|_| ChannelErrors::ChannelClosed)
    }
}

/// Consumer side of a bounded multi producer channel with ask/tell semantics.
#[derive(Debug)]
pub struct MpscChannel<I, R>
where
    I: Send,
    R: Send,
{
    receiver: Receiver<ChannelData<I, R>>,
}

impl<I: Send, R: Send> MpscChannel<I, R> {
    pub fn new(buffer: usize) -> (Self, SenderEnd<I, R>) {
        let (sender, receiver) = mpsc::channel::<ChannelData<I, R>>(buffer);
        (Self { receiver }, SenderEnd::new(sender))
    }

    /// Returns `None` once every [`SenderEnd`] has been dropped.
    pub async fn receive(&mut self) -> Option<ChannelData<I, R>> {
        self.receiver.recv().await
    }
}
